//! Scoped terminal session.
//!
//! While a [`TerminalSession`] is alive the terminal is in raw mode on the
//! alternate screen with mouse capture on, so every key and click reaches the
//! grid. Dropping it puts the terminal back, including on early return and
//! panic unwinding.

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use std::io::{self, Stdout};
use tracing::{info, warn};

pub struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalSession {
    pub fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        if let Err(err) = execute!(stdout, EnterAlternateScreen, EnableMouseCapture) {
            restore(&mut stdout);
            return Err(err);
        }
        let terminal = match Terminal::new(CrosstermBackend::new(stdout)) {
            Ok(terminal) => terminal,
            Err(err) => {
                restore(&mut io::stdout());
                return Err(err);
            }
        };
        info!("terminal session started");
        Ok(TerminalSession { terminal })
    }

    pub fn terminal_mut(&mut self) -> &mut Terminal<CrosstermBackend<Stdout>> {
        &mut self.terminal
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        restore(self.terminal.backend_mut());
        if let Err(err) = self.terminal.show_cursor() {
            warn!(%err, "failed to show cursor");
        }
        info!("terminal session ended");
    }
}

fn restore<W: io::Write>(out: &mut W) {
    if let Err(err) = disable_raw_mode() {
        warn!(%err, "failed to leave raw mode");
    }
    if let Err(err) = execute!(out, LeaveAlternateScreen, DisableMouseCapture) {
        warn!(%err, "failed to leave alternate screen");
    }
}
