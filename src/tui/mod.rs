//! Terminal front end.

mod app;
mod input;
mod keys;
mod session;
mod ui;

pub use app::App;

use crate::error::Result;
use session::TerminalSession;

/// Run the grid in the terminal until the user quits.
///
/// The terminal session (raw mode, mouse capture) lives exactly as long as
/// this call.
pub fn run(app: &mut App) -> Result<()> {
    let mut session = TerminalSession::enter()?;
    input::run_app(session.terminal_mut(), app)?;
    Ok(())
}
