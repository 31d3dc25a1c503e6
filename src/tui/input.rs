use crossterm::event::{self, Event, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use ratatui::prelude::*;
use std::io;
use tracing::{debug, info};

use super::app::App;
use super::keys;
use super::ui;

fn handle_mouse_event(app: &mut App, terminal_area: Rect, mouse: MouseEvent) {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return;
    }

    let [_edit_bar, grid_area, _status_area] = ui::split_main_chunks(terminal_area);
    match ui::grid_cell_at(app, grid_area, mouse.column, mouse.row) {
        Some(pos) => app.click_cell(pos),
        None => app.click_outside(),
    }
}

/// Event loop: one event at a time, each fully applied before the next read.
pub fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        match event::read()? {
            Event::Key(key) => {
                // Only process key press events (Windows reports Press + Release)
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if keys::is_quit(&key) {
                    app.should_quit = true;
                } else {
                    let handled = app.handle_key(keys::translate(key));
                    debug!(?key, handled, "key");
                }
            }
            Event::Mouse(mouse) => {
                let size = terminal.size()?;
                let terminal_area = Rect::new(0, 0, size.width, size.height);
                handle_mouse_event(app, terminal_area, mouse);
            }
            _ => {}
        }

        if app.should_quit {
            info!("quit requested");
            return Ok(());
        }
    }
}
