//! Application state and logic.
//!
//! [`App`] hosts the core [`GridSession`] and holds the terminal-only state
//! (viewport, status line).

use gridpad_core::{Bounds, EditEnd, GridSession, KeyPress, Position, Response, cell_name};

use crate::config::Config;
use crate::error::Result;

/// Main application state container.
pub struct App {
    /// Cell values, selection/edit state and the open editor
    pub session: GridSession,
    /// Width of every data column
    pub col_width: u16,
    /// Viewport offset (column)
    pub viewport_col: usize,
    /// Viewport offset (row)
    pub viewport_row: usize,
    /// Number of visible columns
    pub visible_cols: usize,
    /// Number of visible rows
    pub visible_rows: usize,
    /// Status message to display
    pub status_message: String,
    /// Set by the quit keys
    pub should_quit: bool,
}

impl App {
    pub fn new(bounds: Bounds, col_width: u16) -> Self {
        App {
            session: GridSession::new(bounds),
            col_width,
            viewport_col: 0,
            viewport_row: 0,
            visible_cols: bounds.cols(),
            visible_rows: bounds.rows(),
            status_message: String::new(),
            should_quit: false,
        }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new(config.bounds()?, config.col_width))
    }

    /// Feed a key press to the grid. Returns whether the key was handled
    /// (its default action suppressed).
    pub fn handle_key(&mut self, key: KeyPress) -> bool {
        let response = self.session.handle_key(key);
        self.after(response)
    }

    /// Left click on a data cell.
    pub fn click_cell(&mut self, pos: Position) {
        let response = self.session.click(pos);
        self.after(response);
    }

    /// Left click somewhere that is not a data cell.
    pub fn click_outside(&mut self) {
        let response = self.session.blur();
        self.after(response);
    }

    pub fn cell_text(&self, pos: Position) -> String {
        self.session.cell_text(pos)
    }

    /// Update viewport to keep the selection visible
    pub fn update_viewport(&mut self) {
        let Some(cursor) = self.session.grid().selection() else {
            return;
        };

        // Horizontal scrolling
        if cursor.col < self.viewport_col {
            self.viewport_col = cursor.col;
        } else if cursor.col >= self.viewport_col + self.visible_cols {
            self.viewport_col = cursor.col + 1 - self.visible_cols;
        }

        // Vertical scrolling
        if cursor.row < self.viewport_row {
            self.viewport_row = cursor.row;
        } else if cursor.row >= self.viewport_row + self.visible_rows {
            self.viewport_row = cursor.row + 1 - self.visible_rows;
        }
    }

    fn after(&mut self, response: Response) -> bool {
        if let Some(end) = response.ended.last() {
            self.status_message = match end {
                EditEnd::Saved(pos) => format!("Saved {}", cell_name(*pos)),
                EditEnd::Discarded(_) => "Edit cancelled".to_string(),
            };
        }
        self.update_viewport();
        response.handled
    }
}
