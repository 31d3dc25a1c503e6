//! A grid plus the editor of the cell being edited.
//!
//! [`GridSession`] is what a front end drives. It owns the
//! [`GridController`] and keeps the single [`CellEditor`] in step with it:
//! an editor exists exactly while the controller is editing, and it is seeded
//! from the raw value of the cell it edits.

use tracing::{debug, warn};

use crate::cell::CellEditor;
use crate::controller::{EditResult, GridController, Intent};
use crate::dispatch::{KeyOutcome, KeyPress, dispatch_key};
use crate::error::GridError;
use crate::position::{Bounds, Position};

/// An edit that ended while handling one input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EditEnd {
    Saved(Position),
    Discarded(Position),
}

/// Result of feeding one input to a [`GridSession`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Response {
    /// The input was consumed; the host should suppress its default action.
    pub handled: bool,
    /// Edits that ended, in order.
    pub ended: Vec<EditEnd>,
    /// Intents the controller refused. Nothing changed for these.
    pub rejected: Vec<GridError>,
}

#[derive(Clone, Debug)]
pub struct GridSession {
    grid: GridController,
    editor: Option<CellEditor>,
}

impl GridSession {
    pub fn new(bounds: Bounds) -> Self {
        GridSession {
            grid: GridController::new(bounds),
            editor: None,
        }
    }

    pub fn grid(&self) -> &GridController {
        &self.grid
    }

    /// Editor of the cell being edited, present iff the grid is editing.
    pub fn editor(&self) -> Option<&CellEditor> {
        self.editor.as_ref()
    }

    /// Offer a key press to the editing cell, or else to the navigation
    /// dispatcher.
    pub fn handle_key(&mut self, key: KeyPress) -> Response {
        let mut response = Response::default();
        if let Some(editor) = self.editor.as_mut() {
            let outcome = editor.handle_key(key);
            response.handled = outcome.suppress_default || outcome.end.is_some();
            for intent in outcome.into_intents() {
                self.apply(intent, &mut response);
            }
            return response;
        }

        if let KeyOutcome::Handled(intent) =
            dispatch_key(key, self.grid.selection(), self.grid.is_editing())
        {
            response.handled = true;
            self.apply(intent, &mut response);
        }
        response
    }

    /// Click on a data cell.
    ///
    /// Clicking the cell being edited keeps editing it; clicking any other
    /// cell saves the current edit first.
    pub fn click(&mut self, pos: Position) -> Response {
        let mut response = Response {
            handled: true,
            ..Response::default()
        };
        if self.editor.as_ref().is_some_and(|e| e.position() == pos) {
            return response;
        }
        self.blur_into(&mut response);
        self.apply(Intent::Click(pos), &mut response);
        response
    }

    /// Focus left the editing cell without a key ending the edit: save it.
    /// Does nothing when no edit is open.
    pub fn blur(&mut self) -> Response {
        let mut response = Response::default();
        self.blur_into(&mut response);
        response
    }

    /// Text a cell shows right now: the live buffer while editing, the
    /// formatted value otherwise. Empty for positions outside the grid.
    pub fn cell_text(&self, pos: Position) -> String {
        match &self.editor {
            Some(editor) if editor.position() == pos => editor.buffer().to_string(),
            _ => self
                .grid
                .cell_view(pos)
                .map(|view| view.display_text())
                .unwrap_or_default(),
        }
    }

    fn blur_into(&mut self, response: &mut Response) {
        if let Some(result) = self.editor.as_mut().and_then(CellEditor::blur) {
            response.handled = true;
            self.apply(Intent::EndEdit(result), response);
        }
    }

    fn apply(&mut self, intent: Intent, response: &mut Response) {
        let ended = match (&intent, self.grid.edit_target()) {
            (Intent::EndEdit(EditResult::Saved(_)), Some(pos)) => Some(EditEnd::Saved(pos)),
            (Intent::EndEdit(EditResult::Discarded), Some(pos)) => Some(EditEnd::Discarded(pos)),
            _ => None,
        };

        debug!(?intent, "apply");
        match self.grid.apply(intent) {
            Ok(()) => response.ended.extend(ended),
            Err(err) => {
                warn!(%err, state = ?self.grid.state(), "intent rejected");
                response.rejected.push(err);
            }
        }
        self.sync_editor();
    }

    /// Begin a fresh editor when the grid starts editing a new cell, drop it
    /// when editing ends.
    fn sync_editor(&mut self) {
        match self.grid.edit_target() {
            Some(pos) if self.editor.as_ref().map(CellEditor::position) != Some(pos) => {
                let raw = self.grid.value(pos).unwrap_or_default();
                self.editor = Some(CellEditor::begin(pos, raw));
            }
            Some(_) => {}
            None => self.editor = None,
        }
    }
}
