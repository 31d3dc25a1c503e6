//! Per-cell view state.
//!
//! [`CellView`] is what a renderer needs to draw one cell. [`CellEditor`] is
//! the instance state of the one cell being edited: its transient buffer and
//! the flag that stops a key-driven end from being followed by a second
//! commit when focus leaves the cell.

use crate::controller::{EditResult, Intent};
use crate::dispatch::{Key, KeyPress, navigation_direction};
use crate::format::format_cell;
use crate::position::{Direction, Position};

/// Render props for one cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellView<'a> {
    pub position: Position,
    /// Raw stored value.
    pub value: &'a str,
    pub selected: bool,
    pub editing: bool,
}

impl CellView<'_> {
    /// Text to show when the cell is not being edited: the formatted value.
    /// An editing cell shows its raw value (the editor's buffer replaces it
    /// once the user types).
    pub fn display_text(&self) -> String {
        if self.editing {
            self.value.to_string()
        } else {
            format_cell(self.value)
        }
    }
}

/// What a key press did to an edit.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EditorOutcome {
    /// Set when the key ended the edit.
    pub end: Option<EditResult>,
    /// Navigation requested after the edit ends.
    pub navigate: Option<Direction>,
    /// The host should swallow the key's default action.
    pub suppress_default: bool,
}

impl EditorOutcome {
    fn ended(result: EditResult) -> Self {
        EditorOutcome {
            end: Some(result),
            ..Default::default()
        }
    }

    /// Controller intents in the order they must be applied: the commit (or
    /// discard) first, then any navigation.
    pub fn into_intents(self) -> Vec<Intent> {
        let mut intents = Vec::with_capacity(2);
        if let Some(result) = self.end {
            intents.push(Intent::EndEdit(result));
        }
        if let Some(direction) = self.navigate {
            intents.push(Intent::Navigate(direction));
        }
        intents
    }
}

/// Edit buffer for the cell currently being edited.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CellEditor {
    position: Position,
    buffer: String,
    /// Byte offset into `buffer`, always on a char boundary.
    cursor: usize,
    /// Whole buffer selected; the next typed character replaces it.
    select_all: bool,
    /// The edit has already ended in this gesture.
    resolved: bool,
}

impl CellEditor {
    /// Start editing `position`, seeding the buffer from its raw value.
    pub fn begin(position: Position, raw: &str) -> Self {
        CellEditor {
            position,
            buffer: raw.to_string(),
            cursor: raw.len(),
            select_all: true,
            resolved: false,
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_all_selected(&self) -> bool {
        self.select_all
    }

    pub fn is_resolved(&self) -> bool {
        self.resolved
    }

    /// Feed one key press to the editor.
    pub fn handle_key(&mut self, key: KeyPress) -> EditorOutcome {
        if self.resolved {
            return EditorOutcome::default();
        }

        match key.key {
            Key::Escape => {
                self.resolved = true;
                EditorOutcome::ended(EditResult::Discarded)
            }
            Key::Enter => {
                self.resolved = true;
                EditorOutcome::ended(EditResult::Saved(self.buffer.clone()))
            }
            Key::Tab => {
                self.resolved = true;
                EditorOutcome {
                    end: Some(EditResult::Saved(self.buffer.clone())),
                    navigate: navigation_direction(key),
                    suppress_default: true,
                }
            }
            Key::Char(c) => {
                self.take_selection();
                self.buffer.insert(self.cursor, c);
                self.cursor += c.len_utf8();
                EditorOutcome::default()
            }
            Key::Backspace => {
                if !self.take_selection() && self.cursor > 0 {
                    let start = self.prev_boundary();
                    self.buffer.drain(start..self.cursor);
                    self.cursor = start;
                }
                EditorOutcome::default()
            }
            Key::Delete => {
                if !self.take_selection() && self.cursor < self.buffer.len() {
                    let end = self.next_boundary();
                    self.buffer.drain(self.cursor..end);
                }
                EditorOutcome::default()
            }
            Key::Left => {
                self.cursor = if self.select_all { 0 } else { self.prev_boundary() };
                self.select_all = false;
                EditorOutcome::default()
            }
            Key::Right => {
                self.cursor = if self.select_all {
                    self.buffer.len()
                } else {
                    self.next_boundary()
                };
                self.select_all = false;
                EditorOutcome::default()
            }
            Key::Home => {
                self.cursor = 0;
                self.select_all = false;
                EditorOutcome::default()
            }
            Key::End => {
                self.cursor = self.buffer.len();
                self.select_all = false;
                EditorOutcome::default()
            }
            Key::Up | Key::Down | Key::Other => EditorOutcome::default(),
        }
    }

    /// Focus left the cell by some other route than an editing key.
    ///
    /// Saves the buffer, unless a key already ended this edit.
    pub fn blur(&mut self) -> Option<EditResult> {
        if self.resolved {
            return None;
        }
        self.resolved = true;
        Some(EditResult::Saved(self.buffer.clone()))
    }

    /// Drop a pending select-all by clearing the buffer. Returns whether
    /// there was one.
    fn take_selection(&mut self) -> bool {
        if !self.select_all {
            return false;
        }
        self.buffer.clear();
        self.cursor = 0;
        self.select_all = false;
        true
    }

    fn prev_boundary(&self) -> usize {
        let mut pos = self.cursor.saturating_sub(1);
        while pos > 0 && !self.buffer.is_char_boundary(pos) {
            pos -= 1;
        }
        pos
    }

    fn next_boundary(&self) -> usize {
        if self.cursor >= self.buffer.len() {
            return self.buffer.len();
        }
        let mut pos = self.cursor + 1;
        while pos < self.buffer.len() && !self.buffer.is_char_boundary(pos) {
            pos += 1;
        }
        pos
    }
}
