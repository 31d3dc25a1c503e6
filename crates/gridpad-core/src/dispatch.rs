//! Keyboard navigation dispatcher.
//!
//! Translates key presses into [`Intent`]s while no cell is being edited.
//! Editing keys (Escape, Enter, Tab inside a cell) belong to the
//! [`CellEditor`](crate::cell::CellEditor); the dispatcher stays out of the way
//! so a key is never handled twice.

use crate::controller::Intent;
use crate::position::{Direction, Position};

/// A key as delivered by the host, independent of any terminal library.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Tab,
    Enter,
    Escape,
    Backspace,
    Delete,
    Home,
    End,
    Char(char),
    /// Anything the grid has no use for.
    Other,
}

/// One key press with its shift state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyPress {
    pub key: Key,
    pub shift: bool,
}

impl KeyPress {
    pub fn new(key: Key) -> Self {
        KeyPress { key, shift: false }
    }

    pub fn shifted(key: Key) -> Self {
        KeyPress { key, shift: true }
    }
}

impl From<Key> for KeyPress {
    fn from(key: Key) -> Self {
        KeyPress::new(key)
    }
}

/// Result of offering a key to the dispatcher.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Not ours: leave the event to the host.
    Ignored,
    /// Apply the intent and suppress the host's default action.
    Handled(Intent),
}

/// Direction a navigation key points in, if it is one.
pub fn navigation_direction(key: KeyPress) -> Option<Direction> {
    match key.key {
        Key::Up => Some(Direction::Up),
        Key::Down => Some(Direction::Down),
        Key::Left => Some(Direction::Left),
        Key::Right => Some(Direction::Right),
        Key::Tab if key.shift => Some(Direction::Left),
        Key::Tab => Some(Direction::Right),
        _ => None,
    }
}

/// Translate a key press given the current selection and edit state.
///
/// With no selection, navigation keys still produce
/// [`Intent::Navigate`]; the controller turns that into "select the origin".
pub fn dispatch_key(key: KeyPress, selection: Option<Position>, editing: bool) -> KeyOutcome {
    if editing {
        return KeyOutcome::Ignored;
    }

    if key.key == Key::Enter {
        return match selection {
            Some(_) => KeyOutcome::Handled(Intent::StartEditing),
            None => KeyOutcome::Ignored,
        };
    }

    match navigation_direction(key) {
        Some(direction) => KeyOutcome::Handled(Intent::Navigate(direction)),
        None => KeyOutcome::Ignored,
    }
}
