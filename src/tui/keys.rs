//! Key translation layer.
//!
//! Turns crossterm key events into the grid's own [`KeyPress`] model so the
//! core never sees a terminal type.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use gridpad_core::{Key, KeyPress};

/// Ctrl+C and Ctrl+Q leave the application from any state.
pub fn is_quit(key: &KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('q'))
}

/// Translate a terminal key event.
///
/// `BackTab` (how most terminals report Shift+Tab) becomes a shifted Tab.
/// Characters typed with Ctrl or Alt are not text and map to [`Key::Other`].
pub fn translate(key: KeyEvent) -> KeyPress {
    let shift = key.modifiers.contains(KeyModifiers::SHIFT);
    let k = match key.code {
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Left => Key::Left,
        KeyCode::Right => Key::Right,
        KeyCode::Tab => Key::Tab,
        KeyCode::BackTab => return KeyPress::shifted(Key::Tab),
        KeyCode::Enter => Key::Enter,
        KeyCode::Esc => Key::Escape,
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Delete => Key::Delete,
        KeyCode::Home => Key::Home,
        KeyCode::End => Key::End,
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            Key::Char(c)
        }
        _ => Key::Other,
    };
    KeyPress { key: k, shift }
}

/// Short help shown in the status bar.
pub fn status_hint(editing: bool) -> &'static str {
    if editing {
        "Enter:save  Esc:cancel  Tab/S-Tab:save+move  C-q:quit"
    } else {
        "arrows/Tab:move  Enter:edit  click:edit  C-q:quit"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn arrows_and_editing_keys() {
        assert_eq!(translate(key(KeyCode::Up, KeyModifiers::NONE)).key, Key::Up);
        assert_eq!(translate(key(KeyCode::Enter, KeyModifiers::NONE)).key, Key::Enter);
        assert_eq!(translate(key(KeyCode::Esc, KeyModifiers::NONE)).key, Key::Escape);
        assert_eq!(translate(key(KeyCode::Delete, KeyModifiers::NONE)).key, Key::Delete);
    }

    #[test]
    fn shift_tab_in_both_encodings() {
        assert_eq!(
            translate(key(KeyCode::BackTab, KeyModifiers::SHIFT)),
            KeyPress::shifted(Key::Tab)
        );
        assert_eq!(
            translate(key(KeyCode::Tab, KeyModifiers::SHIFT)),
            KeyPress::shifted(Key::Tab)
        );
        assert_eq!(translate(key(KeyCode::Tab, KeyModifiers::NONE)), KeyPress::new(Key::Tab));
    }

    #[test]
    fn plain_and_shifted_characters_are_text() {
        assert_eq!(translate(key(KeyCode::Char('a'), KeyModifiers::NONE)).key, Key::Char('a'));
        assert_eq!(translate(key(KeyCode::Char('$'), KeyModifiers::SHIFT)).key, Key::Char('$'));
        assert_eq!(translate(key(KeyCode::Char('é'), KeyModifiers::NONE)).key, Key::Char('é'));
    }

    #[test]
    fn control_and_alt_characters_are_not_text() {
        assert_eq!(translate(key(KeyCode::Char('s'), KeyModifiers::CONTROL)).key, Key::Other);
        assert_eq!(translate(key(KeyCode::Char('x'), KeyModifiers::ALT)).key, Key::Other);
        assert_eq!(translate(key(KeyCode::F(1), KeyModifiers::NONE)).key, Key::Other);
    }

    #[test]
    fn quit_keys() {
        assert!(is_quit(&key(KeyCode::Char('q'), KeyModifiers::CONTROL)));
        assert!(is_quit(&key(KeyCode::Char('c'), KeyModifiers::CONTROL)));
        assert!(!is_quit(&key(KeyCode::Char('q'), KeyModifiers::NONE)));
    }
}
