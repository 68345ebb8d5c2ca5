//! Keyboard command decoding for pow.
//!
//! Key events are parsed into a [`Command`] once, so every handler
//! (editing, search, dialogs) works on the same enumerated value and can be
//! tested without a terminal.

mod cadence;

pub use cadence::{should_redraw, KeyCadence, RepeatTracker, DEFAULT_REDRAW_INTERVAL};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use pow_buffer::NavKey;

/// Editor command representing a user action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    // Navigation
    MoveCursorUp,
    MoveCursorDown,
    MoveCursorLeft,
    MoveCursorRight,
    MoveToLineStart,
    MoveToLineEnd,
    PageUp,
    PageDown,

    // Text editing
    InsertChar(char),
    InsertTab,
    InsertNewline,
    Backspace,
    Delete,

    // Clipboard
    Paste,

    // File and session
    Save,
    Exit,
    /// Quit at once, discarding unsaved changes
    ForceQuit,

    // Search
    StartSearch,

    /// Escape
    Cancel,

    // No operation (for unhandled keys)
    None,
}

impl Command {
    /// Parse a KeyEvent into a Command.
    pub fn from_key_event(key: KeyEvent) -> Self {
        match (key.code, key.modifiers) {
            (KeyCode::Up, KeyModifiers::NONE) => Self::MoveCursorUp,
            (KeyCode::Down, KeyModifiers::NONE) => Self::MoveCursorDown,
            (KeyCode::Left, KeyModifiers::NONE) => Self::MoveCursorLeft,
            (KeyCode::Right, KeyModifiers::NONE) => Self::MoveCursorRight,
            (KeyCode::Home, KeyModifiers::NONE) => Self::MoveToLineStart,
            (KeyCode::End, KeyModifiers::NONE) => Self::MoveToLineEnd,
            (KeyCode::PageUp, KeyModifiers::NONE) => Self::PageUp,
            (KeyCode::PageDown, KeyModifiers::NONE) => Self::PageDown,

            (KeyCode::Char(ch), mods) if mods.contains(KeyModifiers::CONTROL) => {
                match ch.to_ascii_lowercase() {
                    's' => Self::Save,
                    'x' => Self::Exit,
                    'c' => Self::ForceQuit,
                    'f' => Self::StartSearch,
                    'v' => Self::Paste,
                    _ => Self::None,
                }
            }
            (KeyCode::Char(ch), KeyModifiers::NONE | KeyModifiers::SHIFT) => Self::InsertChar(ch),

            (KeyCode::Tab, KeyModifiers::NONE) => Self::InsertTab,
            (KeyCode::Enter, KeyModifiers::NONE) => Self::InsertNewline,
            (KeyCode::Backspace, KeyModifiers::NONE) => Self::Backspace,
            (KeyCode::Delete, KeyModifiers::NONE) => Self::Delete,
            (KeyCode::Esc, _) => Self::Cancel,

            _ => Self::None,
        }
    }

    /// Arrow key behind this command, if it is one
    pub fn nav_key(&self) -> Option<NavKey> {
        match self {
            Self::MoveCursorUp => Some(NavKey::Up),
            Self::MoveCursorDown => Some(NavKey::Down),
            Self::MoveCursorLeft => Some(NavKey::Left),
            Self::MoveCursorRight => Some(NavKey::Right),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_navigation_keys() {
        assert_eq!(
            Command::from_key_event(key(KeyCode::Up, KeyModifiers::NONE)),
            Command::MoveCursorUp
        );
        assert_eq!(
            Command::from_key_event(key(KeyCode::PageDown, KeyModifiers::NONE)),
            Command::PageDown
        );
        assert_eq!(
            Command::from_key_event(key(KeyCode::End, KeyModifiers::NONE)),
            Command::MoveToLineEnd
        );
    }

    #[test]
    fn test_text_input() {
        assert_eq!(
            Command::from_key_event(key(KeyCode::Char('a'), KeyModifiers::NONE)),
            Command::InsertChar('a')
        );
        assert_eq!(
            Command::from_key_event(key(KeyCode::Char('Ж'), KeyModifiers::SHIFT)),
            Command::InsertChar('Ж')
        );
        assert_eq!(
            Command::from_key_event(key(KeyCode::Enter, KeyModifiers::NONE)),
            Command::InsertNewline
        );
        assert_eq!(
            Command::from_key_event(key(KeyCode::Tab, KeyModifiers::NONE)),
            Command::InsertTab
        );
    }

    #[test]
    fn test_control_shortcuts() {
        let cases = [
            ('s', Command::Save),
            ('x', Command::Exit),
            ('c', Command::ForceQuit),
            ('f', Command::StartSearch),
            ('v', Command::Paste),
            ('S', Command::Save),
            ('q', Command::None),
        ];
        for (ch, expected) in cases {
            assert_eq!(
                Command::from_key_event(key(KeyCode::Char(ch), KeyModifiers::CONTROL)),
                expected,
                "Ctrl+{}",
                ch
            );
        }
    }

    #[test]
    fn test_alt_chars_are_ignored() {
        assert_eq!(
            Command::from_key_event(key(KeyCode::Char('a'), KeyModifiers::ALT)),
            Command::None
        );
    }

    #[test]
    fn test_escape_cancels() {
        assert_eq!(
            Command::from_key_event(key(KeyCode::Esc, KeyModifiers::NONE)),
            Command::Cancel
        );
    }

    #[test]
    fn test_nav_key() {
        assert_eq!(Command::MoveCursorLeft.nav_key(), Some(NavKey::Left));
        assert_eq!(Command::PageUp.nav_key(), None);
        assert_eq!(Command::InsertChar(' ').nav_key(), None);
    }
}
