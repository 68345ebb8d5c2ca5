//! Terminal events consumed by the editor loop.

use anyhow::Result;
use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, KeyEventKind};

/// Application event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Key press
    Key(KeyEvent),
    /// Terminal resize (columns, rows)
    Resize(u16, u16),
    /// Anything else (key releases, mouse, focus, paste)
    Ignored,
}

impl From<CrosstermEvent> for Event {
    fn from(event: CrosstermEvent) -> Self {
        match event {
            // With the kitty keyboard protocol, Release and Repeat arrive too
            CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => Self::Key(key),
            CrosstermEvent::Resize(width, height) => Self::Resize(width, height),
            _ => Self::Ignored,
        }
    }
}

/// Source of events for the main loop
pub trait EventSource {
    /// Block until the next event
    fn next(&mut self) -> Result<Event>;
}

/// Reads events from the terminal; blocks with no timeout.
#[derive(Debug, Default)]
pub struct EventHandler;

impl EventHandler {
    pub fn new() -> Self {
        Self
    }
}

impl EventSource for EventHandler {
    fn next(&mut self) -> Result<Event> {
        Ok(event::read()?.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEventState, KeyModifiers};

    fn key(kind: KeyEventKind) -> KeyEvent {
        KeyEvent {
            code: KeyCode::Char('a'),
            modifiers: KeyModifiers::NONE,
            kind,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn test_only_presses_are_keys() {
        let press = key(KeyEventKind::Press);
        assert_eq!(Event::from(CrosstermEvent::Key(press)), Event::Key(press));
        assert_eq!(
            Event::from(CrosstermEvent::Key(key(KeyEventKind::Release))),
            Event::Ignored
        );
        assert_eq!(
            Event::from(CrosstermEvent::Key(key(KeyEventKind::Repeat))),
            Event::Ignored
        );
    }

    #[test]
    fn test_resize_and_focus() {
        assert_eq!(Event::from(CrosstermEvent::Resize(80, 24)), Event::Resize(80, 24));
        assert_eq!(Event::from(CrosstermEvent::FocusGained), Event::Ignored);
    }
}
