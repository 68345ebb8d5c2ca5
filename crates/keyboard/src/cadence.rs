//! Redraw cadence for held arrow keys.
//!
//! Consecutive identical arrow presses skip rendering and speed up vertical
//! movement; a redraw is forced every `interval` skipped presses and on any
//! other key.

use pow_buffer::{row_delta, NavKey};

use crate::Command;

/// Skipped arrow presses before a redraw is forced
pub const DEFAULT_REDRAW_INTERVAL: usize = 20;

/// Whether `command` should be rendered, given `counter` unrendered presses
/// (including this one) of the same arrow key.
pub fn should_redraw(command: &Command, counter: usize, interval: usize) -> bool {
    command.nav_key().is_none() || counter >= interval.max(1)
}

/// Outcome of feeding one command to the tracker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyCadence {
    /// Rows to move for a vertical arrow
    pub row_delta: usize,
    /// Render after handling the command
    pub redraw: bool,
}

/// Counts consecutive identical arrow presses between redraws
#[derive(Debug, Clone)]
pub struct RepeatTracker {
    last: Option<NavKey>,
    counter: usize,
    interval: usize,
}

impl RepeatTracker {
    pub fn new(interval: usize) -> Self {
        Self {
            last: None,
            counter: 0,
            interval,
        }
    }

    /// Register a command and decide its movement step and redraw.
    pub fn observe(&mut self, command: &Command) -> KeyCadence {
        let Some(key) = command.nav_key() else {
            self.reset();
            return KeyCadence {
                row_delta: 1,
                redraw: true,
            };
        };

        let previous = if self.last == Some(key) { self.counter } else { 0 };
        let delta = row_delta(key, previous);
        self.last = Some(key);
        self.counter = previous + 1;

        let redraw = should_redraw(command, self.counter, self.interval);
        if redraw {
            self.reset();
        }

        KeyCadence {
            row_delta: delta,
            redraw,
        }
    }

    /// Forget the current run of presses
    pub fn reset(&mut self) {
        self.last = None;
        self.counter = 0;
    }

    pub fn counter(&self) -> usize {
        self.counter
    }
}

impl Default for RepeatTracker {
    fn default() -> Self {
        Self::new(DEFAULT_REDRAW_INTERVAL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_redraw_non_navigation_always() {
        assert!(should_redraw(&Command::InsertChar('a'), 0, 20));
        assert!(should_redraw(&Command::PageDown, 3, 20));
        assert!(should_redraw(&Command::None, 0, 20));
    }

    #[test]
    fn test_should_redraw_navigation_at_interval() {
        assert!(!should_redraw(&Command::MoveCursorDown, 1, 20));
        assert!(!should_redraw(&Command::MoveCursorDown, 19, 20));
        assert!(should_redraw(&Command::MoveCursorDown, 20, 20));
    }

    #[test]
    fn test_held_key_accelerates() {
        let mut tracker = RepeatTracker::new(20);
        let deltas: Vec<usize> = (0..17)
            .map(|_| tracker.observe(&Command::MoveCursorDown).row_delta)
            .collect();

        assert_eq!(&deltas[..6], &[1; 6]);
        assert_eq!(&deltas[6..11], &[3; 5]);
        assert_eq!(&deltas[11..16], &[5; 5]);
        assert_eq!(deltas[16], 10);
    }

    #[test]
    fn test_forced_redraw_resets_counter() {
        let mut tracker = RepeatTracker::new(20);
        for _ in 0..19 {
            assert!(!tracker.observe(&Command::MoveCursorUp).redraw);
        }
        let cadence = tracker.observe(&Command::MoveCursorUp);
        assert!(cadence.redraw);
        assert_eq!(tracker.counter(), 0);

        assert_eq!(tracker.observe(&Command::MoveCursorUp).row_delta, 1);
    }

    #[test]
    fn test_other_key_resets_counter() {
        let mut tracker = RepeatTracker::new(20);
        for _ in 0..8 {
            tracker.observe(&Command::MoveCursorDown);
        }
        let cadence = tracker.observe(&Command::InsertChar(' '));
        assert!(cadence.redraw);
        assert_eq!(tracker.counter(), 0);
        assert_eq!(tracker.observe(&Command::MoveCursorDown).row_delta, 1);
    }

    #[test]
    fn test_changing_direction_restarts_run() {
        let mut tracker = RepeatTracker::new(20);
        for _ in 0..8 {
            tracker.observe(&Command::MoveCursorDown);
        }
        let cadence = tracker.observe(&Command::MoveCursorUp);
        assert_eq!(cadence.row_delta, 1);
        assert!(!cadence.redraw);
        assert_eq!(tracker.counter(), 1);
    }
}
