//! Modal dialog system for pow.
//!
//! Dialogs own keyboard input while open: the application forwards every
//! decoded [`Command`] to the active modal until it returns a
//! [`ModalResult`].

use pow_keyboard::Command;
use pow_theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
};
use unicode_width::UnicodeWidthStr;

pub mod base;
pub mod confirm;
pub mod input;
pub mod message;
mod text_input;

pub use confirm::{ExitChoice, ExitConfirmModal};
pub use input::InputModal;
pub use message::MessageModal;
pub use text_input::TextInput;

/// Result of a closed modal window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalResult<T> {
    /// User confirmed the action with a result.
    Confirmed(T),
    /// User cancelled the action.
    Cancelled,
}

/// Trait for all modal windows.
pub trait Modal {
    /// Modal window result type.
    type Result;

    /// Render the modal window centered in `area`.
    fn render(&mut self, area: Rect, buf: &mut Buffer, theme: &Theme);

    /// Handle a decoded key command.
    /// Returns Some(result) if the modal window should close.
    fn handle_command(&mut self, command: &Command) -> Option<ModalResult<Self::Result>>;
}

/// Widest dialog, in columns
pub const MAX_DIALOG_WIDTH: u16 = 50;

/// Dialog width for `content_width` columns of content on a screen of
/// `screen_width` columns: content plus borders and padding, capped at
/// [`MAX_DIALOG_WIDTH`] and at the screen width minus a margin.
pub fn dialog_width(content_width: u16, screen_width: u16) -> u16 {
    let wanted = content_width.saturating_add(6).max(30).min(MAX_DIALOG_WIDTH);
    wanted.min(screen_width.saturating_sub(4)).max(1)
}

/// Display width of a string in terminal columns.
pub fn text_width(text: &str) -> u16 {
    u16::try_from(text.width()).unwrap_or(u16::MAX)
}

/// Create a centered rectangle with specified width and height within a container
pub fn centered_rect_with_size(width: u16, height: u16, r: Rect) -> Rect {
    let width = width.min(r.width);
    let height = height.min(r.height);
    let horizontal_margin = r.width.saturating_sub(width) / 2;
    let vertical_margin = r.height.saturating_sub(height) / 2;

    let vertical_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(vertical_margin),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(horizontal_margin),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vertical_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect() {
        let r = centered_rect_with_size(40, 10, Rect::new(0, 0, 100, 50));
        assert_eq!(r, Rect::new(30, 20, 40, 10));
    }

    #[test]
    fn test_centered_rect_clamps_to_container() {
        let container = Rect::new(0, 0, 30, 8);
        let r = centered_rect_with_size(50, 9, container);
        assert!(r.width <= container.width);
        assert!(r.height <= container.height);
    }

    #[test]
    fn test_dialog_width_bounds() {
        assert_eq!(dialog_width(10, 200), 30);
        assert_eq!(dialog_width(40, 200), 46);
        assert_eq!(dialog_width(120, 200), MAX_DIALOG_WIDTH);
        assert_eq!(dialog_width(40, 30), 26);
    }

    #[test]
    fn test_text_width_counts_columns() {
        assert_eq!(text_width("abc"), 3);
        assert_eq!(text_width("日本"), 4);
    }
}
