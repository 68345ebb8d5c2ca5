//! Exit confirmation modal (Save / Don't Save / Cancel).

use pow_keyboard::Command;
use pow_theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
};

use crate::base::{render_buttons, render_centered_text, render_modal_frame};
use crate::{centered_rect_with_size, dialog_width, text_width, Modal, ModalResult};

const TITLE: &str = "Confirm Exit";
const MESSAGE: &str = "Save changes before exiting?";
const BUTTONS: [&str; 3] = ["Save", "Don't Save", "Cancel"];

/// What to do with unsaved changes on exit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitChoice {
    Save,
    DontSave,
}

/// Asked when exiting with unsaved changes.
///
/// Cancel (button or Escape) closes with [`ModalResult::Cancelled`].
#[derive(Debug, Default)]
pub struct ExitConfirmModal {
    selected: usize,
}

impl ExitConfirmModal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of the highlighted button
    pub fn selected(&self) -> usize {
        self.selected
    }

    fn confirm(&self) -> ModalResult<ExitChoice> {
        match self.selected {
            0 => ModalResult::Confirmed(ExitChoice::Save),
            1 => ModalResult::Confirmed(ExitChoice::DontSave),
            _ => ModalResult::Cancelled,
        }
    }
}

impl Modal for ExitConfirmModal {
    type Result = ExitChoice;

    fn render(&mut self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        let buttons_width = BUTTONS.iter().map(|b| text_width(b) + 4).sum::<u16>() + 8;
        let width = dialog_width(text_width(MESSAGE).max(buttons_width), area.width);
        let modal_area = centered_rect_with_size(width, 7, area);

        let inner = render_modal_frame(modal_area, buf, theme, TITLE);
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(1), // Message
                Constraint::Length(1),
                Constraint::Length(1), // Buttons
                Constraint::Min(0),
            ])
            .split(inner);

        render_centered_text(chunks[1], buf, theme, MESSAGE);
        render_buttons(chunks[3], buf, theme, &BUTTONS, Some(self.selected));
    }

    fn handle_command(&mut self, command: &Command) -> Option<ModalResult<ExitChoice>> {
        match command {
            Command::MoveCursorLeft => {
                self.selected = (self.selected + BUTTONS.len() - 1) % BUTTONS.len();
                None
            }
            Command::MoveCursorRight | Command::InsertTab => {
                self.selected = (self.selected + 1) % BUTTONS.len();
                None
            }
            Command::InsertNewline => Some(self.confirm()),
            Command::Cancel => Some(ModalResult::Cancelled),
            Command::InsertChar('y' | 'Y') => Some(ModalResult::Confirmed(ExitChoice::Save)),
            Command::InsertChar('n' | 'N') => Some(ModalResult::Confirmed(ExitChoice::DontSave)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enter_on_default_saves() {
        let mut modal = ExitConfirmModal::new();
        assert_eq!(
            modal.handle_command(&Command::InsertNewline),
            Some(ModalResult::Confirmed(ExitChoice::Save))
        );
    }

    #[test]
    fn test_buttons_cycle_both_ways() {
        let mut modal = ExitConfirmModal::new();
        assert_eq!(modal.handle_command(&Command::MoveCursorLeft), None);
        assert_eq!(modal.selected(), 2);
        modal.handle_command(&Command::InsertTab);
        assert_eq!(modal.selected(), 0);
        modal.handle_command(&Command::MoveCursorRight);
        assert_eq!(
            modal.handle_command(&Command::InsertNewline),
            Some(ModalResult::Confirmed(ExitChoice::DontSave))
        );
    }

    #[test]
    fn test_cancel_button_and_escape() {
        let mut modal = ExitConfirmModal::new();
        modal.handle_command(&Command::MoveCursorLeft);
        assert_eq!(
            modal.handle_command(&Command::InsertNewline),
            Some(ModalResult::Cancelled)
        );

        let mut modal = ExitConfirmModal::new();
        assert_eq!(modal.handle_command(&Command::Cancel), Some(ModalResult::Cancelled));
    }

    #[test]
    fn test_shortcuts() {
        let mut modal = ExitConfirmModal::new();
        assert_eq!(
            modal.handle_command(&Command::InsertChar('n')),
            Some(ModalResult::Confirmed(ExitChoice::DontSave))
        );
        assert_eq!(
            modal.handle_command(&Command::InsertChar('Y')),
            Some(ModalResult::Confirmed(ExitChoice::Save))
        );
        assert_eq!(modal.handle_command(&Command::InsertChar('q')), None);
        assert_eq!(modal.handle_command(&Command::Save), None);
    }

    #[test]
    fn test_render_shows_message_and_buttons() {
        let theme = Theme::fallback();
        let mut buf = Buffer::empty(Rect::new(0, 0, 80, 24));
        ExitConfirmModal::new().render(buf.area, &mut buf, &theme);

        let screen: String = (0..24u16)
            .map(|y| (0..80u16).map(|x| buf[(x, y)].symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n");
        assert!(screen.contains("Confirm Exit"));
        assert!(screen.contains(MESSAGE));
        assert!(screen.contains("[ Save ]    [ Don't Save ]    [ Cancel ]"));
    }
}
