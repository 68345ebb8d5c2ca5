//! Message dialog dismissed by any key.

use pow_keyboard::Command;
use pow_theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Paragraph, Widget, Wrap},
};

use crate::base::{render_centered_text, render_modal_frame};
use crate::{centered_rect_with_size, dialog_width, text_width, Modal, ModalResult};

const TITLE: &str = "Message";
const HINT: &str = "Press any key to continue";

#[derive(Debug, Clone)]
pub struct MessageModal {
    message: String,
}

impl MessageModal {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Modal for MessageModal {
    type Result = ();

    fn render(&mut self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        let width = dialog_width(text_width(&self.message).max(text_width(HINT)), area.width);
        let inner_width = usize::from(width.saturating_sub(2)).max(1);
        let message_lines = u16::try_from(self.message.chars().count().div_ceil(inner_width))
            .unwrap_or(u16::MAX)
            .max(1);
        let modal_area = centered_rect_with_size(width, message_lines.saturating_add(6), area);

        let inner = render_modal_frame(modal_area, buf, theme, TITLE);
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(message_lines),
                Constraint::Length(1),
                Constraint::Length(1), // Hint
                Constraint::Min(0),
            ])
            .split(inner);

        Paragraph::new(self.message.clone())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .style(Style::default().fg(theme.error).bg(theme.dialog_bg))
            .render(chunks[1], buf);
        render_centered_text(chunks[3], buf, theme, HINT);
    }

    fn handle_command(&mut self, _command: &Command) -> Option<ModalResult<()>> {
        Some(ModalResult::Confirmed(()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_any_key_dismisses() {
        for command in [Command::None, Command::InsertChar('q'), Command::Cancel, Command::Save] {
            let mut modal = MessageModal::new("Error saving file: denied");
            assert_eq!(modal.handle_command(&command), Some(ModalResult::Confirmed(())));
        }
    }

    #[test]
    fn test_render_message_and_hint() {
        let theme = Theme::fallback();
        let mut buf = Buffer::empty(Rect::new(0, 0, 80, 24));
        MessageModal::new("Error saving file: denied").render(buf.area, &mut buf, &theme);

        let screen: String = (0..24u16)
            .map(|y| (0..80u16).map(|x| buf[(x, y)].symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n");
        assert!(screen.contains(" Message "));
        assert!(screen.contains("Error saving file: denied"));
        assert!(screen.contains(HINT));
    }

    #[test]
    fn test_long_message_wraps_inside_dialog() {
        let theme = Theme::fallback();
        let mut buf = Buffer::empty(Rect::new(0, 0, 40, 20));
        let long = "Error saving file: ".to_string() + &"deep/".repeat(30);
        // Must not panic or overflow the buffer
        MessageModal::new(long).render(buf.area, &mut buf, &theme);
    }
}
