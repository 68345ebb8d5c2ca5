//! Text input modal dialog.

use pow_keyboard::Command;
use pow_theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthChar;

use crate::base::{render_centered_text, render_modal_frame};
use crate::{centered_rect_with_size, dialog_width, text_width, Modal, ModalResult, TextInput};

const HINT: &str = "Enter: confirm  Esc: cancel";

/// Text input modal window.
///
/// Enter on an empty input keeps the dialog open.
#[derive(Debug)]
pub struct InputModal {
    title: String,
    prompt: String,
    input: TextInput,
}

impl InputModal {
    pub fn new(title: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self::with_default(title, prompt, "")
    }

    /// Create with an initial value, cursor at its end
    pub fn with_default(
        title: impl Into<String>,
        prompt: impl Into<String>,
        default: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            prompt: prompt.into(),
            input: TextInput::with_text(default),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn text(&self) -> &str {
        self.input.text()
    }

    /// Input line spans fitted into `width` columns, keeping the cursor visible.
    fn input_line(&self, width: u16, theme: &Theme) -> Line<'static> {
        let text_style = Style::default().fg(theme.dialog_fg).bg(theme.dialog_bg);
        let cursor_style = Style::default()
            .fg(theme.dialog_bg)
            .bg(theme.cursor)
            .add_modifier(Modifier::BOLD);

        let mut after = self.input.text_after_cursor().chars();
        let cursor_char = after.next().unwrap_or(' ');
        let after: String = after.collect();

        // Drop leading chars until prompt + text before cursor + cursor fit
        let budget = usize::from(width)
            .saturating_sub(usize::from(text_width(&self.prompt)))
            .saturating_sub(1);
        let before: Vec<char> = self.input.text_before_cursor().chars().collect();
        let mut start = 0;
        let mut used: usize = before.iter().map(|c| c.width().unwrap_or(0)).sum();
        while used > budget && start < before.len() {
            used -= before[start].width().unwrap_or(0);
            start += 1;
        }
        let before: String = before[start..].iter().collect();

        Line::from(vec![
            Span::styled(self.prompt.clone(), text_style.add_modifier(Modifier::BOLD)),
            Span::styled(before, text_style),
            Span::styled(cursor_char.to_string(), cursor_style),
            Span::styled(after, text_style),
        ])
    }
}

impl Modal for InputModal {
    type Result = String;

    fn render(&mut self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        let content = text_width(&self.prompt) + text_width(self.input.text()) + 1;
        let width = dialog_width(content.max(text_width(HINT)), area.width);
        let modal_area = centered_rect_with_size(width, 7, area);

        let inner = render_modal_frame(modal_area, buf, theme, &self.title);
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(1), // Prompt and input
                Constraint::Length(1),
                Constraint::Length(1), // Hint
                Constraint::Min(0),
            ])
            .split(inner);

        let input_area = Rect {
            x: chunks[1].x.saturating_add(1),
            width: chunks[1].width.saturating_sub(2),
            ..chunks[1]
        };
        Paragraph::new(self.input_line(input_area.width, theme)).render(input_area, buf);
        render_centered_text(chunks[3], buf, theme, HINT);
    }

    fn handle_command(&mut self, command: &Command) -> Option<ModalResult<String>> {
        match command {
            Command::Cancel => return Some(ModalResult::Cancelled),
            Command::InsertNewline => {
                if self.input.is_empty() {
                    return None;
                }
                return Some(ModalResult::Confirmed(self.input.text().to_string()));
            }
            Command::InsertChar(c) => self.input.insert(*c),
            Command::Backspace => {
                self.input.backspace();
            }
            Command::Delete => {
                self.input.delete();
            }
            Command::MoveCursorLeft => self.input.move_left(),
            Command::MoveCursorRight => self.input.move_right(),
            Command::MoveToLineStart => self.input.move_home(),
            Command::MoveToLineEnd => self.input.move_end(),
            _ => {}
        }
        None
    }
}
