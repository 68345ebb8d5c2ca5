//! Status line at the bottom of the screen.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
};

use pow_app::Session;
use pow_theme::Theme;

/// Left part: file state, type, cursor position and scroll range.
fn file_spans(session: &Session, theme: &Theme, file_type: &str) -> Vec<Span<'static>> {
    let text = Style::default().fg(theme.status_fg).bg(theme.status_bg);
    let icon = Style::default().fg(theme.status_icon).bg(theme.status_bg);
    let icons = theme.icons;

    let modified = if session.is_modified() {
        icons.modified
    } else {
        ' '
    };

    let mut spans = vec![
        Span::styled(" ", text),
        Span::styled(modified.to_string(), icon),
        Span::styled(" ", text),
        Span::styled(icons.file.to_string(), icon),
        Span::styled(
            format!(
                " {} [{}] [{}:{}]",
                session.display_name(),
                file_type,
                session.cursor.line + 1,
                session.cursor.column + 1
            ),
            text,
        ),
    ];

    let total = session.buffer.line_count();
    if let Some(percent) = session.viewport.scroll_percentage(total) {
        let start = session.viewport.top_line + 1;
        let end = session.viewport.visible_end(total);
        spans.extend([
            Span::styled(" ", text),
            Span::styled(icons.position.to_string(), icon),
            Span::styled(format!(" {}-{}/{} ", start, end, total), text),
            Span::styled(icons.percentage.to_string(), icon),
            Span::styled(format!(" {}%", percent), text),
        ]);
    }

    spans
}

/// Right part: key hints
fn hint_spans(theme: &Theme) -> Vec<Span<'static>> {
    let text = Style::default().fg(theme.status_fg).bg(theme.status_bg);
    let icon = Style::default().fg(theme.status_icon).bg(theme.status_bg);
    let icons = theme.icons;

    vec![
        Span::styled(icons.save.to_string(), icon),
        Span::styled(":Save ", text),
        Span::styled(icons.exit.to_string(), icon),
        Span::styled(":Exit ", text),
        Span::styled(icons.find.to_string(), icon),
        Span::styled(":Find", text),
    ]
}

/// Draw the status line into the single-row `area`.
pub fn render(buf: &mut Buffer, area: Rect, session: &Session, theme: &Theme, file_type: &str) {
    if area.is_empty() {
        return;
    }
    buf.set_style(area, Style::default().fg(theme.status_fg).bg(theme.status_bg));

    let left = Line::from(file_spans(session, theme, file_type));
    let left_width = left.width();
    buf.set_line(area.x, area.y, &left, area.width);

    // Hints only when they fit after the file info with a one-cell margin
    let hints = Line::from(hint_spans(theme));
    let hints_width = hints.width();
    let width = usize::from(area.width);
    if left_width + hints_width + 2 <= width {
        let x = area.x + (width - hints_width - 1) as u16;
        buf.set_line(x, area.y, &hints, hints_width as u16);
    }
}
