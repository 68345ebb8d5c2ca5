//! Document area: text rows, syntax colors, search matches and the cursor.

use ratatui::{buffer::Buffer, layout::Rect, style::Style};
use unicode_width::UnicodeWidthChar;

use pow_app::{Mode, Session};
use pow_highlight::{style_at, HighlightSpan};
use pow_theme::Theme;

/// Final style of a text cell.
///
/// Priority: current search match, other matches, syntax span, default text.
/// The cursor is painted over all of these separately.
pub fn cell_style(theme: &Theme, syntax: Option<Style>, search_hit: Option<bool>) -> Style {
    match search_hit {
        Some(true) => Style::default()
            .fg(theme.active_match_fg)
            .bg(theme.active_match_bg),
        Some(false) => Style::default().fg(theme.match_fg).bg(theme.match_bg),
        None => {
            let base = Style::default().fg(theme.fg).bg(theme.bg);
            syntax.map_or(base, |style| base.patch(style))
        }
    }
}

fn char_width(ch: char) -> usize {
    ch.width().unwrap_or(0).max(1)
}

/// Screen offset of `column` on a line scrolled by `left` chars.
/// Columns past the end of the line count as single cells.
fn cursor_offset(text: &str, column: usize, left: usize) -> usize {
    let len = text.chars().count();
    let in_text: usize = text
        .chars()
        .skip(left)
        .take(column.min(len).saturating_sub(left))
        .map(char_width)
        .sum();
    in_text + column.saturating_sub(len.max(left))
}

/// Draw the visible document rows into `area`.
pub fn render(
    buf: &mut Buffer,
    area: Rect,
    session: &Session,
    theme: &Theme,
    spans: &[Vec<HighlightSpan>],
) {
    if area.is_empty() {
        return;
    }
    buf.set_style(area, Style::default().fg(theme.fg).bg(theme.bg));

    let in_search = matches!(session.mode, Mode::Search);
    let top = session.viewport.top_line;
    let left = session.viewport.left_column;
    let end = session.viewport.visible_end(session.buffer.line_count());

    for (row, line_idx) in (top..end).enumerate().take(usize::from(area.height)) {
        let Some(text) = session.buffer.line(line_idx) else {
            break;
        };
        let y = area.y + row as u16;
        let line_spans = spans.get(line_idx).map(Vec::as_slice).unwrap_or(&[]);

        let mut x = area.x;
        for (col, ch) in text.chars().enumerate().skip(left) {
            let width = char_width(ch) as u16;
            if x + width > area.right() {
                break;
            }
            let hit = session.search.match_at(line_idx, col);
            let style = cell_style(theme, style_at(line_spans, col), hit);
            let symbol = if ch.is_control() { ' ' } else { ch };
            buf[(x, y)].set_char(symbol).set_style(style);
            for pad in 1..width {
                buf[(x + pad, y)].reset();
            }
            x += width;
        }
    }

    // The search bar owns the input focus while searching
    if !in_search {
        render_cursor(buf, area, session, theme);
    }
}

fn render_cursor(buf: &mut Buffer, area: Rect, session: &Session, theme: &Theme) {
    let cursor = session.cursor;
    let viewport = &session.viewport;
    if !viewport.is_line_visible(cursor.line) || cursor.column < viewport.left_column {
        return;
    }

    let text = session.buffer.line(cursor.line).unwrap_or("");
    let offset = cursor_offset(text, cursor.column, viewport.left_column);
    let row = cursor.line - viewport.top_line;
    if offset >= usize::from(area.width) || row >= usize::from(area.height) {
        return;
    }

    let symbol = text
        .chars()
        .nth(cursor.column)
        .filter(|ch| !ch.is_control())
        .unwrap_or(' ');
    let x = area.x + offset as u16;
    let y = area.y + row as u16;
    buf[(x, y)]
        .set_char(symbol)
        .set_style(Style::default().fg(theme.bg).bg(theme.cursor));
}
