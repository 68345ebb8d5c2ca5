//! Search input drawn over the first screen row.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
};

use pow_buffer::SearchState;
use pow_theme::Theme;

pub fn render(buf: &mut Buffer, area: Rect, search: &SearchState, theme: &Theme) {
    if area.is_empty() {
        return;
    }
    let text = Style::default().fg(theme.dialog_fg).bg(theme.dialog_bg);
    let icon = Style::default().fg(theme.status_icon).bg(theme.dialog_bg);
    let cursor = Style::default().fg(theme.dialog_bg).bg(theme.selected_bg);

    buf.set_style(area, text);
    for x in area.left()..area.right() {
        buf[(x, area.y)].set_char(' ');
    }

    let mut spans = vec![
        Span::styled(theme.icons.find.to_string(), icon),
        Span::styled(" Search: ", text),
        Span::styled(search.query.clone(), text),
        Span::styled(" ", cursor),
    ];
    if let Some((current, total)) = search.status() {
        spans.extend([
            Span::styled("  ", text),
            Span::styled(theme.icons.position.to_string(), icon),
            Span::styled(format!(" {}/{}", current, total), text),
        ]);
    }

    buf.set_line(area.x, area.y, &Line::from(spans), area.width);
}

#[cfg(test)]
mod tests {
    use super::*;
    use pow_buffer::TextBuffer;

    fn draw(search: &SearchState) -> (Buffer, String) {
        let theme = Theme::fallback();
        let area = Rect::new(0, 0, 40, 1);
        let mut buf = Buffer::empty(area);
        render(&mut buf, area, search, &theme);
        let text = (0..40u16).map(|x| buf[(x, 0)].symbol().to_string()).collect();
        (buf, text)
    }

    #[test]
    fn test_prompt_query_and_count() {
        let buffer = TextBuffer::from_text("abc\nxabc");
        let mut search = SearchState::new();
        search.set_query("abc", &buffer);
        search.next_match();

        let (buf, text) = draw(&search);
        assert!(text.starts_with("⌕ Search: abc   ⌖ 2/2"));
        assert_eq!(buf[(13, 0)].bg, Theme::fallback().selected_bg);
        assert_eq!(buf[(39, 0)].bg, Theme::fallback().dialog_bg);
    }

    #[test]
    fn test_no_count_without_matches() {
        let buffer = TextBuffer::from_text("abc");
        let mut search = SearchState::new();
        search.set_query("zzz", &buffer);

        let (_, text) = draw(&search);
        assert!(text.starts_with("⌕ Search: zzz "));
        assert!(!text.contains('/'));
    }
}
