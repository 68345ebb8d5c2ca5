//! Common modal rendering utilities.
//!
//! Provides shared functionality for modal windows:
//! - Frame rendering with a centered title and drop shadow
//! - Button row rendering

use pow_theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

const SHADOW: Color = Color::Rgb(10, 10, 10);

/// Spaces between buttons
pub const BUTTON_SPACING: usize = 4;

/// Render modal frame: shadow, cleared background, border and title.
///
/// Returns the inner area.
pub fn render_modal_frame(area: Rect, buf: &mut Buffer, theme: &Theme, title: &str) -> Rect {
    render_shadow(area, buf);
    Clear.render(area, buf);

    let block = Block::default()
        .title(Line::from(Span::styled(
            format!(" {} ", title),
            Style::default()
                .fg(theme.selected_fg)
                .bg(theme.button_bg)
                .add_modifier(Modifier::BOLD),
        )))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.dialog_border).bg(theme.dialog_bg))
        .style(Style::default().fg(theme.dialog_fg).bg(theme.dialog_bg));

    let inner = block.inner(area);
    block.render(area, buf);
    inner
}

/// Shadow one row below and two columns right of `area`, clipped to `buf`.
fn render_shadow(area: Rect, buf: &mut Buffer) {
    let bounds = buf.area;
    let style = Style::default().bg(SHADOW).fg(SHADOW);

    let bottom = area.y.saturating_add(area.height);
    let right = area.x.saturating_add(area.width);

    for x in area.x.saturating_add(2)..=right.saturating_add(1) {
        set_shadow_cell(buf, bounds, x, bottom, style);
    }
    for y in area.y.saturating_add(1)..bottom {
        set_shadow_cell(buf, bounds, right, y, style);
        set_shadow_cell(buf, bounds, right.saturating_add(1), y, style);
    }
}

fn set_shadow_cell(buf: &mut Buffer, bounds: Rect, x: u16, y: u16, style: Style) {
    if x >= bounds.x && x < bounds.right() && y >= bounds.y && y < bounds.bottom() {
        buf[(x, y)].set_symbol(" ").set_style(style);
    }
}

/// Render a centered row of `[ label ]` buttons, highlighting `selected`.
pub fn render_buttons(
    area: Rect,
    buf: &mut Buffer,
    theme: &Theme,
    labels: &[&str],
    selected: Option<usize>,
) {
    let button_style = Style::default().fg(theme.button_fg).bg(theme.button_bg);
    let selected_style = Style::default()
        .fg(theme.selected_fg)
        .bg(theme.selected_bg)
        .add_modifier(Modifier::BOLD);

    let mut spans = Vec::with_capacity(labels.len() * 2);
    for (idx, label) in labels.iter().enumerate() {
        if idx > 0 {
            spans.push(Span::raw(" ".repeat(BUTTON_SPACING)));
        }
        let style = if selected == Some(idx) {
            selected_style
        } else {
            button_style
        };
        spans.push(Span::styled(format!("[ {} ]", label), style));
    }

    Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .render(area, buf);
}

/// Render a centered line of dialog text.
pub fn render_centered_text(area: Rect, buf: &mut Buffer, theme: &Theme, text: &str) {
    Paragraph::new(text.to_string())
        .alignment(Alignment::Center)
        .style(Style::default().fg(theme.dialog_fg).bg(theme.dialog_bg))
        .render(area, buf);
}
