//! Screen rendering for pow.
//!
//! One frame is the document area, the status line below it, the search
//! bar over the first row while searching, and the active dialog on top.

pub mod editor_view;
mod highlight_cache;
pub mod search_bar;
pub mod status_bar;

pub use highlight_cache::HighlightCache;

use ratatui::{
    layout::{Constraint, Layout, Rect},
    Frame,
};

use pow_app::{Mode, Session};
use pow_highlight::{file_type, Palette};
use pow_modal::Modal;
use pow_theme::Theme;

/// Draws sessions with a fixed theme
#[derive(Debug)]
pub struct Renderer {
    theme: Theme,
    palette: Palette,
    highlight: HighlightCache,
}

impl Renderer {
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            palette: Palette::for_theme(theme.name),
            highlight: HighlightCache::new(),
        }
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Draw a full frame. Scrolls the viewport to the cursor first.
    pub fn render(&mut self, frame: &mut Frame<'_>, session: &mut Session) {
        let area = frame.area();
        if area.is_empty() {
            return;
        }
        let [doc_area, status_area] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);

        session.viewport.ensure_visible(&session.cursor);
        session
            .viewport
            .ensure_column_visible(session.cursor.column, usize::from(doc_area.width));

        let language = file_type(session.file_path.as_deref());
        let spans = self.highlight.spans(&session.buffer, language, self.palette);
        let theme = &self.theme;
        let buf = frame.buffer_mut();

        editor_view::render(buf, doc_area, session, theme, spans);
        status_bar::render(buf, status_area, session, theme, language);

        match &mut session.mode {
            Mode::Normal => {}
            Mode::Search => {
                let bar = Rect { height: 1, ..area };
                search_bar::render(buf, bar, &session.search, theme);
            }
            Mode::SaveAs { modal, .. } => modal.render(area, buf, theme),
            Mode::ConfirmExit(modal) => modal.render(area, buf, theme),
            Mode::Message(modal) => modal.render(area, buf, theme),
        }
    }
}
