//! Editor session: the document together with everything that edits and views it.

use anyhow::Result;
use std::path::{Path, PathBuf};

use pow_buffer::{load_document, Cursor, Persistence, SearchState, TextBuffer, Viewport};
use pow_modal::MessageModal;

use crate::Mode;

/// Default number of spaces inserted by Tab
pub const DEFAULT_TAB_SIZE: usize = 4;

/// Name shown for a session without a file
pub const UNTITLED: &str = "untitled";

/// One open document and its editing state.
#[derive(Debug)]
pub struct Session {
    pub buffer: TextBuffer,
    pub cursor: Cursor,
    pub viewport: Viewport,
    pub search: SearchState,
    pub mode: Mode,
    /// Target of Ctrl+S; `None` until the first save-as
    pub file_path: Option<PathBuf>,
    pub should_quit: bool,
    pub tab_size: usize,
}

impl Session {
    /// Create a session over an already loaded buffer
    pub fn new(buffer: TextBuffer, file_path: Option<PathBuf>, viewport_height: usize) -> Self {
        Self {
            buffer,
            cursor: Cursor::new(),
            viewport: Viewport::new(viewport_height),
            search: SearchState::new(),
            mode: Mode::Normal,
            file_path,
            should_quit: false,
            tab_size: DEFAULT_TAB_SIZE,
        }
    }

    /// Empty untitled session
    pub fn untitled(viewport_height: usize) -> Self {
        Self::new(TextBuffer::new(), None, viewport_height)
    }

    /// Open `path`, or start untitled when no path is given.
    ///
    /// A missing file starts a new, unmodified document under that name.
    /// Any other read failure starts an untitled session showing the error.
    pub fn open(
        persistence: &dyn Persistence,
        path: Option<PathBuf>,
        viewport_height: usize,
    ) -> Self {
        let Some(path) = path else {
            return Self::untitled(viewport_height);
        };

        match load_document(persistence, &path) {
            Ok(doc) => {
                if doc.existed {
                    pow_logger::info(format!(
                        "Opened {} ({} lines)",
                        path.display(),
                        doc.buffer.line_count()
                    ));
                } else {
                    pow_logger::info(format!("New file: {}", path.display()));
                }
                Self::new(doc.buffer, Some(path), viewport_height)
            }
            Err(err) => {
                pow_logger::error(format!("Failed to open {}: {:#}", path.display(), err));
                let mut session = Self::untitled(viewport_height);
                session.show_message(format!("Error opening file: {:#}", err));
                session
            }
        }
    }

    pub fn with_tab_size(mut self, tab_size: usize) -> Self {
        self.tab_size = tab_size;
        self
    }

    pub fn is_modified(&self) -> bool {
        self.buffer.is_modified()
    }

    /// File name for the status bar
    pub fn display_name(&self) -> String {
        match &self.file_path {
            Some(path) => path.display().to_string(),
            None => UNTITLED.to_string(),
        }
    }

    /// Replace the current mode with a message dialog
    pub fn show_message(&mut self, message: impl Into<String>) {
        self.mode = Mode::Message(Box::new(MessageModal::new(message)));
    }

    /// Follow a terminal resize; one row is reserved for the status bar.
    pub fn resize(&mut self, rows: u16) {
        self.viewport.resize(usize::from(rows.saturating_sub(1)));
        self.viewport.ensure_visible(&self.cursor);
    }

    /// Write the document to `path` and mark it saved.
    pub(crate) fn write_to(&mut self, persistence: &dyn Persistence, path: &Path) -> Result<()> {
        persistence.write(path, &self.buffer.to_text())?;
        self.buffer.mark_saved();
        pow_logger::info(format!("Saved {}", path.display()));
        Ok(())
    }
}
