//! Syntax spans cached per buffer revision.

use pow_buffer::TextBuffer;
use pow_highlight::{global_highlighter, HighlightSpan, Palette};

/// Highlight result for one (revision, language) pair
#[derive(Debug, Default)]
pub struct HighlightCache {
    key: Option<(u64, &'static str)>,
    lines: Vec<Vec<HighlightSpan>>,
}

impl HighlightCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the cached spans belong to this buffer state
    pub fn is_fresh(&self, buffer: &TextBuffer, language: &'static str) -> bool {
        self.key == Some((buffer.revision(), language))
    }

    /// Spans for every line, recomputed only when the buffer or language changed.
    pub fn spans(
        &mut self,
        buffer: &TextBuffer,
        language: &'static str,
        palette: Palette,
    ) -> &[Vec<HighlightSpan>] {
        if !self.is_fresh(buffer, language) {
            let highlighter = global_highlighter();
            self.lines = if highlighter.is_supported(language) {
                highlighter.highlight(language, &buffer.lines().join("\n"), palette)
            } else {
                Vec::new()
            };
            self.key = Some((buffer.revision(), language));
        }
        &self.lines
    }
}
