use crate::Cursor;

/// Viewport for vertical scrolling
/// Tracks which part of document is visible on screen
#[derive(Debug, Clone)]
pub struct Viewport {
    /// First visible line (0-based)
    pub top_line: usize,
    /// Number of visible lines
    pub height: usize,
    /// Horizontal scroll (left column), adjusted by the renderer only
    pub left_column: usize,
}

impl Viewport {
    /// Create a new viewport
    pub fn new(height: usize) -> Self {
        Self {
            top_line: 0,
            height,
            left_column: 0,
        }
    }

    /// Update viewport height after a terminal resize
    pub fn resize(&mut self, height: usize) {
        self.height = height;
    }

    /// Height used for scrolling decisions; never zero
    fn rows(&self) -> usize {
        self.height.max(1)
    }

    /// Get index of last visible line (exclusive)
    pub fn bottom_line(&self) -> usize {
        self.top_line + self.rows()
    }

    /// Check if line is visible
    pub fn is_line_visible(&self, line: usize) -> bool {
        line >= self.top_line && line < self.bottom_line()
    }

    /// Scroll viewport to make cursor line visible
    /// Returns true if viewport was changed
    pub fn ensure_visible(&mut self, cursor: &Cursor) -> bool {
        if cursor.line < self.top_line {
            self.top_line = cursor.line;
            true
        } else if cursor.line >= self.bottom_line() {
            self.top_line = cursor.line + 1 - self.rows();
            true
        } else {
            false
        }
    }

    /// Scroll horizontally so that `column` fits in `width` cells
    pub fn ensure_column_visible(&mut self, column: usize, width: usize) {
        let width = width.max(1);
        if column < self.left_column {
            self.left_column = column;
        } else if column >= self.left_column + width {
            self.left_column = column + 1 - width;
        }
    }

    /// Scroll up one line when the cursor sits on the first row, which the
    /// search bar covers. Nothing to do at the top of the document.
    pub fn clear_first_row(&mut self, cursor: &Cursor) {
        if cursor.line == self.top_line && self.top_line > 0 && self.height > 1 {
            self.top_line -= 1;
        }
    }

    /// One past the last visible real line
    pub fn visible_end(&self, line_count: usize) -> usize {
        self.bottom_line().min(line_count)
    }

    /// Percentage of the document shown up to the bottom of the screen.
    ///
    /// Only defined when the document does not fit on screen.
    pub fn scroll_percentage(&self, line_count: usize) -> Option<usize> {
        if line_count <= self.height || line_count == 0 {
            return None;
        }
        Some(100 * self.visible_end(line_count) / line_count)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(24)
    }
}
