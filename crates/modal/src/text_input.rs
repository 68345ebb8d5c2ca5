//! Single-line text input with a char-indexed cursor.

/// Text input handler with cursor management.
///
/// The cursor is tracked in characters, not bytes, so multi-byte input
/// edits correctly.
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    input: String,
    cursor_pos: usize,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an input prefilled with `text`, cursor at the end
    pub fn with_text(text: impl Into<String>) -> Self {
        let input = text.into();
        let cursor_pos = input.chars().count();
        Self { input, cursor_pos }
    }

    pub fn text(&self) -> &str {
        &self.input
    }

    /// Cursor position in characters
    pub fn cursor_pos(&self) -> usize {
        self.cursor_pos
    }

    pub fn is_empty(&self) -> bool {
        self.input.is_empty()
    }

    fn byte_index(&self) -> usize {
        self.input
            .char_indices()
            .nth(self.cursor_pos)
            .map(|(idx, _)| idx)
            .unwrap_or(self.input.len())
    }

    /// Insert a character at the cursor position
    pub fn insert(&mut self, c: char) {
        let byte_idx = self.byte_index();
        self.input.insert(byte_idx, c);
        self.cursor_pos += 1;
    }

    /// Delete character before cursor
    pub fn backspace(&mut self) -> bool {
        if self.cursor_pos == 0 {
            return false;
        }
        self.cursor_pos -= 1;
        let byte_idx = self.byte_index();
        self.input.remove(byte_idx);
        true
    }

    /// Delete character at cursor
    pub fn delete(&mut self) -> bool {
        if self.cursor_pos >= self.input.chars().count() {
            return false;
        }
        let byte_idx = self.byte_index();
        self.input.remove(byte_idx);
        true
    }

    pub fn move_left(&mut self) {
        self.cursor_pos = self.cursor_pos.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor_pos = (self.cursor_pos + 1).min(self.input.chars().count());
    }

    pub fn move_home(&mut self) {
        self.cursor_pos = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor_pos = self.input.chars().count();
    }

    pub fn text_before_cursor(&self) -> &str {
        &self.input[..self.byte_index()]
    }

    pub fn text_after_cursor(&self) -> &str {
        &self.input[self.byte_index()..]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefilled_cursor_at_end() {
        let input = TextInput::with_text("notes.txt");
        assert_eq!(input.cursor_pos(), 9);
        assert_eq!(input.text_after_cursor(), "");
    }

    #[test]
    fn test_edit_multibyte() {
        let mut input = TextInput::with_text("файл");
        input.move_left();
        input.insert('ы');
        assert_eq!(input.text(), "файыл");
        assert_eq!(input.text_before_cursor(), "файы");

        assert!(input.backspace());
        assert!(input.delete());
        assert_eq!(input.text(), "фай");
        assert!(!input.delete());
    }

    #[test]
    fn test_cursor_bounds() {
        let mut input = TextInput::with_text("ab");
        input.move_right();
        assert_eq!(input.cursor_pos(), 2);
        input.move_home();
        input.move_left();
        assert_eq!(input.cursor_pos(), 0);
        assert!(!input.backspace());
        input.move_end();
        assert_eq!(input.cursor_pos(), 2);
    }
}
