use crate::Cursor;

/// Byte offset of the `column`-th char of `line` (line length when past the end).
fn byte_index(line: &str, column: usize) -> usize {
    line.char_indices()
        .nth(column)
        .map(|(idx, _)| idx)
        .unwrap_or(line.len())
}

fn char_len(line: &str) -> usize {
    line.chars().count()
}

/// Pad `line` with spaces so that it is at least `column` chars long.
fn pad_to(line: &mut String, column: usize) {
    let len = char_len(line);
    if column > len {
        line.extend(std::iter::repeat(' ').take(column - len));
    }
}

/// Text buffer holding the whole document as an array of lines.
///
/// Columns are always char (codepoint) indices. Every mutation marks the
/// buffer as modified and bumps its revision counter.
#[derive(Debug, Clone)]
pub struct TextBuffer {
    /// Document lines, never empty
    lines: Vec<String>,
    /// Modified since last load/save
    modified: bool,
    /// Mutation counter
    revision: u64,
}

impl TextBuffer {
    /// Create a buffer holding a single empty line
    pub fn new() -> Self {
        Self {
            lines: vec![String::new()],
            modified: false,
            revision: 0,
        }
    }

    /// Create buffer from raw file contents.
    ///
    /// Lines are split on `\n` only, so any `\r` stays part of the line text
    /// and `to_text` reproduces `text` exactly. A trailing newline yields a
    /// trailing empty line.
    pub fn from_text(text: &str) -> Self {
        Self {
            lines: Self::split_text(text),
            modified: false,
            revision: 0,
        }
    }

    /// Create buffer from already split lines
    pub fn from_lines(lines: Vec<String>) -> Self {
        let lines = if lines.is_empty() {
            vec![String::new()]
        } else {
            lines
        };

        Self {
            lines,
            modified: false,
            revision: 0,
        }
    }

    /// Split text into lines on `\n`
    pub fn split_text(text: &str) -> Vec<String> {
        text.split('\n').map(str::to_string).collect()
    }

    /// Split clipboard text into lines, dropping the `\r` of CRLF endings.
    pub fn split_pasted(text: &str) -> Vec<String> {
        text.split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
            .collect()
    }

    /// Serialize the document, joining lines with `\n`
    pub fn to_text(&self) -> String {
        self.lines.join("\n")
    }

    /// Get line count
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Get line by index
    pub fn line(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    /// All document lines
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Line length in chars; zero for the virtual line and beyond
    pub fn line_len(&self, index: usize) -> usize {
        self.line(index).map(char_len).unwrap_or(0)
    }

    /// Check if buffer differs from the last load/save
    pub fn is_modified(&self) -> bool {
        self.modified
    }

    /// Clear the modified flag after a successful save
    pub fn mark_saved(&mut self) {
        self.modified = false;
    }

    /// Mutation counter, used to invalidate derived data
    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn touch(&mut self) {
        self.modified = true;
        self.revision = self.revision.wrapping_add(1);
    }

    fn clamp_line(&self, line: usize) -> usize {
        line.min(self.lines.len() - 1)
    }

    /// Insert a character, padding the line with spaces when `column` is past its end.
    pub fn insert_char(&mut self, line: usize, column: usize, ch: char) -> Cursor {
        let row = self.clamp_line(line);
        let text = &mut self.lines[row];
        pad_to(text, column);
        let idx = byte_index(text, column);
        text.insert(idx, ch);
        self.touch();
        Cursor::at(row, column + 1)
    }

    /// Insert text without line breaks at the given position
    pub fn insert_str(&mut self, line: usize, column: usize, s: &str) -> Cursor {
        let row = self.clamp_line(line);
        if s.is_empty() {
            return Cursor::at(row, column);
        }

        let text = &mut self.lines[row];
        pad_to(text, column);
        let idx = byte_index(text, column);
        text.insert_str(idx, s);
        self.touch();
        Cursor::at(row, column + char_len(s))
    }

    /// Split a line in two at `column`. Returns the start of the new line.
    pub fn split_line(&mut self, line: usize, column: usize) -> Cursor {
        let row = self.clamp_line(line);
        let text = &mut self.lines[row];
        let idx = byte_index(text, column);
        let right = text.split_off(idx);
        self.lines.insert(row + 1, right);
        self.touch();
        Cursor::at(row + 1, 0)
    }

    /// Join a line onto the end of the previous one.
    ///
    /// Returns the join point, or `None` for the first line and the virtual line.
    pub fn merge_with_previous(&mut self, line: usize) -> Option<Cursor> {
        if line == 0 || line >= self.lines.len() {
            return None;
        }

        let column = char_len(&self.lines[line - 1]);
        let current = self.lines.remove(line);
        self.lines[line - 1].push_str(&current);
        self.touch();
        Some(Cursor::at(line - 1, column))
    }

    /// Join the following line onto the end of `line`
    pub fn merge_with_next(&mut self, line: usize) -> bool {
        if line + 1 >= self.lines.len() {
            return false;
        }

        let next = self.lines.remove(line + 1);
        self.lines[line].push_str(&next);
        self.touch();
        true
    }

    /// Delete the character at `column`
    pub fn delete_char(&mut self, line: usize, column: usize) -> bool {
        let Some(text) = self.lines.get_mut(line) else {
            return false;
        };
        if column >= char_len(text) {
            return false;
        }

        let idx = byte_index(text, column);
        text.remove(idx);
        self.touch();
        true
    }

    /// Insert several lines at a position (multi-line paste).
    ///
    /// The first pasted line is appended to the text before `column`, the text
    /// after `column` is appended to the last pasted line. Returns the position
    /// right after the pasted text.
    pub fn insert_lines(&mut self, line: usize, column: usize, new_lines: &[String]) -> Cursor {
        let row = self.clamp_line(line);
        match new_lines {
            [] => Cursor::at(row, column),
            [single] => self.insert_str(row, column, single),
            [first, middle @ .., last] => {
                let text = &mut self.lines[row];
                pad_to(text, column);
                let idx = byte_index(text, column);
                let right = text.split_off(idx);
                text.push_str(first);

                let tail = middle
                    .iter()
                    .cloned()
                    .chain(std::iter::once(format!("{}{}", last, right)));
                self.lines.splice(row + 1..row + 1, tail);
                self.touch();

                Cursor::at(row + new_lines.len() - 1, char_len(last))
            }
        }
    }

    /// Turn the virtual line into a real, empty line. Returns its index.
    pub fn append_line(&mut self) -> usize {
        self.lines.push(String::new());
        self.touch();
        self.lines.len() - 1
    }
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::new()
    }
}
