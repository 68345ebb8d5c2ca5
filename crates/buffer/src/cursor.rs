use crate::TextBuffer;

/// Cursor position in document
///
/// `line == line_count` is the virtual line one past the end of the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Cursor {
    /// Line number (0-based)
    pub line: usize,
    /// Position in line in chars (0-based)
    pub column: usize,
}

impl Cursor {
    /// Create a new cursor at position (0, 0)
    pub fn new() -> Self {
        Self { line: 0, column: 0 }
    }

    /// Create cursor at specified position
    pub fn at(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// Arrow key taking part in repeat acceleration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    Up,
    Down,
    Left,
    Right,
}

/// Cursor motion requested by a navigation command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Motion {
    Left,
    Right,
    Up(usize),
    Down(usize),
    PageUp,
    PageDown,
    LineStart,
    LineEnd,
}

/// Rows moved by one press of `key` after `counter` identical presses.
pub fn row_delta(key: NavKey, counter: usize) -> usize {
    match key {
        NavKey::Up | NavKey::Down => match counter {
            0..=5 => 1,
            6..=10 => 3,
            11..=15 => 5,
            _ => 10,
        },
        NavKey::Left | NavKey::Right => 1,
    }
}

/// Place the cursor on `line`, clamping the column to the line length.
/// The virtual line only admits column 0.
fn settle(line: usize, column: usize, buffer: &TextBuffer) -> Cursor {
    if line >= buffer.line_count() {
        Cursor::at(buffer.line_count(), 0)
    } else {
        Cursor::at(line, column.min(buffer.line_len(line)))
    }
}

/// Bring an arbitrary position back inside the document
pub fn clamp_cursor(cursor: Cursor, buffer: &TextBuffer) -> Cursor {
    settle(cursor.line, cursor.column, buffer)
}

/// Apply a motion to the cursor, keeping it inside the document.
pub fn move_cursor(cursor: Cursor, motion: Motion, buffer: &TextBuffer, page_height: usize) -> Cursor {
    let cursor = clamp_cursor(cursor, buffer);
    let line_count = buffer.line_count();
    let last_line = line_count - 1;
    let page = page_height.max(1);

    match motion {
        Motion::Left => {
            if cursor.column > 0 {
                Cursor::at(cursor.line, cursor.column - 1)
            } else if cursor.line > 0 {
                let line = cursor.line - 1;
                Cursor::at(line, buffer.line_len(line))
            } else {
                cursor
            }
        }
        Motion::Right => {
            if cursor.column < buffer.line_len(cursor.line) {
                Cursor::at(cursor.line, cursor.column + 1)
            } else if cursor.line < line_count {
                Cursor::at(cursor.line + 1, 0)
            } else {
                cursor
            }
        }
        Motion::Up(rows) => settle(cursor.line.saturating_sub(rows), cursor.column, buffer),
        Motion::Down(rows) => settle(
            cursor.line.saturating_add(rows).min(line_count),
            cursor.column,
            buffer,
        ),
        Motion::PageUp => settle(
            cursor.line.saturating_sub(page).min(last_line),
            cursor.column,
            buffer,
        ),
        Motion::PageDown => settle(
            cursor.line.saturating_add(page).min(last_line),
            cursor.column,
            buffer,
        ),
        Motion::LineStart => Cursor::at(cursor.line, 0),
        Motion::LineEnd => Cursor::at(cursor.line, buffer.line_len(cursor.line)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer(lines: &[&str]) -> TextBuffer {
        TextBuffer::from_lines(lines.iter().map(|l| l.to_string()).collect())
    }

    #[test]
    fn test_cursor_ordering() {
        assert!(Cursor::at(0, 5) < Cursor::at(1, 0));
        assert!(Cursor::at(2, 1) < Cursor::at(2, 3));
        assert_eq!(Cursor::new(), Cursor::default());
    }

    #[test]
    fn test_left_wraps_to_previous_line_end() {
        let buf = buffer(&["abc", "de"]);
        assert_eq!(move_cursor(Cursor::at(1, 0), Motion::Left, &buf, 10), Cursor::at(0, 3));
        assert_eq!(move_cursor(Cursor::at(0, 0), Motion::Left, &buf, 10), Cursor::at(0, 0));
    }

    #[test]
    fn test_right_reaches_virtual_line() {
        let buf = buffer(&["abc", "de"]);
        assert_eq!(move_cursor(Cursor::at(0, 3), Motion::Right, &buf, 10), Cursor::at(1, 0));
        assert_eq!(move_cursor(Cursor::at(1, 2), Motion::Right, &buf, 10), Cursor::at(2, 0));
        // Nothing past the virtual line
        assert_eq!(move_cursor(Cursor::at(2, 0), Motion::Right, &buf, 10), Cursor::at(2, 0));
    }

    #[test]
    fn test_vertical_moves_clamp_column() {
        let buf = buffer(&["long line", "ab", "longer line"]);
        assert_eq!(move_cursor(Cursor::at(0, 7), Motion::Down(1), &buf, 10), Cursor::at(1, 2));
        assert_eq!(move_cursor(Cursor::at(2, 9), Motion::Up(2), &buf, 10), Cursor::at(0, 9));
        assert_eq!(move_cursor(Cursor::at(2, 4), Motion::Up(50), &buf, 10), Cursor::at(0, 4));
    }

    #[test]
    fn test_down_to_virtual_line_forces_column_zero() {
        let buf = buffer(&["abc", "def"]);
        assert_eq!(move_cursor(Cursor::at(1, 2), Motion::Down(1), &buf, 10), Cursor::at(2, 0));
        assert_eq!(move_cursor(Cursor::at(0, 2), Motion::Down(10), &buf, 10), Cursor::at(2, 0));
    }

    #[test]
    fn test_paging_never_lands_on_virtual_line() {
        let lines: Vec<String> = (0..30).map(|i| format!("line {}", i)).collect();
        let buf = TextBuffer::from_lines(lines);

        let down = move_cursor(Cursor::at(25, 3), Motion::PageDown, &buf, 10);
        assert_eq!(down, Cursor::at(29, 3));

        let up = move_cursor(Cursor::at(30, 0), Motion::PageUp, &buf, 10);
        assert_eq!(up, Cursor::at(20, 0));

        let top = move_cursor(Cursor::at(4, 6), Motion::PageUp, &buf, 10);
        assert_eq!(top, Cursor::at(0, 6));
    }

    #[test]
    fn test_line_start_and_end() {
        let buf = buffer(&["héllo"]);
        assert_eq!(move_cursor(Cursor::at(0, 2), Motion::LineEnd, &buf, 10), Cursor::at(0, 5));
        assert_eq!(move_cursor(Cursor::at(0, 2), Motion::LineStart, &buf, 10), Cursor::at(0, 0));
    }

    #[test]
    fn test_clamp_cursor_out_of_range() {
        let buf = buffer(&["abc"]);
        assert_eq!(clamp_cursor(Cursor::at(0, 10), &buf), Cursor::at(0, 3));
        assert_eq!(clamp_cursor(Cursor::at(7, 4), &buf), Cursor::at(1, 0));
    }

    #[test]
    fn test_row_delta_acceleration_steps() {
        assert_eq!(row_delta(NavKey::Down, 0), 1);
        assert_eq!(row_delta(NavKey::Down, 5), 1);
        assert_eq!(row_delta(NavKey::Down, 6), 3);
        assert_eq!(row_delta(NavKey::Up, 10), 3);
        assert_eq!(row_delta(NavKey::Up, 11), 5);
        assert_eq!(row_delta(NavKey::Up, 15), 5);
        assert_eq!(row_delta(NavKey::Down, 16), 10);
        assert_eq!(row_delta(NavKey::Down, 1000), 10);
    }

    #[test]
    fn test_row_delta_horizontal_keys_never_accelerate() {
        for counter in [0, 6, 12, 40] {
            assert_eq!(row_delta(NavKey::Left, counter), 1);
            assert_eq!(row_delta(NavKey::Right, counter), 1);
        }
    }
}
