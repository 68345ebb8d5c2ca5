//! Cursor navigation commands.

use pow_buffer::{move_cursor, Motion};
use pow_keyboard::Command;

use crate::Session;

/// Motion for a navigation command; `rows` is the accelerated vertical step.
pub fn motion_for(command: &Command, rows: usize) -> Option<Motion> {
    let motion = match command {
        Command::MoveCursorUp => Motion::Up(rows),
        Command::MoveCursorDown => Motion::Down(rows),
        Command::MoveCursorLeft => Motion::Left,
        Command::MoveCursorRight => Motion::Right,
        Command::PageUp => Motion::PageUp,
        Command::PageDown => Motion::PageDown,
        Command::MoveToLineStart => Motion::LineStart,
        Command::MoveToLineEnd => Motion::LineEnd,
        _ => return None,
    };
    Some(motion)
}

/// Move the cursor; returns false when `command` is not a navigation command.
pub fn navigate(session: &mut Session, command: &Command, rows: usize) -> bool {
    let Some(motion) = motion_for(command, rows) else {
        return false;
    };
    session.cursor = move_cursor(
        session.cursor,
        motion,
        &session.buffer,
        session.viewport.height,
    );
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use pow_buffer::{Cursor, TextBuffer};

    fn session(lines: &[&str]) -> Session {
        let buffer = TextBuffer::from_lines(lines.iter().map(|l| l.to_string()).collect());
        Session::new(buffer, None, 5)
    }

    #[test]
    fn test_accelerated_rows() {
        let lines: Vec<String> = (0..30).map(|i| i.to_string()).collect();
        let refs: Vec<&str> = lines.iter().map(String::as_str).collect();
        let mut s = session(&refs);

        assert!(navigate(&mut s, &Command::MoveCursorDown, 10));
        assert_eq!(s.cursor.line, 10);
        navigate(&mut s, &Command::MoveCursorUp, 3);
        assert_eq!(s.cursor.line, 7);
    }

    #[test]
    fn test_page_uses_viewport_height() {
        let lines: Vec<String> = (0..12).map(|i| format!("line {i}")).collect();
        let refs: Vec<&str> = lines.iter().map(String::as_str).collect();
        let mut s = session(&refs);

        navigate(&mut s, &Command::PageDown, 1);
        assert_eq!(s.cursor.line, 5);
        navigate(&mut s, &Command::PageDown, 1);
        navigate(&mut s, &Command::PageDown, 1);
        assert_eq!(s.cursor.line, 11);
        navigate(&mut s, &Command::PageUp, 1);
        assert_eq!(s.cursor.line, 6);
    }

    #[test]
    fn test_home_end() {
        let mut s = session(&["hello"]);
        navigate(&mut s, &Command::MoveToLineEnd, 1);
        assert_eq!(s.cursor, Cursor::at(0, 5));
        navigate(&mut s, &Command::MoveToLineStart, 1);
        assert_eq!(s.cursor, Cursor::at(0, 0));
    }

    #[test]
    fn test_non_navigation_command() {
        let mut s = session(&["x"]);
        assert!(!navigate(&mut s, &Command::Save, 1));
        assert!(motion_for(&Command::InsertChar('a'), 1).is_none());
    }
}
