//! Text editing commands in Normal mode.
//!
//! Every function leaves the cursor on a valid position of the edited buffer.

use pow_buffer::{Cursor, TextBuffer};
use pow_clipboard::PasteSource;
use pow_keyboard::Command;

use crate::Session;

/// Line to edit at the cursor, turning the virtual line into a real one first
fn edit_row(session: &mut Session) -> usize {
    if session.cursor.line >= session.buffer.line_count() {
        let row = session.buffer.append_line();
        session.cursor = Cursor::at(row, 0);
    }
    session.cursor.line
}

pub fn insert_char(session: &mut Session, ch: char) {
    let row = edit_row(session);
    session.cursor = session.buffer.insert_char(row, session.cursor.column, ch);
}

/// Insert `tab_size` spaces
pub fn insert_tab(session: &mut Session) {
    let row = edit_row(session);
    let spaces = " ".repeat(session.tab_size);
    session.cursor = session.buffer.insert_str(row, session.cursor.column, &spaces);
}

/// Split the line at the cursor; on the virtual line, append an empty line.
pub fn insert_newline(session: &mut Session) {
    let cursor = session.cursor;
    if cursor.line >= session.buffer.line_count() {
        let row = session.buffer.append_line();
        session.cursor = Cursor::at(row, 0);
    } else {
        session.cursor = session.buffer.split_line(cursor.line, cursor.column);
    }
}

pub fn backspace(session: &mut Session) {
    let cursor = session.cursor;
    if cursor.line >= session.buffer.line_count() {
        // The virtual line is empty; joining it only moves the cursor
        if cursor.line > 0 {
            let line = cursor.line - 1;
            session.cursor = Cursor::at(line, session.buffer.line_len(line));
        }
    } else if cursor.column > 0 {
        if session.buffer.delete_char(cursor.line, cursor.column - 1) {
            session.cursor = Cursor::at(cursor.line, cursor.column - 1);
        }
    } else if let Some(joined) = session.buffer.merge_with_previous(cursor.line) {
        session.cursor = joined;
    }
}

pub fn delete(session: &mut Session) {
    let cursor = session.cursor;
    if cursor.line >= session.buffer.line_count() {
        return;
    }
    if cursor.column < session.buffer.line_len(cursor.line) {
        session.buffer.delete_char(cursor.line, cursor.column);
    } else {
        session.buffer.merge_with_next(cursor.line);
    }
}

/// Paste clipboard text at the cursor. No-op when the clipboard yields nothing.
pub fn paste(session: &mut Session, clipboard: &dyn PasteSource) {
    let Some(text) = clipboard.paste() else {
        pow_logger::debug("Paste skipped: clipboard unavailable or empty");
        return;
    };

    let lines = TextBuffer::split_pasted(&text);
    let row = edit_row(session);
    session.cursor = session.buffer.insert_lines(row, session.cursor.column, &lines);
    pow_logger::debug(format!("Pasted {} line(s)", lines.len()));
}

/// Apply an editing command; returns false for commands that do not edit.
pub fn edit(session: &mut Session, command: &Command, clipboard: &dyn PasteSource) -> bool {
    match command {
        Command::InsertChar(ch) => insert_char(session, *ch),
        Command::InsertTab => insert_tab(session),
        Command::InsertNewline => insert_newline(session),
        Command::Backspace => backspace(session),
        Command::Delete => delete(session),
        Command::Paste => paste(session, clipboard),
        _ => return false,
    }
    true
}
