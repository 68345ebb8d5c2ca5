//! Command routing: each command goes to the handler of the active mode.

use std::path::PathBuf;

use pow_buffer::Persistence;
use pow_clipboard::PasteSource;
use pow_keyboard::Command;
use pow_modal::{ExitChoice, Modal, ModalResult, MessageModal};

use crate::{editing, navigation, Mode, Session};

/// External collaborators used while handling commands
#[derive(Clone, Copy)]
pub struct Services<'a> {
    pub persistence: &'a dyn Persistence,
    pub clipboard: &'a dyn PasteSource,
}

/// Handle one command in the session's current mode.
///
/// `row_delta` is the accelerated step for vertical arrows. The viewport is
/// scrolled to the cursor afterwards.
pub fn dispatch(session: &mut Session, command: Command, row_delta: usize, services: &Services<'_>) {
    let mode = std::mem::take(&mut session.mode);
    let from = mode.name();

    let next = match mode {
        Mode::Normal => handle_normal(session, &command, row_delta, services),
        Mode::Search => handle_search(session, &command),
        Mode::SaveAs {
            mut modal,
            exit_after_save,
        } => match modal.handle_command(&command) {
            None => Mode::SaveAs {
                modal,
                exit_after_save,
            },
            Some(ModalResult::Cancelled) => Mode::Normal,
            Some(ModalResult::Confirmed(name)) => {
                save_as(session, PathBuf::from(name), exit_after_save, services)
            }
        },
        Mode::ConfirmExit(mut modal) => match modal.handle_command(&command) {
            None => Mode::ConfirmExit(modal),
            Some(ModalResult::Cancelled) => Mode::Normal,
            Some(ModalResult::Confirmed(ExitChoice::DontSave)) => {
                pow_logger::info("Exit without saving");
                quit(session)
            }
            Some(ModalResult::Confirmed(ExitChoice::Save)) => save(session, true, services),
        },
        Mode::Message(mut modal) => match modal.handle_command(&command) {
            None => Mode::Message(modal),
            Some(_) => Mode::Normal,
        },
    };

    if next.name() != from {
        pow_logger::debug(format!("Mode {} -> {}", from, next.name()));
    }
    session.mode = next;
    session.viewport.ensure_visible(&session.cursor);
    if matches!(session.mode, Mode::Search) {
        session.viewport.clear_first_row(&session.cursor);
    }
}

fn handle_normal(
    session: &mut Session,
    command: &Command,
    row_delta: usize,
    services: &Services<'_>,
) -> Mode {
    if navigation::navigate(session, command, row_delta) {
        return Mode::Normal;
    }
    if editing::edit(session, command, services.clipboard) {
        // Matches stay highlighted after the search bar closes
        if session.search.is_active() {
            session.search.recompute(&session.buffer);
        }
        return Mode::Normal;
    }

    match command {
        Command::Save => save(session, false, services),
        Command::Exit => {
            if session.is_modified() {
                Mode::confirm_exit()
            } else {
                quit(session)
            }
        }
        Command::ForceQuit => quit(session),
        Command::StartSearch => {
            session.search.clear();
            Mode::Search
        }
        _ => Mode::Normal,
    }
}

/// Search bar input. Other keys are swallowed.
fn handle_search(session: &mut Session, command: &Command) -> Mode {
    let found = match command {
        Command::Cancel => return Mode::Normal,
        Command::InsertNewline => session.search.next_match(),
        Command::InsertChar(ch) => session.search.push_char(*ch, &session.buffer),
        Command::Backspace => session.search.pop_char(&session.buffer),
        _ => None,
    };

    if let Some(m) = found {
        session.cursor = m.cursor();
    }
    Mode::Search
}

fn quit(session: &mut Session) -> Mode {
    session.should_quit = true;
    Mode::Normal
}

/// Save under the current path, prompting for one when the session is untitled.
fn save(session: &mut Session, exit_after_save: bool, services: &Services<'_>) -> Mode {
    let Some(path) = session.file_path.clone() else {
        return Mode::save_as(None, exit_after_save);
    };

    match session.write_to(services.persistence, &path) {
        Ok(()) if exit_after_save => quit(session),
        Ok(()) => Mode::Normal,
        Err(err) => save_failed(err),
    }
}

/// Save under a new name; the path is adopted only when the write succeeds.
fn save_as(
    session: &mut Session,
    path: PathBuf,
    exit_after_save: bool,
    services: &Services<'_>,
) -> Mode {
    match session.write_to(services.persistence, &path) {
        Ok(()) => {
            session.file_path = Some(path);
            if exit_after_save {
                quit(session)
            } else {
                Mode::Normal
            }
        }
        Err(err) => save_failed(err),
    }
}

fn save_failed(err: anyhow::Error) -> Mode {
    pow_logger::error(format!("Save failed: {:#}", err));
    Mode::Message(Box::new(MessageModal::new(format!(
        "Error saving file: {:#}",
        err
    ))))
}
