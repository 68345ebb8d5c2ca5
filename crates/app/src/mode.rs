//! Interaction modes; exactly one owns the keyboard at a time.

use std::path::Path;

use pow_modal::{ExitConfirmModal, InputModal, MessageModal};

const SAVE_TITLE: &str = "Save File";
const SAVE_PROMPT: &str = "Enter filename: ";

/// Current interaction mode of a session
#[derive(Debug, Default)]
pub enum Mode {
    /// Editing and navigation
    #[default]
    Normal,
    /// Incremental search bar at the top of the screen
    Search,
    /// File name prompt; terminates after a successful save when `exit_after_save`
    SaveAs {
        modal: Box<InputModal>,
        exit_after_save: bool,
    },
    /// Unsaved changes on exit
    ConfirmExit(Box<ExitConfirmModal>),
    /// Error report, dismissed by any key
    Message(Box<MessageModal>),
}

impl Mode {
    /// Save-as prompt, prefilled with `current` when the session has a path
    pub fn save_as(current: Option<&Path>, exit_after_save: bool) -> Self {
        let default = current
            .map(|p| p.display().to_string())
            .unwrap_or_default();
        Self::SaveAs {
            modal: Box::new(InputModal::with_default(SAVE_TITLE, SAVE_PROMPT, default)),
            exit_after_save,
        }
    }

    pub fn confirm_exit() -> Self {
        Self::ConfirmExit(Box::new(ExitConfirmModal::new()))
    }

    pub fn is_normal(&self) -> bool {
        matches!(self, Self::Normal)
    }

    /// Short name used in log messages
    pub fn name(&self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Search => "search",
            Self::SaveAs { .. } => "save-as",
            Self::ConfirmExit(_) => "confirm-exit",
            Self::Message(_) => "message",
        }
    }
}
