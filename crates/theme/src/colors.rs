//! Theme color definitions.

use ratatui::style::Color;

/// Single-glyph icons shown in the status bar and search bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Icons {
    pub save: char,
    pub exit: char,
    pub find: char,
    pub file: char,
    pub modified: char,
    pub position: char,
    pub percentage: char,
}

/// Editor theme.
///
/// Colors only affect the chrome around the document (cursor, status line,
/// dialogs, search matches); syntax colors come from the highlighter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    /// Theme name for display
    pub name: &'static str,

    // === Document ===
    /// Editor background
    pub bg: Color,
    /// Default text
    pub fg: Color,
    /// Cursor cell background
    pub cursor: Color,

    // === Status line ===
    pub status_bg: Color,
    pub status_fg: Color,
    /// Icons in the status line
    pub status_icon: Color,

    // === Dialogs ===
    pub dialog_bg: Color,
    pub dialog_fg: Color,
    pub dialog_border: Color,
    /// Unselected button
    pub button_bg: Color,
    pub button_fg: Color,
    /// Selected button
    pub selected_bg: Color,
    pub selected_fg: Color,

    // === Search ===
    pub match_bg: Color,
    pub match_fg: Color,
    /// Current search match
    pub active_match_bg: Color,
    pub active_match_fg: Color,

    /// Error messages
    pub error: Color,

    pub icons: Icons,
}

impl Theme {
    /// Hardcoded fallback used when no theme file can be parsed.
    pub const fn fallback() -> Self {
        Self {
            name: "fallback",
            bg: Color::Rgb(40, 44, 52),
            fg: Color::Rgb(220, 223, 228),
            cursor: Color::Rgb(255, 165, 0),
            status_bg: Color::Rgb(45, 50, 60),
            status_fg: Color::Rgb(200, 204, 212),
            status_icon: Color::Rgb(147, 197, 253),
            dialog_bg: Color::Rgb(40, 45, 55),
            dialog_fg: Color::Rgb(230, 230, 230),
            dialog_border: Color::Rgb(80, 90, 110),
            button_bg: Color::Rgb(70, 100, 170),
            button_fg: Color::Rgb(240, 240, 240),
            selected_bg: Color::Rgb(100, 140, 210),
            selected_fg: Color::Rgb(255, 255, 255),
            match_bg: Color::Rgb(70, 100, 170),
            match_fg: Color::Rgb(240, 240, 240),
            active_match_bg: Color::Rgb(100, 140, 210),
            active_match_fg: Color::Rgb(40, 45, 55),
            error: Color::Rgb(224, 108, 117),
            icons: Icons {
                save: '↓',
                exit: '✕',
                find: '⌕',
                file: '≡',
                modified: '●',
                position: '⌖',
                percentage: '%',
            },
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::get_by_name("default")
    }
}
