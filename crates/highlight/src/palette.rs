//! Syntax colors for highlight categories.

use ratatui::style::{Color, Modifier, Style};

/// Syntax color scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Palette {
    /// One Dark inspired
    #[default]
    Dark,
    /// GitHub Light inspired
    Light,
}

impl Palette {
    /// Pick a palette matching a UI theme name.
    pub fn for_theme(theme_name: &str) -> Self {
        if theme_name.contains("light") {
            Palette::Light
        } else {
            Palette::Dark
        }
    }

    /// Style for a highlight category name.
    pub fn style(self, name: &str) -> Style {
        let (fg, modifier) = match self {
            Palette::Dark => dark(name),
            Palette::Light => light(name),
        };
        Style::default().fg(fg).add_modifier(modifier)
    }
}

fn dark(name: &str) -> (Color, Modifier) {
    match name {
        "comment" => (Color::Rgb(105, 112, 125), Modifier::ITALIC),
        "keyword" => (Color::Rgb(199, 146, 234), Modifier::BOLD),
        "function" | "function.builtin" | "function.method" => {
            (Color::Rgb(130, 170, 255), Modifier::empty())
        }
        "string" | "string.special" => (Color::Rgb(152, 195, 121), Modifier::empty()),
        "number" => (Color::Rgb(209, 154, 102), Modifier::empty()),
        "constant" | "constant.builtin" => (Color::Rgb(229, 192, 123), Modifier::empty()),
        "type" | "type.builtin" => (Color::Rgb(86, 182, 194), Modifier::empty()),
        "variable" | "variable.parameter" => (Color::Rgb(224, 108, 117), Modifier::empty()),
        "variable.builtin" => (Color::Rgb(224, 108, 117), Modifier::ITALIC),
        "property" => (Color::Rgb(152, 195, 121), Modifier::empty()),
        "operator" | "punctuation.special" | "embedded" => {
            (Color::Rgb(198, 120, 221), Modifier::empty())
        }
        "constructor" => (Color::Rgb(229, 192, 123), Modifier::BOLD),
        "tag" => (Color::Rgb(224, 108, 117), Modifier::empty()),
        "attribute" => (Color::Rgb(209, 154, 102), Modifier::empty()),
        "label" => (Color::Rgb(229, 192, 123), Modifier::empty()),
        "escape" => (Color::Rgb(86, 182, 194), Modifier::empty()),
        _ => (Color::Rgb(171, 178, 191), Modifier::empty()),
    }
}

fn light(name: &str) -> (Color, Modifier) {
    match name {
        "comment" => (Color::Rgb(106, 115, 125), Modifier::ITALIC),
        "keyword" => (Color::Rgb(215, 58, 73), Modifier::BOLD),
        "function" | "function.builtin" | "function.method" | "attribute" | "label" => {
            (Color::Rgb(111, 66, 193), Modifier::empty())
        }
        "string" | "string.special" => (Color::Rgb(3, 102, 214), Modifier::empty()),
        "number" | "constant" | "constant.builtin" | "variable" | "variable.parameter"
        | "property" | "escape" => (Color::Rgb(0, 92, 197), Modifier::empty()),
        "variable.builtin" => (Color::Rgb(0, 92, 197), Modifier::ITALIC),
        "type" | "type.builtin" | "operator" | "punctuation.special" | "embedded" => {
            (Color::Rgb(215, 58, 73), Modifier::empty())
        }
        "constructor" => (Color::Rgb(111, 66, 193), Modifier::BOLD),
        "tag" => (Color::Rgb(34, 134, 58), Modifier::empty()),
        _ => (Color::Rgb(36, 41, 46), Modifier::empty()),
    }
}
