//! Theme loading from TOML files.
//!
//! Every key is optional: missing or invalid entries keep the value of the
//! base theme the file is layered on.

use anyhow::{Context, Result};
use ratatui::style::Color;
use serde::Deserialize;
use std::path::Path;

use crate::{Icons, Theme};

/// Color representation in TOML.
///
/// Accepts `{ rgb = [r, g, b] }`, a color name, `"#rrggbb"` or `"r,g,b"`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum TomlColor {
    Rgb { rgb: [u8; 3] },
    Named(String),
}

impl TomlColor {
    fn to_color(&self) -> Option<Color> {
        match self {
            TomlColor::Rgb { rgb } => Some(Color::Rgb(rgb[0], rgb[1], rgb[2])),
            TomlColor::Named(value) => parse_color(value),
        }
    }
}

fn parse_color(value: &str) -> Option<Color> {
    let value = value.trim();

    if let Some(hex) = value.strip_prefix('#') {
        if hex.len() != 6 {
            return None;
        }
        let channel = |i: usize| -> Option<u8> { u8::from_str_radix(hex.get(i..i + 2)?, 16).ok() };
        return Some(Color::Rgb(channel(0)?, channel(2)?, channel(4)?));
    }

    if value.contains(',') {
        let parts = value
            .split(',')
            .map(|part| part.trim().parse::<u8>().ok())
            .collect::<Option<Vec<u8>>>()?;
        return match parts.as_slice() {
            [r, g, b] => Some(Color::Rgb(*r, *g, *b)),
            _ => None,
        };
    }

    named_color(value)
}

fn named_color(name: &str) -> Option<Color> {
    let color = match name.to_ascii_lowercase().as_str() {
        "black" => Color::Black,
        "red" => Color::Red,
        "green" => Color::Green,
        "yellow" => Color::Yellow,
        "blue" => Color::Blue,
        "magenta" => Color::Magenta,
        "cyan" => Color::Cyan,
        "gray" | "grey" => Color::Gray,
        "darkgray" | "darkgrey" => Color::DarkGray,
        "lightred" => Color::LightRed,
        "lightgreen" => Color::LightGreen,
        "lightyellow" => Color::LightYellow,
        "lightblue" => Color::LightBlue,
        "lightmagenta" => Color::LightMagenta,
        "lightcyan" => Color::LightCyan,
        "white" => Color::White,
        "orange" => Color::Rgb(255, 165, 0),
        "reset" | "default" => Color::Reset,
        _ => return None,
    };
    Some(color)
}

/// TOML theme colors structure.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct TomlColors {
    bg: Option<TomlColor>,
    fg: Option<TomlColor>,
    cursor: Option<TomlColor>,
    status_bg: Option<TomlColor>,
    status_fg: Option<TomlColor>,
    status_icon: Option<TomlColor>,
    dialog_bg: Option<TomlColor>,
    dialog_fg: Option<TomlColor>,
    dialog_border: Option<TomlColor>,
    button_bg: Option<TomlColor>,
    button_fg: Option<TomlColor>,
    selected_bg: Option<TomlColor>,
    selected_fg: Option<TomlColor>,
    match_bg: Option<TomlColor>,
    match_fg: Option<TomlColor>,
    active_match_bg: Option<TomlColor>,
    active_match_fg: Option<TomlColor>,
    error: Option<TomlColor>,
}

/// TOML icon overrides, one glyph each.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct TomlIcons {
    save: Option<String>,
    exit: Option<String>,
    find: Option<String>,
    file: Option<String>,
    modified: Option<String>,
    position: Option<String>,
    percentage: Option<String>,
}

/// TOML theme structure.
#[derive(Debug, Clone, Deserialize)]
struct TomlTheme {
    name: Option<String>,
    #[serde(default)]
    colors: TomlColors,
    #[serde(default)]
    icons: TomlIcons,
}

fn color(field: &str, value: &Option<TomlColor>, default: Color) -> Color {
    let Some(value) = value else {
        return default;
    };
    value.to_color().unwrap_or_else(|| {
        pow_logger::warn(format!("Invalid theme color for '{}': {:?}", field, value));
        default
    })
}

fn icon(value: &Option<String>, default: char) -> char {
    value
        .as_deref()
        .and_then(|s| s.chars().next())
        .unwrap_or(default)
}

fn build_theme(toml_theme: &TomlTheme, name: &'static str, base: &Theme) -> Theme {
    let c = &toml_theme.colors;
    let i = &toml_theme.icons;

    Theme {
        name,
        bg: color("bg", &c.bg, base.bg),
        fg: color("fg", &c.fg, base.fg),
        cursor: color("cursor", &c.cursor, base.cursor),
        status_bg: color("status_bg", &c.status_bg, base.status_bg),
        status_fg: color("status_fg", &c.status_fg, base.status_fg),
        status_icon: color("status_icon", &c.status_icon, base.status_icon),
        dialog_bg: color("dialog_bg", &c.dialog_bg, base.dialog_bg),
        dialog_fg: color("dialog_fg", &c.dialog_fg, base.dialog_fg),
        dialog_border: color("dialog_border", &c.dialog_border, base.dialog_border),
        button_bg: color("button_bg", &c.button_bg, base.button_bg),
        button_fg: color("button_fg", &c.button_fg, base.button_fg),
        selected_bg: color("selected_bg", &c.selected_bg, base.selected_bg),
        selected_fg: color("selected_fg", &c.selected_fg, base.selected_fg),
        match_bg: color("match_bg", &c.match_bg, base.match_bg),
        match_fg: color("match_fg", &c.match_fg, base.match_fg),
        active_match_bg: color("active_match_bg", &c.active_match_bg, base.active_match_bg),
        active_match_fg: color("active_match_fg", &c.active_match_fg, base.active_match_fg),
        error: color("error", &c.error, base.error),
        icons: Icons {
            save: icon(&i.save, base.icons.save),
            exit: icon(&i.exit, base.icons.exit),
            find: icon(&i.find, base.icons.find),
            file: icon(&i.file, base.icons.file),
            modified: icon(&i.modified, base.icons.modified),
            position: icon(&i.position, base.icons.position),
            percentage: icon(&i.percentage, base.icons.percentage),
        },
    }
}

/// Load theme from TOML file, layered on `base`.
///
/// Returns the parsed theme with a leaked static name string.
pub fn load_theme(path: &Path, base: &Theme) -> Result<Theme> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read theme: {}", path.display()))?;
    let toml_theme: TomlTheme = toml::from_str(&content)
        .with_context(|| format!("Failed to parse theme: {}", path.display()))?;

    let name = toml_theme.name.clone().unwrap_or_else(|| {
        path.file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default()
    });
    // Leak the name string to get 'static lifetime
    let name: &'static str = Box::leak(name.into_boxed_str());

    Ok(build_theme(&toml_theme, name, base))
}

/// Load theme from TOML string with a static name.
pub fn load_theme_from_str(content: &str, name: &'static str, base: &Theme) -> Result<Theme> {
    let toml_theme: TomlTheme = toml::from_str(content)?;
    Ok(build_theme(&toml_theme, name, base))
}
