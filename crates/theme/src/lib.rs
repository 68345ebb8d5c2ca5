//! Theme system for pow.
//!
//! Built-in themes are embedded TOML files; user themes are looked up in the
//! themes directory first and layered on the default theme.

mod colors;
mod loader;

pub use colors::{Icons, Theme};
pub use loader::{load_theme, load_theme_from_str};

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};

// Embed theme files at compile time
const THEME_DEFAULT_TOML: &str = include_str!("../themes/default.toml");
const THEME_LIGHT_TOML: &str = include_str!("../themes/light.toml");

static THEME_DEFAULT: OnceLock<Theme> = OnceLock::new();
static THEME_LIGHT: OnceLock<Theme> = OnceLock::new();

// Cache for user-loaded themes
static USER_THEMES: OnceLock<Mutex<HashMap<String, Theme>>> = OnceLock::new();

// Themes directory path (set by app on startup)
static THEMES_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Set the themes directory path (call this at app startup).
pub fn set_themes_dir(path: PathBuf) {
    let _ = THEMES_DIR.set(path);
}

fn get_themes_dir() -> Option<&'static PathBuf> {
    THEMES_DIR.get()
}

/// Load theme from embedded TOML content.
fn load_builtin(content: &str, name: &'static str, base: &Theme) -> Theme {
    match loader::load_theme_from_str(content, name, base) {
        Ok(theme) => theme,
        Err(e) => {
            pow_logger::error(format!(
                "Failed to parse built-in theme '{}': {}. Using fallback theme.",
                name, e
            ));
            Theme { name, ..*base }
        }
    }
}

fn get_default_theme() -> Theme {
    *THEME_DEFAULT.get_or_init(|| load_builtin(THEME_DEFAULT_TOML, "default", &Theme::fallback()))
}

fn get_light_theme() -> Theme {
    *THEME_LIGHT.get_or_init(|| load_builtin(THEME_LIGHT_TOML, "light", &get_default_theme()))
}

/// Try to load user theme from the themes directory.
fn try_load_user_theme(name: &str) -> Option<Theme> {
    let cache = USER_THEMES.get_or_init(|| Mutex::new(HashMap::new()));

    // A poisoned mutex only disables caching
    if let Ok(cache_lock) = cache.lock() {
        if let Some(theme) = cache_lock.get(name) {
            return Some(*theme);
        }
    }

    let theme_path = get_themes_dir()?.join(format!("{}.toml", name));
    if !theme_path.exists() {
        return None;
    }

    let theme = match load_theme(&theme_path, &get_default_theme()) {
        Ok(theme) => theme,
        Err(e) => {
            pow_logger::warn(format!("Ignoring user theme '{}': {:#}", name, e));
            return None;
        }
    };

    if let Ok(mut cache_lock) = cache.lock() {
        cache_lock.insert(name.to_string(), theme);
    }

    Some(theme)
}

impl Theme {
    /// Get theme by name.
    ///
    /// User themes shadow built-in ones; unknown names resolve to `default`.
    pub fn get_by_name(name: &str) -> Theme {
        if let Some(theme) = try_load_user_theme(name) {
            return theme;
        }

        match name {
            "default" => get_default_theme(),
            "light" => get_light_theme(),
            _ => {
                pow_logger::warn(format!("Unknown theme '{}', using default", name));
                get_default_theme()
            }
        }
    }

    /// Names of the built-in themes.
    pub fn builtin_names() -> &'static [&'static str] {
        &["default", "light"]
    }
}
