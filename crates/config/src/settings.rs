//! Configuration structures for pow settings.

use serde::{Deserialize, Serialize};

use crate::defaults;

/// Application configuration with nested sections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// General application settings
    #[serde(default)]
    pub general: GeneralSettings,

    /// Editor settings
    #[serde(default)]
    pub editor: EditorSettings,

    /// Clipboard settings
    #[serde(default)]
    pub clipboard: ClipboardSettings,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// General application settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneralSettings {
    /// Selected theme name
    #[serde(default = "default_theme_name")]
    pub theme: String,
}

/// Editor settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorSettings {
    /// Spaces inserted by Tab
    #[serde(default = "default_tab_size")]
    pub tab_size: usize,

    /// Held arrow presses between forced redraws
    #[serde(default = "default_redraw_interval")]
    pub redraw_interval: usize,
}

/// Clipboard settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClipboardSettings {
    /// Upper bound for a clipboard read in ms
    #[serde(default = "default_clipboard_timeout_ms")]
    pub timeout_ms: u64,
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Log file path (optional)
    #[serde(default)]
    pub file_path: Option<String>,

    /// Minimum log level (debug, info, warn, error)
    #[serde(default = "default_min_level")]
    pub min_level: String,
}

// Default value functions for serde
fn default_theme_name() -> String {
    defaults::THEME_NAME.to_string()
}

fn default_tab_size() -> usize {
    defaults::TAB_SIZE
}

fn default_redraw_interval() -> usize {
    defaults::REDRAW_INTERVAL
}

fn default_clipboard_timeout_ms() -> u64 {
    defaults::CLIPBOARD_TIMEOUT_MS
}

fn default_min_level() -> String {
    defaults::MIN_LOG_LEVEL.to_string()
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            theme: default_theme_name(),
        }
    }
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            tab_size: default_tab_size(),
            redraw_interval: default_redraw_interval(),
        }
    }
}

impl Default for ClipboardSettings {
    fn default() -> Self {
        Self {
            timeout_ms: default_clipboard_timeout_ms(),
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            file_path: None,
            min_level: default_min_level(),
        }
    }
}
