//! XDG Base Directory support for pow.

use anyhow::{Context, Result};
use std::path::PathBuf;

const APP_NAME: &str = "pow";

/// Get the configuration directory following XDG conventions.
///
/// Returns `$XDG_CONFIG_HOME/pow` or `~/.config/pow`.
pub fn get_config_dir() -> Result<PathBuf> {
    dirs::config_dir()
        .map(|p| p.join(APP_NAME))
        .context("Failed to determine config directory")
}

/// Get the cache directory following XDG conventions.
///
/// Returns `$XDG_CACHE_HOME/pow` or `~/.cache/pow`. The log file lives here.
pub fn get_cache_dir() -> Result<PathBuf> {
    dirs::cache_dir()
        .map(|p| p.join(APP_NAME))
        .context("Failed to determine cache directory")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_config_dir() {
        if let Ok(dir) = get_config_dir() {
            assert!(dir.ends_with("pow"));
        }
    }

    #[test]
    fn test_directories_are_different() {
        if let (Ok(config), Ok(cache)) = (get_config_dir(), get_cache_dir()) {
            assert_ne!(config, cache);
        }
    }
}
