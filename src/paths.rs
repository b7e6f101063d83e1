//! Centralized path resolution for deckhand
//!
//! # Environment Variables
//!
//! - `DECKHAND_CONFIG_DIR` - Override config directory (e.g., `~/dotfiles/deckhand`)
//!
//! # Path Resolution Priority
//!
//! For config_dir():
//! 1. `DECKHAND_CONFIG_DIR` environment variable
//! 2. `XDG_CONFIG_HOME/deckhand` (if set)
//! 3. Platform default:
//!    - Windows: `%APPDATA%\deckhand`
//!    - macOS/Linux: `~/.config/deckhand`

use anyhow::{Context, Result};
use std::path::PathBuf;

/// Environment variable for config directory override
pub const ENV_CONFIG_DIR: &str = "DECKHAND_CONFIG_DIR";

/// Settings file name inside the config directory
pub const SETTINGS_FILE: &str = "config.toml";

/// Stored access token file name inside the config directory
pub const TOKEN_FILE: &str = "token.json";

/// Get the deckhand config directory path
pub fn config_dir() -> Result<PathBuf> {
    // 1. Check environment variable override
    if let Ok(dir) = std::env::var(ENV_CONFIG_DIR) {
        let path = expand(&dir);
        log::debug!(
            "Using config dir from {}: {}",
            ENV_CONFIG_DIR,
            path.display()
        );
        return Ok(path);
    }

    // 2. Check XDG_CONFIG_HOME
    if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
        let path = PathBuf::from(xdg_config).join("deckhand");
        log::debug!("Using XDG_CONFIG_HOME: {}", path.display());
        return Ok(path);
    }

    // 3. Platform default
    #[cfg(windows)]
    {
        if let Some(app_data) = dirs::config_dir() {
            let path = app_data.join("deckhand");
            log::debug!("Using Windows config dir: {}", path.display());
            return Ok(path);
        }
    }

    let home = dirs::home_dir().context("Could not determine home directory")?;
    let path = home.join(".config").join("deckhand");
    log::debug!("Using default config dir: {}", path.display());
    Ok(path)
}

/// Path of the settings file
pub fn settings_file() -> Result<PathBuf> {
    Ok(config_dir()?.join(SETTINGS_FILE))
}

/// Path of the stored access token
pub fn token_file() -> Result<PathBuf> {
    Ok(config_dir()?.join(TOKEN_FILE))
}

/// Expand ~ and environment variables in a path string.
pub fn expand(path: &str) -> PathBuf {
    let expanded = shellexpand::full(path).unwrap_or(std::borrow::Cow::Borrowed(path));
    PathBuf::from(expanded.as_ref())
}

// ============================================================================
// Tests
// ============================================================================
