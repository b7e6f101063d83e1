//! Settings file and access token storage.
//!
//! Both live in [`paths::config_dir`]:
//!
//! ```text
//! ~/.config/deckhand/
//! ├── config.toml   # optional: api_base, output
//! └── token.json    # {"access_token": "..."}, written by --auth
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::cli::OutputFormat;
use crate::paths;

/// Environment variable holding an access token; takes precedence over `token.json`
pub const ENV_ACCESS_TOKEN: &str = "DECKHAND_ACCESS_TOKEN";

// ============================================================================
// Settings
// ============================================================================

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Presentation service base URL
    pub api_base: Option<String>,
    /// Default output format
    pub output: Option<OutputFormat>,
}

impl Settings {
    /// Load config.toml, or defaults when it does not exist
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::settings_file()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("No settings file at {}", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Could not read {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("Invalid {}", path.display()))
    }

    pub fn api_base(&self) -> &str {
        self.api_base
            .as_deref()
            .unwrap_or(slidekit::gateway::google::DEFAULT_API_BASE)
    }
}

// ============================================================================
// Access Token
// ============================================================================

#[derive(Debug, Serialize, Deserialize)]
struct StoredToken {
    access_token: String,
}

/// Find an access token: environment first, then `token.json`
pub fn access_token() -> Result<String> {
    if let Ok(token) = std::env::var(ENV_ACCESS_TOKEN)
        && !token.trim().is_empty()
    {
        log::debug!("Using access token from {}", ENV_ACCESS_TOKEN);
        return Ok(token.trim().to_string());
    }

    read_token(&paths::token_file()?)
}

pub fn read_token(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(slidekit::Error::MissingToken).with_context(|| {
            format!(
                "No access token. Run `deckhand --auth` or set {}",
                ENV_ACCESS_TOKEN
            )
        });
    }

    let content =
        fs::read_to_string(path).with_context(|| format!("Could not read {}", path.display()))?;
    let stored: StoredToken = serde_json::from_str(&content)
        .with_context(|| format!("Invalid token file {}", path.display()))?;

    if stored.access_token.trim().is_empty() {
        return Err(slidekit::Error::MissingToken)
            .with_context(|| format!("Empty access token in {}", path.display()));
    }

    log::debug!("Using access token from {}", path.display());
    Ok(stored.access_token.trim().to_string())
}

pub fn save_token(path: &Path, token: &str) -> Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)
            .with_context(|| format!("Could not create {}", dir.display()))?;
    }

    let stored = StoredToken {
        access_token: token.trim().to_string(),
    };
    let content = serde_json::to_string_pretty(&stored)?;
    fs::write(path, content).with_context(|| format!("Could not write {}", path.display()))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o600))?;
    }

    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
