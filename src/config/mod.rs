//! Configuration file support.
//!
//! depres reads optional defaults from a TOML file:
//!
//! ```toml
//! # ~/.depres/config.toml
//! format = "json"      # "text" (default) or "json"
//! strict = true        # fail when any line is skipped
//! log_level = "info"   # tracing filter used when --verbose/--quiet are absent
//! ```
//!
//! # Location
//!
//! 1. `--config <PATH>` on the command line, or the `DEPRES_CONFIG`
//!    environment variable which the CLI reads into the same option
//! 2. `~/.depres/config.toml`
//!
//! A missing default file yields the defaults. An unreadable or malformed file is an
//! error. Command-line flags always win over values from the file.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::constants::{CONFIG_DIR_NAME, CONFIG_FILE_NAME};
use crate::core::DepresError;
use crate::resolver::OutputFormat;

/// Defaults applied to every command.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ResolverConfig {
    /// Output format for `depres resolve`.
    pub format: OutputFormat,

    /// Treat skipped lines as a failure.
    pub strict: bool,

    /// Log filter used when neither `--verbose` nor `--quiet` is given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,
}

impl ResolverConfig {
    /// Load configuration from `path`, or from the default location.
    ///
    /// An explicitly requested file must exist; the default location may be
    /// absent, in which case the defaults are returned.
    ///
    /// # Errors
    ///
    /// Returns an error if an explicit file is missing, or if the file
    /// cannot be read or parsed.
    pub async fn load_with_optional(path: Option<PathBuf>) -> Result<Self> {
        if let Some(path) = path {
            if !path.exists() {
                return Err(DepresError::ConfigError {
                    message: format!("configuration file not found: {}", path.display()),
                }
                .into());
            }
            return Self::load_from(&path).await;
        }

        match Self::default_path() {
            Some(path) if path.exists() => Self::load_from(&path).await,
            _ => {
                tracing::debug!("No configuration file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load configuration from a specific file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid TOML for
    /// this schema.
    pub async fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .map_err(DepresError::from)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;

        tracing::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Default configuration path, `~/.depres/config.toml`.
    ///
    /// Returns `None` when no home directory can be determined.
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }
}
