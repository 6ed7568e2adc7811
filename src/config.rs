//! Configuration loaded from `~/.config/assessor/config.toml`.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// What to do when a multi-column data row disagrees with its header row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnPolicy {
    /// Abort extraction with the error.
    #[default]
    Strict,
    /// Log a warning and leave that table's key out of the record.
    SkipTable,
}

/// Settings for fetching and extracting assessor pages.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AssessorConfig {
    /// Site root that `displaygeneral.do` and `displayhistory.do` live under.
    pub base_url: String,
    pub timeout_secs: u64,
    pub connect_timeout_secs: u64,
    pub user_agent: String,
    pub column_policy: ColumnPolicy,
}

impl Default for AssessorConfig {
    fn default() -> Self {
        Self {
            base_url: "http://ats.jeffco.us/ats".to_string(),
            timeout_secs: 30,
            connect_timeout_secs: 10,
            user_agent: format!("assessor/{}", crate::VERSION),
            column_policy: ColumnPolicy::Strict,
        }
    }
}

impl AssessorConfig {
    /// Load from the default location.
    ///
    /// Returns defaults if the file doesn't exist (configuration is optional).
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        let path = config_path();
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    /// Load from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;

        toml::from_str(&content).with_context(|| format!("invalid TOML in {}", path.display()))
    }
}

/// Return the path to the config file.
fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("assessor")
        .join("config.toml")
}
