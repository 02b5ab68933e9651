//! Tool configuration, read from an optional JSON file.

use anyhow::{Context, Result};
use pdt_license::{default_data_dir, LicenseConfig, Locale};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Configuration for one run of the tool.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StudioConfig {
    /// Where the device id and saved key live. Defaults to the platform
    /// data directory.
    pub data_dir: Option<PathBuf>,
    /// Language for rejection messages.
    pub locale: Locale,
    /// Storage names and device tag.
    pub license: LicenseConfig,
}

impl StudioConfig {
    /// Loads configuration from `path`, or returns defaults when no path is
    /// given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Self = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        debug!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    /// Resolves the data directory: explicit override, then config, then the
    /// platform default.
    pub fn resolve_data_dir(&self, override_dir: Option<&Path>) -> Result<PathBuf> {
        override_dir
            .map(Path::to_path_buf)
            .or_else(|| self.data_dir.clone())
            .or_else(default_data_dir)
            .context("No data directory available; pass --data-dir")
    }
}
