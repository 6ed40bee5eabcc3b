// src/infrastructure/config.rs
use crate::constants::{APP_DIR_NAME, DEFAULT_STORAGE_KEY};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

/// TOML configuration for notelist
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct StorageConfig {
    /// Directory holding the snapshot file. Empty means the platform data directory.
    #[serde(default)]
    pub data_dir: String,
    #[serde(default = "default_key")]
    pub key: String,
}

fn default_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: String::new(),
            key: default_key(),
        }
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content).context("Failed to parse TOML config")?;

        Ok(config)
    }

    /// Load configuration, falling back to defaults when the file does not exist
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            debug!(?path, "No config file, using defaults");
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// Directory configured for the snapshot, if any
    pub fn data_dir(&self) -> Option<PathBuf> {
        let dir = self.storage.data_dir.trim();
        (!dir.is_empty()).then(|| PathBuf::from(dir))
    }
}

/// `<platform config dir>/notelist/config.toml`
pub fn default_config_path() -> Result<PathBuf> {
    let base = dirs::config_dir().context("Could not find config directory")?;
    Ok(base.join(APP_DIR_NAME).join("config.toml"))
}

/// `<platform data dir>/notelist`
pub fn default_data_dir() -> Result<PathBuf> {
    let base = dirs::data_dir().context("Could not find data directory")?;
    Ok(base.join(APP_DIR_NAME))
}
