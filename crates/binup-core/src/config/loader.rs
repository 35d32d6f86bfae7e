//! Layered configuration loader
//!
//! Loads configuration from multiple sources with the following precedence (low to high):
//! 1. Built-in defaults
//! 2. Config file (explicit path, else `<user config dir>/binup/config.yaml`)
//! 3. Environment variables (BINUP_* prefix)
//! 4. CLI flags (handled by caller)

use camino::{Utf8Path, Utf8PathBuf};
use directories::ProjectDirs;
use std::env;
use std::fs;
use std::path::PathBuf;
use tracing::debug;

use super::types::UpdaterConfig;
use crate::error::{Error, Result};

/// Name of the config file inside the config directory
pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// Configuration loader
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    /// Config file to read
    config_file: Option<Utf8PathBuf>,

    /// Whether a missing config file is an error
    required: bool,
}

impl ConfigLoader {
    /// Loader reading the default config file when it exists
    pub fn new() -> Self {
        Self {
            config_file: Self::default_config_file(),
            required: false,
        }
    }

    /// Loader reading an explicit config file, which must exist
    pub fn with_file(path: impl Into<Utf8PathBuf>) -> Self {
        Self {
            config_file: Some(path.into()),
            required: true,
        }
    }

    /// Loader ignoring config files, defaults and environment only
    pub fn without_file() -> Self {
        Self {
            config_file: None,
            required: false,
        }
    }

    fn default_config_file() -> Option<Utf8PathBuf> {
        let dirs = ProjectDirs::from("", "", "binup")?;
        Utf8PathBuf::from_path_buf(dirs.config_dir().join(CONFIG_FILE_NAME)).ok()
    }

    /// Load configuration with layered precedence
    pub fn load(&self) -> Result<UpdaterConfig> {
        let mut config = UpdaterConfig::default();

        if let Some(path) = &self.config_file {
            if path.exists() {
                debug!("Loading config file {}", path);
                config = self.load_yaml_file(path)?;
            } else if self.required {
                return Err(Error::config_not_found(path.as_str()));
            }
        }

        self.apply_env_overrides(config)
    }

    /// Load a YAML file and parse it
    fn load_yaml_file(&self, path: &Utf8Path) -> Result<UpdaterConfig> {
        let content = fs::read_to_string(path)?;
        serde_yaml_ng::from_str(&content)
            .map_err(|e| Error::invalid_config(format!("Failed to parse {}: {}", path, e)))
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(&self, mut config: UpdaterConfig) -> Result<UpdaterConfig> {
        if let Ok(val) = env::var("BINUP_REPOSITORY") {
            config.repository = val;
        }

        if let Ok(val) = env::var("BINUP_BINARY_NAME") {
            config.binary_name = val;
        }

        if let Ok(val) = env::var("BINUP_TARGET_PATH") {
            config.target_path = Some(PathBuf::from(val));
        }

        if let Ok(val) = env::var("BINUP_FIELD_SEPARATOR") {
            config.field_separator = val;
        }

        if let Ok(val) = env::var("BINUP_TMP_PATTERN") {
            config.tmp_pattern = Some(val);
        }

        if let Ok(val) = env::var("BINUP_OS") {
            config.os = Some(val);
        }

        if let Ok(val) = env::var("BINUP_ARCH") {
            config.arch = Some(val);
        }

        if let Ok(val) = env::var("BINUP_HTTP_TIMEOUT_SECS") {
            config.network.timeout_secs = val.parse().map_err(|_| {
                Error::invalid_config("BINUP_HTTP_TIMEOUT_SECS must be a valid number")
            })?;
        }

        Ok(config)
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
