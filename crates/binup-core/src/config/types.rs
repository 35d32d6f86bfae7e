//! Updater configuration types

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{Error, Result};
use crate::ordering::{OrderingStrategy, SemverOrdering};
use crate::platform::Platform;
use crate::schema::{FieldKind, FieldSchema, DEFAULT_SEPARATOR};

/// Placeholder replaced by the artifact filename in `tmp-pattern`
pub const FILENAME_PLACEHOLDER: &str = "{filename}";

/// Complete updater configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct UpdaterConfig {
    /// Base name of the published binaries
    #[serde(default)]
    pub binary_name: String,

    /// Path to replace, defaults to the running executable
    #[serde(default)]
    pub target_path: Option<PathBuf>,

    /// Filename structure
    #[serde(default = "FieldKind::default_order")]
    pub fields: Vec<FieldKind>,

    /// Separator between filename fields
    #[serde(default = "default_separator")]
    pub field_separator: String,

    /// Strategy used to find the latest build
    #[serde(default)]
    pub sort_criteria: SortCriteria,

    /// URL of the repository listing page
    #[serde(default)]
    pub repository: String,

    /// Staging file pattern containing `{filename}`
    #[serde(default)]
    pub tmp_pattern: Option<String>,

    /// Override of the running OS identifier
    #[serde(default)]
    pub os: Option<String>,

    /// Override of the running architecture identifier
    #[serde(default)]
    pub arch: Option<String>,

    /// HTTP transport settings
    #[serde(default)]
    pub network: NetworkConfig,
}

impl Default for UpdaterConfig {
    fn default() -> Self {
        Self {
            binary_name: String::new(),
            target_path: None,
            fields: FieldKind::default_order(),
            field_separator: default_separator(),
            sort_criteria: SortCriteria::default(),
            repository: String::new(),
            tmp_pattern: None,
            os: None,
            arch: None,
            network: NetworkConfig::default(),
        }
    }
}

impl UpdaterConfig {
    /// Minimal configuration for a binary published at `repository`
    pub fn new(binary_name: impl Into<String>, repository: impl Into<String>) -> Self {
        Self {
            binary_name: binary_name.into(),
            repository: repository.into(),
            ..Self::default()
        }
    }

    /// Check the configuration is usable for discovery and install
    pub fn validate(&self) -> Result<()> {
        if self.repository.trim().is_empty() {
            return Err(Error::invalid_config("repository URL is required"));
        }
        if self.binary_name.trim().is_empty() {
            return Err(Error::invalid_config("binary-name is required"));
        }
        if let Some(pattern) = &self.tmp_pattern {
            if !pattern.contains(FILENAME_PLACEHOLDER) {
                return Err(Error::invalid_config(format!(
                    "tmp-pattern must contain {}",
                    FILENAME_PLACEHOLDER
                )));
            }
        }
        self.schema().map(|_| ())
    }

    /// Field schema built from `fields` and `field-separator`
    pub fn schema(&self) -> Result<FieldSchema> {
        FieldSchema::new(self.fields.clone(), self.field_separator.clone())
    }

    /// Platform builds must target
    pub fn platform(&self) -> Platform {
        Platform::current_with_overrides(self.os.as_deref(), self.arch.as_deref())
    }
}

/// Expand a staging pattern for `filename`.
///
/// Without a pattern the file is staged as `<temp dir>/<filename>.tmp`.
pub fn staging_path(pattern: Option<&str>, filename: &str) -> PathBuf {
    match pattern {
        Some(pattern) => PathBuf::from(pattern.replace(FILENAME_PLACEHOLDER, filename)),
        None => std::env::temp_dir().join(format!("{}.tmp", filename)),
    }
}

fn default_separator() -> String {
    DEFAULT_SEPARATOR.to_string()
}

/// Built-in ordering strategies
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortCriteria {
    /// Semantic version precedence
    #[default]
    Semver,
}

impl SortCriteria {
    /// Strategy implementing this criteria
    pub fn strategy(self) -> Box<dyn OrderingStrategy> {
        match self {
            SortCriteria::Semver => Box::new(SemverOrdering),
        }
    }
}

/// HTTP transport configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct NetworkConfig {
    /// Request timeout in seconds, 0 disables the timeout
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// User agent string for HTTP requests
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

fn default_timeout() -> u64 {
    300
}

fn default_user_agent() -> String {
    format!("binup/{}", env!("CARGO_PKG_VERSION"))
}
