//! Updater facade
//!
//! Wires configuration, transport, discovery and install together:
//! - Builds the default matcher (binary name on the running platform)
//! - Selects the ordering strategy from `sort-criteria`
//! - Finds the latest build and installs it over the target path

use binup_core::{
    BuildRecord, Matcher, NameOsArchMatcher, OrderingStrategy, Tokenizer, UpdaterConfig,
};
use semver::Version;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info};

use crate::error::{Result, UpdateError};
use crate::fetch::{Fetcher, HttpFetcher};
use crate::installer::Installer;
use crate::selector::Selector;

/// Self-updater for a binary published in an HTTP repository
pub struct Updater {
    /// Effective configuration
    config: UpdaterConfig,

    /// Discovery of the latest build
    selector: Selector,

    /// Download and atomic install
    installer: Installer,
}

impl Updater {
    /// Create an updater using the HTTP transport
    pub fn new(config: UpdaterConfig) -> Result<Self> {
        let fetcher = Arc::new(HttpFetcher::new(&config.network)?);
        Self::with_fetcher(config, fetcher)
    }

    /// Create an updater with a custom transport
    pub fn with_fetcher(config: UpdaterConfig, fetcher: Arc<dyn Fetcher>) -> Result<Self> {
        config.validate()?;

        let platform = config.platform();
        debug!(
            "Updater initialized: binary={}, platform={}, repository={}",
            config.binary_name, platform, config.repository
        );

        let matcher = NameOsArchMatcher::for_platform(config.binary_name.clone(), platform);
        let selector = Selector::new(
            config.repository.clone(),
            Tokenizer::new(config.schema()?),
            Box::new(matcher),
            fetcher.clone(),
        )
        .with_ordering(config.sort_criteria.strategy());

        let installer = Installer::new(fetcher)
            .with_target_path(config.target_path.clone())
            .with_tmp_pattern(config.tmp_pattern.clone());

        Ok(Self {
            config,
            selector,
            installer,
        })
    }

    /// Replace the default eligibility matcher
    pub fn with_matcher(mut self, matcher: impl Matcher + 'static) -> Self {
        self.selector = self.selector.with_matcher(Box::new(matcher));
        self
    }

    /// Replace the ordering strategy chosen by `sort-criteria`
    pub fn with_ordering(mut self, ordering: impl OrderingStrategy + 'static) -> Self {
        self.selector = self.selector.with_ordering(Box::new(ordering));
        self
    }

    /// Enable or disable the download progress spinner
    pub fn with_progress(mut self, show: bool) -> Self {
        self.installer = self.installer.with_progress(show);
        self
    }

    /// Effective configuration
    pub fn config(&self) -> &UpdaterConfig {
        &self.config
    }

    /// Path that an update replaces
    pub fn target_path(&self) -> Result<PathBuf> {
        self.installer.resolve_target()
    }

    /// Latest eligible build in the repository
    pub fn find_latest(&self) -> Result<Option<BuildRecord>> {
        self.selector.find_latest()
    }

    /// All eligible builds, ascending
    pub fn candidates(&self) -> Result<Vec<BuildRecord>> {
        self.selector.candidates()
    }

    /// Download `build` and install it over the target path
    pub fn update_to(&self, build: &BuildRecord) -> Result<PathBuf> {
        self.installer.update_to(build)
    }

    /// Install the latest build if it is newer than `current_version`.
    ///
    /// Without a current version the latest build is installed
    /// unconditionally.
    pub fn update_if_newer(&self, current_version: Option<&str>) -> Result<UpdateResult> {
        if let Some(current) = current_version {
            Version::parse(current.trim_start_matches('v')).map_err(|_| {
                UpdateError::Config(binup_core::Error::invalid_config(format!(
                    "current version {} is not a semantic version",
                    current
                )))
            })?;
        }

        let Some(latest) = self.find_latest()? else {
            return Ok(UpdateResult::NoEligibleBuild);
        };

        if let Some(current) = current_version {
            if !latest.newer_than(current) {
                info!("Already up to date: {} >= {}", current, latest.version_display());
                return Ok(UpdateResult::AlreadyUpToDate {
                    current: current.to_string(),
                    latest,
                });
            }
        }

        let path = self.update_to(&latest)?;
        Ok(UpdateResult::Updated {
            build: latest,
            path,
        })
    }
}

/// Result of an update attempt
#[derive(Debug)]
pub enum UpdateResult {
    /// Nothing in the repository matched
    NoEligibleBuild,

    /// The latest build is not newer than the running version
    AlreadyUpToDate {
        /// Running version
        current: String,

        /// Latest eligible build
        latest: BuildRecord,
    },

    /// Successfully updated
    Updated {
        /// Installed build
        build: BuildRecord,

        /// Path the build was installed at
        path: PathBuf,
    },
}
