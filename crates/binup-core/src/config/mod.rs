//! Configuration for binup
//!
//! `types` holds the serialisable updater configuration, `loader` layers
//! defaults, the YAML config file and `BINUP_*` environment variables.

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::{staging_path, NetworkConfig, SortCriteria, UpdaterConfig, FILENAME_PLACEHOLDER};
