//! Common test infrastructure for binup-update tests
//!
//! # Modules
//!
//! - `constants`: Artifact names, versions and test content
//! - `listing`: Builder for repository listing pages
//! - `mock_server`: Wiremock setup helpers for listings and downloads
//! - `install_helpers`: Helpers for target binaries and blocking execution

// Each test binary uses a different subset of the helpers
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod constants;
pub mod install_helpers;
pub mod listing;
pub mod mock_server;

pub use constants::*;
pub use install_helpers::*;
pub use listing::*;
pub use mock_server::*;
