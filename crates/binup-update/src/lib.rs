//! Build discovery and self-update for binup
//!
//! Provides:
//! - HTTP transport for repository listings and artifact downloads
//! - Discovery of the latest eligible build in a repository listing
//! - Download into a staging file and atomic replacement of the target binary

pub mod error;
pub mod fetch;
pub mod installer;
pub mod selector;
pub mod updater;

pub use error::{Result, TransportError, UpdateError};
pub use fetch::{Fetcher, HttpFetcher};
pub use installer::Installer;
pub use selector::Selector;
pub use updater::{UpdateResult, Updater};
