//! Error types for discovery and install

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using [`UpdateError`]
pub type Result<T> = std::result::Result<T, UpdateError>;

/// Failure reported by the HTTP transport
#[derive(Error, Debug)]
pub enum TransportError {
    /// Connection, TLS or protocol failure
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-2xx status
    #[error("unexpected HTTP status {status}")]
    Status { status: u16 },

    /// Writing the response body failed
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Discovery and install failures
#[derive(Error, Debug)]
pub enum UpdateError {
    /// Invalid configuration
    #[error(transparent)]
    Config(#[from] binup_core::Error),

    /// HTTP client could not be built
    #[error("Failed to create HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// Repository listing could not be fetched
    #[error("Failed to fetch repository listing {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: TransportError,
    },

    /// Artifact could not be downloaded
    #[error("Failed to download {url}: {source}")]
    Download {
        url: String,
        #[source]
        source: TransportError,
    },

    /// Install path could not be determined
    #[error("Cannot find current executable path: {0}")]
    TargetPath(#[source] std::io::Error),

    /// Staging file could not be created or prepared
    #[error("Cannot prepare temporary file {path:?}: {source}")]
    TempFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Staging file could not be moved over the target
    #[error("Cannot move temporary file {from:?} to {to:?}: {source}")]
    Replace {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl UpdateError {
    /// True for failures of the listing fetch or artifact download
    pub fn is_transport(&self) -> bool {
        matches!(self, UpdateError::Fetch { .. } | UpdateError::Download { .. })
    }
}
