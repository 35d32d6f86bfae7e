//! HTTP transport
//!
//! Discovery and install only need two things from the network: the bytes
//! of a listing page and the body of an artifact streamed into a writer.
//! Both fail on transport errors and non-2xx statuses. [`Fetcher`] is the
//! seam; [`HttpFetcher`] is the blocking reqwest implementation.

use binup_core::NetworkConfig;
use reqwest::blocking::{Client, Response};
use std::io::Write;
use std::time::Duration;
use tracing::debug;

use crate::error::{TransportError, UpdateError};

/// Blocking HTTP transport
pub trait Fetcher: Send + Sync {
    /// Fetch the full body at `url`
    fn fetch(&self, url: &str) -> Result<Vec<u8>, TransportError>;

    /// Stream the body at `url` into `dest`, returning the bytes written
    fn download(&self, url: &str, dest: &mut dyn Write) -> Result<u64, TransportError>;
}

/// reqwest-backed transport
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Create a transport from network settings
    pub fn new(network: &NetworkConfig) -> Result<Self, UpdateError> {
        let timeout = match network.timeout_secs {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        };

        let client = Client::builder()
            .user_agent(&network.user_agent)
            .timeout(timeout)
            .build()
            .map_err(UpdateError::Client)?;

        Ok(Self { client })
    }

    fn get(&self, url: &str) -> Result<Response, TransportError> {
        debug!("GET {}", url);
        let response = self.client.get(url).send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status {
                status: status.as_u16(),
            });
        }
        Ok(response)
    }
}

impl Fetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, TransportError> {
        let body = self.get(url)?.bytes()?;
        Ok(body.to_vec())
    }

    fn download(&self, url: &str, dest: &mut dyn Write) -> Result<u64, TransportError> {
        let mut response = self.get(url)?;
        let written = response.copy_to(dest)?;
        Ok(written)
    }
}
