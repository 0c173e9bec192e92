//! HTTP client for the catalog service.

use std::time::Duration;

use reqwest::Client;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::{Error, Result};

/// Default per-request timeout for catalog calls.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP client for fetching catalog collections as JSON envelopes.
pub struct CatalogClient {
    client: Client,
    base_url: String,
}

impl CatalogClient {
    /// Creates a client with the default request timeout.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    /// Creates a client with a custom request timeout (primarily for tests).
    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("storemap/", env!("CARGO_PKG_VERSION")))
            .gzip(true)
            .build()
            .map_err(Error::Network)?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Fetches the base URL joined with `path` and decodes the JSON body.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a non-success HTTP status,
    /// or a body that is not valid JSON.
    pub async fn fetch(&self, path: &str) -> Result<Value> {
        let url = format!("{}{path}", self.base_url);
        debug!("GET {url}");

        let response = self.client.get(&url).send().await?;
        let response = response.error_for_status().map_err(Error::Network)?;
        let body = response
            .json::<Value>()
            .await
            .map_err(|e| Error::Parse(format!("invalid JSON from '{url}': {e}")))?;

        info!("Fetched {url}");
        Ok(body)
    }

    /// Fetches a path, recovering every failure into `None`.
    ///
    /// Sitemap completeness tolerates one catalog source being
    /// unavailable, so any transport, status, timeout, or decode failure
    /// is logged and the caller proceeds with that source empty.
    pub async fn try_fetch(&self, path: &str) -> Option<Value> {
        match self.fetch(path).await {
            Ok(value) => Some(value),
            Err(e) => {
                warn!("Fetch failed for '{path}': {e}");
                None
            },
        }
    }
}
