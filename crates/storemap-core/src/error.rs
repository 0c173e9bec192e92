//! Error types and handling for storemap-core operations.
//!
//! Fetch-level failures (network, status, decode) are recovered inside the
//! pipeline and degrade a catalog source to zero entries; only an artifact
//! write failure propagates out of a run and fails the process.

use thiserror::Error;

/// The main error type for storemap-core operations.
///
/// All fallible functions in this crate return [`Result<T>`] with this
/// error. Conversions from common library errors are provided so call
/// sites can use `?` directly.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Network operation failed.
    ///
    /// Covers transport errors, non-success HTTP statuses, and request
    /// timeouts against the catalog service. The underlying
    /// `reqwest::Error` is preserved for detailed connection information.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Response body or document content could not be parsed or rendered.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Persisting the sitemap artifact failed.
    ///
    /// This is the one fatal error class: partial success (catalog
    /// fetched but sitemap not written) has no value to the consumer.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Configuration is invalid.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

/// Result type alias used throughout storemap-core.
pub type Result<T> = std::result::Result<T, Error>;
