//! Error types for the Crawlic client.

use thiserror::Error;

/// Result type for Crawlic client operations.
pub type Result<T> = std::result::Result<T, CrawlicError>;

/// Crawlic client errors.
#[derive(Debug, Error)]
pub enum CrawlicError {
    /// Network error (connection failed, timeout)
    #[error("Network error: {0}")]
    Network(String),

    /// API error (non-2xx response)
    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// Crawlic reported failure in its response envelope (`success: false`)
    #[error("Crawlic reported failure: {0}")]
    Failed(String),
}

impl From<reqwest::Error> for CrawlicError {
    fn from(err: reqwest::Error) -> Self {
        CrawlicError::Network(err.to_string())
    }
}
