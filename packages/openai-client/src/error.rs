//! Error types for the OpenAI client.

use thiserror::Error;

/// Result type for OpenAI client operations.
pub type Result<T> = std::result::Result<T, OpenAIError>;

/// OpenAI client errors.
#[derive(Debug, Error)]
pub enum OpenAIError {
    /// Network error (connection failed, timeout)
    #[error("Network error: {0}")]
    Network(String),

    /// API error (non-2xx response, rate limit, quota exceeded)
    #[error("API error: {0}")]
    Api(String),

    /// Parse error (response JSON did not match the requested schema)
    #[error("Parse error: {0}")]
    Parse(String),
}
