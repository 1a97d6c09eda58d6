//! Encoding error types.

use thiserror::Error;

/// Errors that can occur while encoding a value as JSON.
#[derive(Debug, Error)]
pub enum EncodingError {
    /// The underlying encoder met a value it cannot represent
    /// (non-string map key, a `Serialize` impl that errored, etc.).
    #[error("JSON encoding failed: {0}")]
    Encode(#[from] serde_json::Error),

    /// The encoded buffer was not valid UTF-8.
    #[error("UTF-8 encoding error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Result type alias for encoding operations.
pub type EncodingResult<T> = Result<T, EncodingError>;
