//! Custom error types for the application.
//!
//! - [`FetchError`] - Failures of a fetch cycle (network, HTTP, validation)
//! - [`StorageError`] - Key-value storage operations backing the fetch cache

use thiserror::Error;

/// Network/fetch-related errors published by a fetch cycle.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Browser window not available
    #[error("Browser window not available")]
    NoWindow,
    /// Failed to create HTTP request
    #[error("Failed to create request")]
    RequestCreationFailed,
    /// Network request failed (CORS, connection reset, etc.)
    #[error("Network error: {0}")]
    NetworkError(String),
    /// HTTP error response (non-2xx status)
    #[error("HTTP error: {0}")]
    HttpError(u16),
    /// Failed to read response body
    #[error("Failed to read response")]
    ResponseReadFailed,
    /// Invalid response content (not text)
    #[error("Invalid response content")]
    InvalidContent,
    /// JSON parsing error
    #[error("JSON parse error: {0}")]
    JsonParseError(String),
    /// Request timed out
    #[error("Request timed out")]
    Timeout,
    /// Fetched value was rejected by the configured type check
    #[error("Data fetched for key {} failed typecheck", .key.as_deref().unwrap_or("<none>"))]
    Validation { key: Option<String> },
    /// Failure raised by a caller-supplied request
    #[error("{0}")]
    Other(String),
}

impl FetchError {
    /// Build an error from an arbitrary message.
    pub fn other(msg: impl Into<String>) -> Self {
        Self::Other(msg.into())
    }
}

/// Errors raised by key-value storage backends.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// Failed to write to storage (quota exceeded, etc.).
    #[error("failed to write key {0}")]
    WriteFailed(String),
    /// Failed to remove from storage.
    #[error("failed to remove key {0}")]
    RemoveFailed(String),
    /// Failed to serialize data to JSON.
    #[error("failed to serialize entry: {0}")]
    SerializationFailed(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message_names_key() {
        let err = FetchError::Validation {
            key: Some("todos".to_string()),
        };
        assert_eq!(err.to_string(), "Data fetched for key todos failed typecheck");

        let err = FetchError::Validation { key: None };
        assert_eq!(err.to_string(), "Data fetched for key <none> failed typecheck");
    }

    #[test]
    fn test_other_is_verbatim() {
        assert_eq!(FetchError::other("boom").to_string(), "boom");
        assert_eq!(FetchError::HttpError(404).to_string(), "HTTP error: 404");
    }
}
