//! Error types for medscribe.

use thiserror::Error;

/// Result type alias using medscribe's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for medscribe operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid input supplied by the caller
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Inference provider returned an error or an unusable response
    #[error("Inference error: {0}")]
    Inference(String),

    /// Outbound call did not complete within the configured timeout
    #[error("Upstream unavailable: {0}")]
    Timeout(String),

    /// HTTP/network request failed
    #[error("Request error: {0}")]
    Request(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            Error::Timeout(e.to_string())
        } else if e.is_decode() {
            Error::Inference(format!("Failed to parse response: {}", e))
        } else {
            Error::Request(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_invalid_input() {
        let err = Error::InvalidInput("empty file".to_string());
        assert_eq!(err.to_string(), "Invalid input: empty file");
    }

    #[test]
    fn test_error_display_inference() {
        let err = Error::Inference("no choices".to_string());
        assert_eq!(err.to_string(), "Inference error: no choices");
    }

    #[test]
    fn test_error_display_timeout() {
        let err = Error::Timeout("after 120s".to_string());
        assert_eq!(err.to_string(), "Upstream unavailable: after 120s");
    }

    #[test]
    fn test_error_display_request() {
        let err = Error::Request("connection refused".to_string());
        assert_eq!(err.to_string(), "Request error: connection refused");
    }

    #[test]
    fn test_error_display_internal() {
        let err = Error::Internal("client build failed".to_string());
        assert_eq!(err.to_string(), "Internal error: client build failed");
    }
}
