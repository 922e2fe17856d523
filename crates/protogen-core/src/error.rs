//! Error types for the ProtoMusic proxy core
//!
//! Only upstream failures are errors. A listing page with an unexpected
//! shape is never an error: the extractor just yields fewer results.

use thiserror::Error;

/// Error type for upstream operations
#[derive(Error, Debug)]
pub enum ProtogenError {
    /// HTTP request failed (connection, TLS, body read)
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Upstream answered with a non-success status
    #[error("Upstream returned {status} for {url}")]
    UpstreamStatus {
        status: reqwest::StatusCode,
        url: String,
    },

    /// Upstream body could not be decoded as expected
    #[error("Invalid upstream body: {0}")]
    InvalidBody(String),

    /// Invalid URL or path
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

/// Result type alias for upstream operations
pub type Result<T> = std::result::Result<T, ProtogenError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_upstream_status() {
        let error = ProtogenError::UpstreamStatus {
            status: reqwest::StatusCode::NOT_FOUND,
            url: "https://v2.protogen.fr/kikiskothek".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Upstream returned 404 Not Found for https://v2.protogen.fr/kikiskothek"
        );
    }

    #[test]
    fn test_error_display_invalid_body() {
        let error = ProtogenError::InvalidBody("expected value at line 1".to_string());
        assert_eq!(
            error.to_string(),
            "Invalid upstream body: expected value at line 1"
        );
    }

    #[test]
    fn test_error_display_invalid_url() {
        let error = ProtogenError::InvalidUrl("no-scheme".to_string());
        assert_eq!(error.to_string(), "Invalid URL: no-scheme");
    }
}
