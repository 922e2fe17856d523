//! JSON error envelope for the proxy routes.
//!
//! Every failure is reported once to the caller as
//! `{ "success": false, "error": "..." }`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use protogen_core::ProtogenError;
use serde::Serialize;
use thiserror::Error;

/// Error returned by the JSON routes
#[derive(Error, Debug)]
pub enum ProxyError {
    /// The listing page answered with a non-success status
    #[error("Failed to fetch Kikiskothek page")]
    ListingUnavailable(StatusCode),

    /// Any other upstream failure
    #[error(transparent)]
    Upstream(#[from] ProtogenError),
}

impl ProxyError {
    /// Status code sent to the caller
    pub fn status(&self) -> StatusCode {
        match self {
            ProxyError::ListingUnavailable(status) => *status,
            ProxyError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Body of a failed JSON response
#[derive(Debug, Serialize)]
pub struct ErrorEnvelope {
    pub success: bool,
    pub error: String,
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let body = ErrorEnvelope {
            success: false,
            error: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}
