//! ANY /api/* - XHR API pass-through.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{Method, Uri};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::Value;
use tracing::{error, info};

use super::suffix_after;
use crate::error::ProxyError;
use crate::state::AppState;

const ROUTE_PREFIX: &str = "/api";

/// Forward the call to `/sys/XHR{suffix}` and mirror status and JSON body.
///
/// A body that is not JSON is forwarded as `{}`.
pub async fn forward_api(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    body: Bytes,
) -> Result<Response, ProxyError> {
    let mut suffix = suffix_after(&uri, ROUTE_PREFIX);
    if !suffix.starts_with('/') {
        suffix.insert(0, '/');
    }

    info!(%method, %suffix, "proxying api call");

    let body = if method == Method::GET {
        None
    } else {
        let json = serde_json::from_slice::<Value>(&body)
            .unwrap_or_else(|_| Value::Object(Default::default()));
        Some(json)
    };

    let (status, json) = state
        .client
        .forward_json(method, &suffix, body)
        .await
        .inspect_err(|e| error!(error = %e, "api proxy failed"))?;

    Ok((status, Json(json)).into_response())
}
