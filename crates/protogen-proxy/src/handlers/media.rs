//! GET /assets/* and GET /webapi/* - streamed file pass-through.
//!
//! Only an allow-list of upstream headers reaches the client, plus the
//! method policy for media responses. The CORS origin is set by the router's
//! CORS layer.

use axum::body::Body;
use axum::extract::State;
use axum::http::{header, HeaderMap, HeaderName, HeaderValue, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use protogen_core::ProtogenError;
use tracing::{error, info, warn};

use super::path_and_query;
use crate::state::AppState;

/// Upstream headers copied onto the client response
const FORWARDED_HEADERS: [HeaderName; 9] = [
    header::CONTENT_TYPE,
    header::CONTENT_LENGTH,
    header::CONTENT_ENCODING,
    header::CONTENT_RANGE,
    header::ACCEPT_RANGES,
    header::CACHE_CONTROL,
    header::ETAG,
    header::LAST_MODIFIED,
    header::EXPIRES,
];

const MEDIA_ALLOW_METHODS: &str = "GET, OPTIONS";

/// Which pass-through route is answering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Asset,
    Media,
}

impl MediaKind {
    fn not_found_message(self) -> &'static str {
        match self {
            MediaKind::Asset => "Asset not found",
            MediaKind::Media => "Media not found",
        }
    }

    fn failure_message(self) -> &'static str {
        match self {
            MediaKind::Asset => "Assets proxy error",
            MediaKind::Media => "Media proxy error",
        }
    }
}

pub async fn proxy_asset(State(state): State<AppState>, uri: Uri) -> Response {
    relay(&state, MediaKind::Asset, &path_and_query(&uri)).await
}

pub async fn proxy_media(State(state): State<AppState>, uri: Uri) -> Response {
    relay(&state, MediaKind::Media, &path_and_query(&uri)).await
}

/// Fetch `{upstream}{path}` and stream it back.
async fn relay(state: &AppState, kind: MediaKind, path: &str) -> Response {
    info!(?kind, path, "proxying file");

    let upstream = match state.client.fetch_raw(path).await {
        Ok(upstream) => upstream,
        Err(ProtogenError::UpstreamStatus { status, url }) => {
            warn!(?kind, %status, %url, "upstream refused file");
            return (status, kind.not_found_message()).into_response();
        }
        Err(e) => {
            error!(?kind, error = %e, "file proxy failed");
            return (StatusCode::INTERNAL_SERVER_ERROR, kind.failure_message()).into_response();
        }
    };

    let status = upstream.status();
    let headers = forwarded_headers(upstream.headers());
    let body = Body::from_stream(upstream.bytes_stream());

    (status, headers, body).into_response()
}

/// Copy the allow-listed headers and add the media method policy.
fn forwarded_headers(upstream: &HeaderMap) -> HeaderMap {
    let mut headers = HeaderMap::new();
    for name in FORWARDED_HEADERS.iter() {
        if let Some(value) = upstream.get(name) {
            headers.insert(name.clone(), value.clone());
        }
    }
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static(MEDIA_ALLOW_METHODS),
    );
    headers
}
