//! Route handlers.

pub mod api;
pub mod health;
pub mod kikiskothek;
pub mod media;

use axum::http::Uri;

/// Inbound path and query with `prefix` removed from the front.
pub(crate) fn suffix_after(uri: &Uri, prefix: &str) -> String {
    let path_and_query = uri.path_and_query().map(|pq| pq.as_str()).unwrap_or("/");
    path_and_query
        .strip_prefix(prefix)
        .unwrap_or(path_and_query)
        .to_string()
}

/// Inbound path and query, untouched.
pub(crate) fn path_and_query(uri: &Uri) -> String {
    uri.path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| "/".to_string())
}
