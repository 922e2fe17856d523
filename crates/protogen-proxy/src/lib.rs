//! ProtoMusic proxy HTTP server
//!
//! Relays the web player's calls to v2.protogen.fr with a CORS policy the
//! browser accepts.
//!
//! # Routes
//! - `GET /` - health check
//! - `ANY /api/*` - XHR API pass-through (JSON)
//! - `GET /assets/*` - asset pass-through (streamed)
//! - `GET /webapi/*` - media pass-through (streamed)
//! - `GET /kikiskothek-api/*` - Kikiskothek listing scraped to JSON

pub mod config;
pub mod error;
pub mod handlers;
pub mod state;

use axum::http::{header, HeaderValue, Method};
use axum::routing::{any, get};
use axum::Router;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::warn;

pub use config::ProxyConfig;
pub use error::ProxyError;
pub use state::AppState;

/// Build the application router with CORS and request tracing.
pub fn create_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config.allowed_origins);

    Router::new()
        .route("/", get(handlers::health::health_check))
        .route("/api", any(handlers::api::forward_api))
        .route("/api/*rest", any(handlers::api::forward_api))
        .route("/assets/*rest", get(handlers::media::proxy_asset))
        .route("/webapi/*rest", get(handlers::media::proxy_media))
        .route("/kikiskothek-api/", get(handlers::kikiskothek::listing))
        .route("/kikiskothek-api/*rest", get(handlers::kikiskothek::listing))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// CORS policy: listed origins only, credentials allowed.
pub fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter(|origin| {
            if origin.as_str() == config::WILDCARD_ORIGIN {
                warn!("ignoring wildcard CORS origin, credentials require explicit origins");
                return false;
            }
            true
        })
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(%origin, "ignoring unparsable CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_credentials(true)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}
