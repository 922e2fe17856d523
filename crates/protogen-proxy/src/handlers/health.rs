//! GET / - liveness check.

use axum::Json;
use chrono::{SecondsFormat, Utc};
use serde::Serialize;

/// Status string reported while the proxy is up
pub const RUNNING_STATUS: &str = "ProtoMusic Proxy Running";

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: String,
}

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: RUNNING_STATUS,
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    })
}
