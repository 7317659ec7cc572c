//! Liveness endpoint.

use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Body returned by GET /health.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always "ok"; the endpoint has no external dependency.
    pub status: String,
    /// Current server time, RFC 3339.
    pub timestamp: String,
}

/// Health check handler. Always succeeds.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        timestamp: Utc::now().to_rfc3339(),
    })
}
