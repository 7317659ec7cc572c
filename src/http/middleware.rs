//! Credential guard middleware.
//! Rejects /api traffic when the upstream credential is not configured.

use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::http::error::ApiError;
use crate::http::server::AppState;

/// Short-circuit with a configuration error when no API key is set.
///
/// Runs before the rate limiter and handler so an unconfigured service
/// never counts requests or touches the upstream.
pub async fn require_api_key(
    State(state): State<AppState>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let configured = state
        .config
        .upstream
        .api_key
        .as_deref()
        .is_some_and(|key| !key.trim().is_empty());

    if !configured {
        return ApiError::Configuration("API key is not configured".to_string()).into_response();
    }

    next.run(request).await
}
