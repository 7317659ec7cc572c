//! API error taxonomy and the error-response envelope.
//!
//! Every failure on the /api path funnels into [`ApiError`]; its
//! `IntoResponse` impl is the terminal handler that owns status mapping,
//! the `{error, message}` body, and server-side logging. Raw library
//! error text never reaches the caller.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::upstream::UpstreamError;

/// JSON body returned for every failed request.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    /// Error class, stable across releases.
    pub error: String,
    /// Human-readable detail, safe to show to callers.
    pub message: String,
}

/// Failures surfaced by the /api route.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The service is missing its upstream credential.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The request body failed validation.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// The originating address exhausted its request window.
    #[error("rate limit exceeded")]
    RateLimited,

    /// The upstream answered with a non-2xx status.
    #[error("upstream returned status {status}")]
    Upstream {
        status: u16,
        message: Option<String>,
    },

    /// The outbound call did not complete within the bound.
    #[error("upstream call timed out")]
    Timeout,

    /// Anything else. The detail is logged, never returned.
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<UpstreamError> for ApiError {
    fn from(err: UpstreamError) -> Self {
        match err {
            UpstreamError::Timeout(_) => ApiError::Timeout,
            UpstreamError::Status { status, message } => ApiError::Upstream { status, message },
            UpstreamError::Transport(e) => ApiError::Internal(e.to_string()),
            UpstreamError::Endpoint(e) => ApiError::Internal(e.to_string()),
        }
    }
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::RateLimited => StatusCode::TOO_MANY_REQUESTS,
            ApiError::Upstream { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            ApiError::Timeout => StatusCode::REQUEST_TIMEOUT,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn class(&self) -> &'static str {
        match self {
            ApiError::Configuration(_) => "Configuration Error",
            ApiError::InvalidRequest(_) => "Invalid Request",
            ApiError::RateLimited => "Too Many Requests",
            ApiError::Upstream { .. } => "API Error",
            ApiError::Timeout => "Request Timeout",
            ApiError::Internal(_) => "Internal Server Error",
        }
    }

    fn public_message(&self) -> String {
        match self {
            ApiError::Configuration(msg) | ApiError::InvalidRequest(msg) => msg.clone(),
            ApiError::RateLimited => {
                "Too many requests from this address, please try again later".to_string()
            }
            ApiError::Upstream { status, message } => message
                .clone()
                .unwrap_or_else(|| format!("The upstream API returned status {status}")),
            ApiError::Timeout => "The upstream request did not complete in time".to_string(),
            ApiError::Internal(_) => "An unexpected error occurred".to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            tracing::error!(status = %status, error = %self, "Request failed");
        } else {
            tracing::warn!(status = %status, error = %self, "Request rejected");
        }

        let envelope = ErrorEnvelope {
            error: self.class().to_string(),
            message: self.public_message(),
        };
        (status, Json(envelope)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn taxonomy_maps_to_the_documented_statuses() {
        assert_eq!(
            ApiError::Configuration("x".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ApiError::InvalidRequest("x".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ApiError::RateLimited.status(), StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(ApiError::Timeout.status(), StatusCode::REQUEST_TIMEOUT);
        assert_eq!(
            ApiError::Internal("x".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn upstream_status_is_propagated() {
        let err = ApiError::Upstream {
            status: 503,
            message: Some("overloaded".into()),
        };
        assert_eq!(err.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(err.public_message(), "overloaded");

        let err = ApiError::Upstream {
            status: 418,
            message: None,
        };
        assert_eq!(err.public_message(), "The upstream API returned status 418");
    }

    #[test]
    fn internal_detail_is_not_exposed() {
        let err = ApiError::Internal("connection reset by peer (os error 104)".into());
        assert_eq!(err.public_message(), "An unexpected error occurred");
    }
}
