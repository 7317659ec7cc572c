//! HTTP client for the generative-language API.
//!
//! # Responsibilities
//! - Issue the single outbound generateContent call per inbound request
//! - Bound the call with the configured timeout
//! - Classify failures (timeout, transport, non-2xx) for the HTTP layer
//!
//! # Design Decisions
//! - The successful body is relayed as raw bytes, never re-serialized
//! - The API key travels as a query parameter and is never logged
//! - No retries: one inbound request maps to at most one outbound call

use std::time::Duration;

use bytes::Bytes;
use thiserror::Error;
use tokio::time;
use url::Url;

use crate::config::UpstreamConfig;
use crate::upstream::prompt::GenerateRequest;

/// Errors that can occur while calling the upstream API.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// The call did not complete within the configured bound.
    #[error("upstream call timed out after {0:?}")]
    Timeout(Duration),

    /// Connection-level failure (DNS, refused, reset, TLS).
    #[error("upstream transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The endpoint URL could not be constructed from the base.
    #[error("invalid upstream endpoint: {0}")]
    Endpoint(#[from] url::ParseError),

    /// The upstream answered with a non-2xx status.
    #[error("upstream returned status {status}")]
    Status {
        /// HTTP status code returned by the upstream.
        status: u16,
        /// Error message extracted from the upstream body, if any.
        message: Option<String>,
    },
}

/// Client for the generateContent endpoint.
pub struct GenerativeClient {
    http: reqwest::Client,
    base_url: Url,
    model: String,
    timeout: Duration,
}

impl GenerativeClient {
    /// Create a client from the upstream configuration.
    pub fn new(config: &UpstreamConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url.clone(),
            model: config.model.clone(),
            timeout: Duration::from_secs(config.timeout_secs),
        }
    }

    /// Send a prompt upstream and return the raw response body.
    ///
    /// Exactly one outbound POST is made. The whole exchange, including
    /// reading the body, must finish within the configured timeout.
    pub async fn generate(&self, api_key: &str, prompt: String) -> Result<Bytes, UpstreamError> {
        let mut url = self
            .base_url
            .join(&format!("v1beta/models/{}:generateContent", self.model))?;
        url.query_pairs_mut().append_pair("key", api_key);

        let body = GenerateRequest::for_prompt(prompt);

        let exchange = async {
            let response = self.http.post(url).json(&body).send().await?;
            let status = response.status().as_u16();
            let bytes = response.bytes().await?;
            Ok::<_, reqwest::Error>((status, bytes))
        };

        let (status, bytes) = time::timeout(self.timeout, exchange)
            .await
            .map_err(|_| UpstreamError::Timeout(self.timeout))??;

        if !(200..300).contains(&status) {
            return Err(UpstreamError::Status {
                status,
                message: extract_error_message(&bytes),
            });
        }

        Ok(bytes)
    }
}

/// Pull the human-readable message out of an upstream error body.
///
/// The generative-language API reports errors as
/// `{"error": {"code": ..., "message": ..., "status": ...}}`.
fn extract_error_message(body: &[u8]) -> Option<String> {
    let value: serde_json::Value = serde_json::from_slice(body).ok()?;
    value
        .pointer("/error/message")
        .and_then(|m| m.as_str())
        .map(str::to_owned)
}
