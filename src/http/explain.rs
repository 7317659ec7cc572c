//! Word explanation handler.
//!
//! The single proxied route: validate the request, build the fixed
//! instruction prompt, make one upstream call, relay the body verbatim.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value;

use crate::http::error::ApiError;
use crate::http::request::X_REQUEST_ID;
use crate::http::server::AppState;
use crate::upstream::prompt;

/// POST /api handler.
///
/// The body is parsed leniently as a JSON object so a wrong-typed
/// `word` produces this service's own envelope instead of a serde
/// rejection message.
pub async fn explain_word(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Response, ApiError> {
    let request_id = headers
        .get(X_REQUEST_ID)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("unknown")
        .to_string();

    let Json(body) = body.map_err(|rejection| {
        tracing::debug!(request_id = %request_id, rejection = %rejection, "Body rejected");
        ApiError::InvalidRequest("Request body must be a JSON object".to_string())
    })?;

    let word = extract_word(&body)?;

    // Guarded by the credential middleware; checked again so the
    // handler stands alone.
    let api_key = state
        .config
        .upstream
        .api_key
        .as_deref()
        .filter(|key| !key.trim().is_empty())
        .ok_or_else(|| ApiError::Configuration("API key is not configured".to_string()))?;

    tracing::debug!(request_id = %request_id, word = %word, "Forwarding explanation request");

    let reply = state
        .upstream
        .generate(api_key, prompt::build_prompt(&word))
        .await?;

    tracing::debug!(
        request_id = %request_id,
        bytes = reply.len(),
        "Upstream reply relayed"
    );

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        reply,
    )
        .into_response())
}

/// Pull a non-empty string `word` out of the request body.
fn extract_word(body: &Value) -> Result<String, ApiError> {
    match body.get("word") {
        Some(Value::String(word)) if !word.trim().is_empty() => Ok(word.clone()),
        Some(Value::String(_)) => Err(ApiError::InvalidRequest(
            "'word' must be a non-empty string".to_string(),
        )),
        Some(_) => Err(ApiError::InvalidRequest(
            "'word' must be a string".to_string(),
        )),
        None => Err(ApiError::InvalidRequest(
            "'word' field is required".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accepts_a_plain_word() {
        assert_eq!(
            extract_word(&json!({ "word": "ephemeral" })).unwrap(),
            "ephemeral"
        );
    }

    #[test]
    fn rejects_missing_empty_and_wrong_types() {
        assert!(extract_word(&json!({})).is_err());
        assert!(extract_word(&json!({ "word": "" })).is_err());
        assert!(extract_word(&json!({ "word": "   " })).is_err());
        assert!(extract_word(&json!({ "word": 42 })).is_err());
        assert!(extract_word(&json!({ "word": { "nested": true } })).is_err());
        assert!(extract_word(&json!({ "word": null })).is_err());
    }
}
