//! Forwarder for the OpenAI image-generation endpoint.
//!
//! # Responsibilities
//! - Attach the server-side Bearer credential to each outbound call
//! - Pass the caller's JSON payload through byte for byte
//! - Relay the upstream status and body, or map failures to fixed errors
//!
//! # Design Decisions
//! - The payload stays opaque; nothing validates it against the upstream
//!   schema
//! - The full upstream body is buffered before relay; no streaming
//! - No retries, no timeout beyond the transport defaults

use axum::{
    body::Bytes,
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};

use crate::http::server::AppState;

/// `POST /api/openai`: the single proxied operation.
///
/// Every failure path ends in a response; errors never bubble past the
/// request boundary.
pub async fn relay_openai(State(state): State<AppState>, body: Bytes) -> Response {
    let Some(api_key) = state.config.upstream.api_key.as_deref() else {
        tracing::error!("OpenAI API key not configured");
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "OpenAI API key not configured" })),
        )
            .into_response();
    };

    let result = state
        .http
        .post(&state.config.upstream.url)
        .header(header::CONTENT_TYPE, "application/json")
        .bearer_auth(api_key)
        .body(body)
        .send()
        .await;

    let upstream_response = match result {
        Ok(response) => response,
        Err(error) => {
            tracing::error!(error = %error, "OpenAI API request failed");
            return communication_failure();
        }
    };

    let status = upstream_response.status();
    let payload: Value = match upstream_response.json().await {
        Ok(payload) => payload,
        Err(error) => {
            tracing::error!(error = %error, "OpenAI API returned an unreadable body");
            return communication_failure();
        }
    };

    if !status.is_success() {
        tracing::error!(status = %status, body = %payload, "OpenAI API error");
        return (status, Json(payload)).into_response();
    }

    Json(payload).into_response()
}

/// Generic 500 for transport-level failures.
fn communication_failure() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": "Failed to communicate with OpenAI" })),
    )
        .into_response()
}
