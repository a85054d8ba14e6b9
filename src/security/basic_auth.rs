//! Basic-Auth access guard.
//!
//! # Responsibilities
//! - Pass every request through when no credential pair is configured
//! - Otherwise require `Authorization: Basic <base64(username:password)>`
//! - Answer rejections with 401 and a `WWW-Authenticate` challenge
//!
//! # Design Decisions
//! - A missing or non-`Basic` header is distinguished from a decodable but
//!   wrong credential in the response body
//! - The decoded payload splits on the first `:`; later colons belong to
//!   the password
//! - Matching is exact, case-sensitive, untrimmed

use axum::{
    body::Body,
    extract::State,
    http::{header, HeaderValue, Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::http::server::AppState;

/// Challenge sent with every 401 produced by this guard.
const CHALLENGE: &str = "Basic realm=\"mabl-cosme-api\"";

/// Credential gate applied to every route.
///
/// The guard is a no-op unless both a username and a password are
/// configured. On rejection the pipeline terminates here; the relay
/// handler is never invoked.
pub async fn basic_auth_middleware(
    State(state): State<AppState>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let Some((username, password)) = state.config.basic_auth.credentials() else {
        return next.run(request).await;
    };

    let encoded = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Basic "));

    let Some(encoded) = encoded else {
        return challenge("Authentication required");
    };

    match decode_credentials(encoded) {
        Some((ref user, ref pass)) if user == username && pass == password => {
            next.run(request).await
        }
        _ => challenge("Invalid credentials"),
    }
}

/// Decode a base64 `username:password` pair.
///
/// Returns `None` for invalid base64, non-UTF-8 payloads, or payloads
/// without a colon; the caller treats all of those as a mismatch.
fn decode_credentials(encoded: &str) -> Option<(String, String)> {
    let decoded = STANDARD.decode(encoded).ok()?;
    let text = String::from_utf8(decoded).ok()?;
    let (username, password) = text.split_once(':')?;
    Some((username.to_string(), password.to_string()))
}

/// Build the 401 rejection carrying the challenge header.
fn challenge(message: &'static str) -> Response {
    let mut response = (StatusCode::UNAUTHORIZED, message).into_response();
    response
        .headers_mut()
        .insert(header::WWW_AUTHENTICATE, HeaderValue::from_static(CHALLENGE));
    response
}
