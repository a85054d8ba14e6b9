//! Relay access log.
//!
//! # Responsibilities
//! - Emit one line per request under the proxied path prefix
//! - Never block, fail, or alter the request or response

use axum::{body::Body, http::Request, middleware::Next, response::Response};

/// Paths logged by the access log.
const LOGGED_PREFIX: &str = "/api/";

/// Record method and path for relay traffic before handing off.
pub async fn access_log_middleware(request: Request<Body>, next: Next) -> Response {
    let path = request.uri().path();
    if path.starts_with(LOGGED_PREFIX) {
        tracing::info!(method = %request.method(), path = %path, "Relay request");
    }

    next.run(request).await
}
