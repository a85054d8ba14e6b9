//! CORS guard.
//!
//! # Responsibilities
//! - Echo the three permissive CORS headers for allow-listed origins
//! - Terminate `OPTIONS` preflight requests with an empty 200
//! - Leave every other request untouched
//!
//! # Design Decisions
//! - The allow-origin header echoes the request origin exactly; no wildcard
//! - An origin off the allow-list gets no CORS headers and no error status;
//!   the browser enforces the rejection client-side
//! - Preflight answers 200 unconditionally, headers only when the origin
//!   is allowed

use axum::{
    body::Body,
    extract::State,
    http::{header, HeaderValue, Method, Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::http::server::AppState;

/// Value of `Access-Control-Allow-Methods` for allowed origins.
const ALLOW_METHODS: &str = "GET, POST, OPTIONS";

/// Value of `Access-Control-Allow-Headers` for allowed origins.
const ALLOW_HEADERS: &str = "Content-Type, Authorization";

/// Outermost guard of the relay pipeline.
///
/// Runs ahead of the Basic-Auth guard so that preflight requests, which
/// carry no credentials, never reach it. Responses produced further down
/// the pipeline (including 401 rejections) pick up the CORS headers on the
/// way back out.
pub async fn cors_middleware(
    State(state): State<AppState>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let allowed_origin = request
        .headers()
        .get(header::ORIGIN)
        .and_then(|value| value.to_str().ok())
        .filter(|origin| state.config.cors.allows(origin))
        .and_then(|origin| HeaderValue::from_str(origin).ok());

    let mut response = if request.method() == Method::OPTIONS {
        // Preflight: stop here with an empty 200.
        StatusCode::OK.into_response()
    } else {
        next.run(request).await
    };

    if let Some(origin) = allowed_origin {
        let headers = response.headers_mut();
        headers.insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, origin);
        headers.insert(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static(ALLOW_METHODS),
        );
        headers.insert(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static(ALLOW_HEADERS),
        );
    }

    response
}
