//! Plain HTTP handlers outside the proxied path.

use axum::Json;
use serde::Serialize;

/// Service descriptor returned by the root endpoint.
#[derive(Serialize)]
pub struct ServiceDescriptor {
    pub message: &'static str,
    pub endpoints: EndpointIndex,
}

/// Routes the relay exposes.
#[derive(Serialize)]
pub struct EndpointIndex {
    pub openai: &'static str,
}

/// `GET /`: describe the relay and its proxied route.
pub async fn index() -> Json<ServiceDescriptor> {
    Json(ServiceDescriptor {
        message: "mabl-cosme API server",
        endpoints: EndpointIndex {
            openai: "POST /api/openai",
        },
    })
}
