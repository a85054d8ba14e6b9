//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum router with both relay routes
//! - Fix the middleware composition order in one place
//! - Share the configuration and outbound client via AppState
//! - Bind server to listener, serve with graceful shutdown

use axum::{
    extract::DefaultBodyLimit,
    middleware::{from_fn, from_fn_with_state},
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::config::RelayConfig;
use crate::http::handlers;
use crate::observability::access_log::access_log_middleware;
use crate::security::basic_auth::basic_auth_middleware;
use crate::security::cors::cors_middleware;
use crate::upstream::openai::relay_openai;

/// Largest request body the relay accepts.
pub const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

/// Application state injected into guards and handlers.
#[derive(Clone)]
pub struct AppState {
    /// Immutable configuration, loaded once at startup.
    pub config: Arc<RelayConfig>,

    /// Outbound client shared by every relay request.
    pub http: reqwest::Client,
}

/// HTTP server for the relay.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: RelayConfig) -> Self {
        let state = AppState {
            config: Arc::new(config),
            http: reqwest::Client::new(),
        };

        let router = Self::build_router(state);
        Self { router }
    }

    /// Build the Axum router with all middleware layers.
    ///
    /// Request order: TraceLayer, CORS guard, body limit, Basic-Auth guard,
    /// access log, then the matched handler. The CORS guard sits outside the
    /// Basic-Auth guard so preflights never need credentials and rejections
    /// still carry CORS headers.
    fn build_router(state: AppState) -> Router {
        Router::new()
            .route("/", get(handlers::index))
            .route("/api/openai", post(relay_openai))
            .with_state(state.clone())
            .layer(from_fn(access_log_middleware))
            .layer(from_fn_with_state(state.clone(), basic_auth_middleware))
            .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
            .layer(from_fn_with_state(state, cors_middleware))
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Wait for shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received");
}
