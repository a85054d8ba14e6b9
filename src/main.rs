//! mabl-cosme API relay
//!
//! An authenticated relay in front of the OpenAI image-generation endpoint,
//! built with Tokio and Axum. Browser clients talk to this server; this
//! server holds the API key.
//!
//! # Architecture Overview
//!
//! ```text
//!                      ┌──────────────────────────────────────────────────┐
//!                      │                     RELAY                        │
//!                      │                                                  │
//!     Client Request   │  ┌──────┐   ┌────────────┐   ┌──────────────┐   │
//!     ─────────────────┼─▶│ CORS │──▶│ Basic-Auth │──▶│  access log  │   │
//!                      │  │guard │   │   guard    │   └──────┬───────┘   │
//!                      │  └──┬───┘   └─────┬──────┘          │           │
//!                      │     │             │                 ▼           │
//!                      │  OPTIONS:       401 on       ┌──────────────┐   │      OpenAI
//!                      │  200 empty      mismatch     │  forwarder   │◀──┼────▶ images
//!                      │                              │ (/api/openai)│   │      endpoint
//!     Client Response  │                              └──────────────┘   │
//!     ◀────────────────┼──────────────────────────────────────────────── │
//!                      │                                                  │
//!                      │  Cross-cutting: config (env, read once),         │
//!                      │  tracing + TraceLayer, graceful shutdown         │
//!                      └──────────────────────────────────────────────────┘
//! ```

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mabl_cosme_api::config::RelayConfig;
use mabl_cosme_api::http::HttpServer;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mabl_cosme_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "mabl-cosme-api starting");

    // Read the environment exactly once; handlers only ever see RelayConfig.
    let config = RelayConfig::from_env()?;

    tracing::info!(
        port = config.server.port,
        basic_auth_enabled = config.basic_auth.enabled(),
        api_key_configured = config.upstream.api_key.is_some(),
        "Configuration loaded"
    );

    // Bind TCP listener
    let listener = TcpListener::bind(config.server.socket_addr()).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        "Listening for connections"
    );

    // Create and run HTTP server
    let server = HttpServer::new(config);
    server.run(listener).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
