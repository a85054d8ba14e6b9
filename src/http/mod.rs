//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware pipeline, graceful shutdown)
//!     → security guards (CORS, Basic-Auth)
//!     → observability::access_log
//!     → handlers.rs (GET /) or upstream::openai (POST /api/openai)
//!     → Send to client
//! ```

pub mod handlers;
pub mod server;

pub use server::{AppState, HttpServer};
