//! Authenticated relay for the OpenAI image-generation endpoint.

pub mod config;
pub mod http;
pub mod observability;
pub mod security;
pub mod upstream;

pub use config::schema::RelayConfig;
pub use http::HttpServer;
