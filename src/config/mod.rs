//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! process environment
//!     → loader.rs (read once, parse & validate)
//!     → RelayConfig (validated, immutable)
//!     → shared via Arc to all subsystems
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; there is no reload path
//! - All fields have defaults so a bare environment still boots
//! - Handlers never read the environment; they see only RelayConfig

pub mod loader;
pub mod schema;

pub use loader::ConfigError;
pub use schema::BasicAuthConfig;
pub use schema::CorsConfig;
pub use schema::RelayConfig;
pub use schema::ServerConfig;
pub use schema::UpstreamConfig;
