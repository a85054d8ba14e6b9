//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the relay.
//! All types derive Serde traits; every field has a default so a bare
//! environment yields a runnable (if unauthenticated) server.

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

/// Upstream endpoint the Forwarder posts to when no override is configured.
pub const DEFAULT_UPSTREAM_URL: &str = "https://api.openai.com/v1/images/generations";

/// Origin allowed to call the relay from a browser when no allow-list is
/// configured.
pub const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:5173";

const DEFAULT_PORT: u16 = 3000;

/// Root configuration for the relay.
///
/// Constructed once at startup (see `config::loader`) and shared read-only
/// with every component; nothing reads the process environment after boot.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct RelayConfig {
    /// Listener settings (bind port).
    pub server: ServerConfig,

    /// Upstream endpoint and credential.
    pub upstream: UpstreamConfig,

    /// Optional Basic-Auth gate applied to every route.
    pub basic_auth: BasicAuthConfig,

    /// CORS origin allow-list.
    pub cors: CorsConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    /// TCP port to listen on, all interfaces.
    pub port: u16,
}

impl ServerConfig {
    /// Bind address derived from the configured port.
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { port: DEFAULT_PORT }
    }
}

/// Upstream (image-generation endpoint) configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct UpstreamConfig {
    /// Endpoint URL the Forwarder posts to.
    pub url: String,

    /// Bearer credential attached to every outbound call. When unset the
    /// Forwarder rejects every relay request with a 500.
    pub api_key: Option<String>,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_UPSTREAM_URL.to_string(),
            api_key: None,
        }
    }
}

/// Basic-Auth gate configuration.
///
/// The gate is active only when BOTH values are present; a lone username or
/// password leaves every request unauthenticated.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct BasicAuthConfig {
    /// Expected username.
    pub username: Option<String>,

    /// Expected password.
    pub password: Option<String>,
}

impl BasicAuthConfig {
    /// The configured credential pair, if the gate is active.
    pub fn credentials(&self) -> Option<(&str, &str)> {
        match (self.username.as_deref(), self.password.as_deref()) {
            (Some(username), Some(password)) => Some((username, password)),
            _ => None,
        }
    }

    /// Whether the gate rejects unauthenticated requests.
    pub fn enabled(&self) -> bool {
        self.credentials().is_some()
    }
}

/// CORS configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CorsConfig {
    /// Origins whose requests receive permissive CORS headers. Matching is
    /// exact (scheme, host, and port as sent by the browser).
    pub allowed_origins: Vec<String>,
}

impl CorsConfig {
    /// Returns true if the given `Origin` header value is on the allow-list.
    pub fn allows(&self, origin: &str) -> bool {
        self.allowed_origins.iter().any(|allowed| allowed == origin)
    }
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec![DEFAULT_ALLOWED_ORIGIN.to_string()],
        }
    }
}
