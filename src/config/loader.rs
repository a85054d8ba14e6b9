//! Configuration loading from the process environment.
//!
//! The environment is read exactly once, in `main`, producing an immutable
//! [`RelayConfig`]. Empty values are treated as unset so that
//! `BASIC_AUTH_USERNAME=""` behaves the same as leaving the variable out.

use std::env;

use thiserror::Error;

use crate::config::schema::RelayConfig;

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// `PORT` was set but is not a valid TCP port number.
    #[error("invalid PORT '{value}': {source}")]
    InvalidPort {
        value: String,
        source: std::num::ParseIntError,
    },

    /// `OPENAI_API_URL` was set but is not an absolute URL.
    #[error("invalid OPENAI_API_URL '{value}': {source}")]
    InvalidUpstreamUrl {
        value: String,
        source: url::ParseError,
    },
}

impl RelayConfig {
    /// Build the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable lookup.
    ///
    /// `from_env` delegates here; tests supply a closure over a map instead
    /// of mutating process-global state.
    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = RelayConfig::default();

        if let Some(value) = non_empty(get("PORT")) {
            config.server.port = value
                .parse()
                .map_err(|source| ConfigError::InvalidPort {
                    value: value.clone(),
                    source,
                })?;
        }

        if let Some(value) = non_empty(get("OPENAI_API_URL")) {
            url::Url::parse(&value).map_err(|source| ConfigError::InvalidUpstreamUrl {
                value: value.clone(),
                source,
            })?;
            config.upstream.url = value;
        }

        config.upstream.api_key = non_empty(get("OPENAI_API_KEY"));
        config.basic_auth.username = non_empty(get("BASIC_AUTH_USERNAME"));
        config.basic_auth.password = non_empty(get("BASIC_AUTH_PASSWORD"));

        if let Some(value) = non_empty(get("CORS_ALLOWED_ORIGINS")) {
            let origins = split_origins(&value);
            if !origins.is_empty() {
                config.cors.allowed_origins = origins;
            }
        }

        Ok(config)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.is_empty())
}

/// Split a comma-separated origin list, trimming entries and dropping blanks.
fn split_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(String::from)
        .collect()
}
