//! Runtime configuration
//!
//! Read from environment variables at startup. Log filtering uses `RUST_LOG`
//! through `tracing_subscriber::EnvFilter` and is not handled here.

use std::net::SocketAddr;

use thiserror::Error;

/// Address the HTTP API binds to unless `CHILEME_HTTP_ADDR` says otherwise
pub const DEFAULT_HTTP_ADDR: &str = "0.0.0.0:3001";

pub const HTTP_ADDR_VAR: &str = "CHILEME_HTTP_ADDR";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: '{value}' ({reason})")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub http_addr: SocketAddr,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw = lookup(HTTP_ADDR_VAR)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_HTTP_ADDR.to_string());

        let http_addr = raw.parse::<SocketAddr>().map_err(|e| ConfigError::Invalid {
            var: HTTP_ADDR_VAR,
            value: raw.clone(),
            reason: e.to_string(),
        })?;

        Ok(Self { http_addr })
    }
}
