//! Server configuration parsed from environment variables.
//!
//! Leptos site settings (`LEPTOS_SITE_ROOT`, `LEPTOS_SITE_ADDR`, ...) are read
//! by `leptos::config::get_configuration`. This module only covers the
//! host-level overrides layered on top.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::SocketAddr;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT value: {0:?}")]
    InvalidPort(String),
    #[error("leptos configuration: {0}")]
    Leptos(String),
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },
    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    /// Overrides the port from the Leptos site address.
    pub port: Option<u16>,
    /// Gzip responses (`COMPRESS`, default on).
    pub compress: bool,
}

impl ServerConfig {
    /// Build config from the process environment.
    ///
    /// Optional:
    /// - `PORT`: listen port override
    /// - `COMPRESS`: `1/true/yes/on` or `0/false/no/off`, default on
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPort`] if `PORT` is set but not a valid port.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("PORT") {
            Some(raw) if !raw.trim().is_empty() => {
                Some(raw.trim().parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw.clone()))?)
            }
            _ => None,
        };
        let compress = lookup("COMPRESS").as_deref().and_then(parse_bool).unwrap_or(true);
        Ok(Self { port, compress })
    }

    /// Apply the port override to the Leptos site address.
    pub fn listen_addr(&self, site_addr: SocketAddr) -> SocketAddr {
        match self.port {
            Some(port) => SocketAddr::new(site_addr.ip(), port),
            None => site_addr,
        }
    }
}

pub(crate) fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
