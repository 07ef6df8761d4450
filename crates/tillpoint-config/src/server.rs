//! HTTP server and connection pool settings.
//!
//! # Environment Variables
//!
//! - `APP_HOST`: address to bind (default: `0.0.0.0`)
//! - `APP_PORT`: port to bind (default: `8000`)
//! - `DB_MAX_CONNECTIONS`: upper bound on pooled connections (default: `10`)
//! - `DB_ACQUIRE_TIMEOUT_SECS`: how long a request waits for a free
//!   connection before failing (default: `30`)

use std::env;
use std::time::Duration;

use crate::env::{non_blank, parse_or};
use crate::error::ConfigError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Ok(Self {
            host: non_blank(&lookup, "APP_HOST")
                .map(|h| h.trim().to_string())
                .unwrap_or(defaults.host),
            port: parse_or(&lookup, "APP_PORT", defaults.port)?,
        })
    }

    /// `host:port` suitable for `TcpListener::bind`.
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Sizing of the database connection pool.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PoolConfig {
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            max_connections: 10,
            acquire_timeout: Duration::from_secs(30),
        }
    }
}

impl PoolConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let max_connections = parse_or(&lookup, "DB_MAX_CONNECTIONS", defaults.max_connections)?;
        if max_connections == 0 {
            return Err(ConfigError::Invalid {
                var: "DB_MAX_CONNECTIONS",
                value: "0".to_string(),
                reason: "pool needs at least one connection".to_string(),
            });
        }

        let acquire_timeout = parse_or(
            &lookup,
            "DB_ACQUIRE_TIMEOUT_SECS",
            defaults.acquire_timeout.as_secs(),
        )
        .map(Duration::from_secs)?;

        Ok(Self {
            max_connections,
            acquire_timeout,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_defaults() {
        let config = ServerConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.bind_address(), "0.0.0.0:8000");
    }

    #[test]
    fn test_server_overrides() {
        let config = ServerConfig::from_lookup(|key| match key {
            "APP_HOST" => Some("127.0.0.1".to_string()),
            "APP_PORT" => Some("9090".to_string()),
            _ => None,
        })
        .unwrap();
        assert_eq!(config.bind_address(), "127.0.0.1:9090");
    }

    #[test]
    fn test_server_invalid_port() {
        let err = ServerConfig::from_lookup(|key| {
            (key == "APP_PORT").then(|| "70000".to_string())
        })
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { var: "APP_PORT", .. }));
    }

    #[test]
    fn test_pool_defaults() {
        let config = PoolConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config.max_connections, 10);
        assert_eq!(config.acquire_timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_pool_rejects_zero_connections() {
        let err = PoolConfig::from_lookup(|key| {
            (key == "DB_MAX_CONNECTIONS").then(|| "0".to_string())
        })
        .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                var: "DB_MAX_CONNECTIONS",
                ..
            }
        ));
    }
}
