//! Application configuration.
//!
//! Collects the per-concern configuration types from [`tillpoint_config`]
//! into one [`AppConfig`] that is validated once at startup and then passed
//! down explicitly.
//!
//! # Environment Variables
//!
//! See [`tillpoint_config::database`] and [`tillpoint_config::server`] for the
//! variable names and their defaults. A `.env` file in the working directory
//! is loaded first if present.

pub use tillpoint_config::{ConfigError, CorsConfig, DatabaseConfig, PoolConfig, ServerConfig};

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub database: DatabaseConfig,
    pub pool: PoolConfig,
    pub server: ServerConfig,
    pub cors: CorsConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            database: DatabaseConfig::from_env()?,
            pool: PoolConfig::from_env()?,
            server: ServerConfig::from_env()?,
            cors: CorsConfig::from_env(),
        })
    }
}
