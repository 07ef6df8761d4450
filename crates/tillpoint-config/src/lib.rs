//! # Tillpoint Config
//!
//! Configuration types for the Tillpoint API.
//!
//! Every structure here is loaded once at startup from environment variables
//! and then passed around explicitly:
//!
//! - [`database`]: MySQL connection parameters and connection string building
//! - [`cors`]: CORS (Cross-Origin Resource Sharing) configuration
//! - [`server`]: HTTP bind address and connection pool sizing
//!
//! Each loader has a `from_env()` constructor and a `from_lookup()`
//! constructor taking any `Fn(&str) -> Option<String>`, so tests can feed a
//! plain map instead of mutating the process environment.
//!
//! # Example
//!
//! ```ignore
//! use tillpoint_config::{CorsConfig, DatabaseConfig, ServerConfig};
//!
//! let database = DatabaseConfig::from_env()?;
//! let server = ServerConfig::from_env()?;
//! let cors = CorsConfig::from_env();
//!
//! println!("connecting to {}:{}", database.host, database.port);
//! ```

pub mod cors;
pub mod database;
pub mod error;
pub mod server;

mod env;

// Re-export commonly used types at crate root
pub use cors::CorsConfig;
pub use database::DatabaseConfig;
pub use error::ConfigError;
pub use server::{PoolConfig, ServerConfig};
