//! # Tillpoint DB
//!
//! Database access for the Tillpoint API.
//!
//! - [`session`]: the [`SessionFactory`] owning the MySQL pool, and the
//!   per-request [`Session`] it hands out
//! - [`schema`]: idempotent database and table creation run at startup
//! - [`options`]: driver options (TLS included) built from [`DatabaseConfig`]
//!
//! # Example
//!
//! ```ignore
//! use tillpoint_config::{DatabaseConfig, PoolConfig};
//! use tillpoint_db::{SessionFactory, ensure_database, init_schema};
//!
//! let config = DatabaseConfig::from_env()?;
//! ensure_database(&config).await?;
//!
//! let sessions = SessionFactory::connect(&config, &PoolConfig::default()).await?;
//! init_schema(&sessions).await?;
//!
//! let mut session = sessions.acquire().await?;
//! sqlx::query("SELECT 1").execute(&mut *session).await?;
//! // `session` goes back to the pool here
//! ```
//!
//! [`DatabaseConfig`]: tillpoint_config::DatabaseConfig

pub mod error;
pub mod options;
pub mod schema;
pub mod session;

pub use error::DbError;
pub use schema::{TABLES, ensure_database, ensure_database_with, init_schema, list_tables};
pub use session::{Session, SessionFactory, SessionStats};

// Re-export the driver so dependents agree on one version
pub use sqlx;
