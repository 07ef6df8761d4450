//! # Tillpoint API
//!
//! A point-of-sale backend built with Rust, Axum, and MySQL. It exposes
//! users, a product catalogue and sales transactions over a small REST API.
//!
//! ## Architecture
//!
//! ```text
//! src/
//! ├── config/           # AppConfig, assembled from tillpoint-config
//! ├── middleware/       # Per-request database session extractor
//! ├── modules/          # Feature modules
//! │   ├── health/      # Welcome message and database health check
//! │   ├── users/       # User accounts
//! │   ├── products/    # Product catalogue
//! │   └── transactions/ # Sales with line items
//! ├── cli.rs            # `serve` and `init-db` subcommands
//! ├── docs.rs           # OpenAPI document
//! ├── logging.rs        # Subscriber setup and request logging
//! ├── router.rs         # Routes, CORS, tracing layers
//! ├── state.rs          # AppState and startup sequence
//! └── validator.rs      # ValidatedJson extractor
//! ```
//!
//! Each feature module follows a consistent structure:
//!
//! - `mod.rs`: Module exports
//! - `controller.rs`: HTTP handlers (routes)
//! - `service.rs`: Database access
//! - `router.rs`: Axum router configuration
//!
//! ## Request lifecycle
//!
//! Startup validates configuration, creates the database if missing, opens
//! the connection pool and creates missing tables; any failure stops the
//! process. Afterwards every request that touches the database takes a
//! [`middleware::session::DbSession`] extractor, which checks one connection
//! out of the pool for that request alone and returns it when the handler
//! finishes, successfully or not.
//!
//! ## Quick Start
//!
//! ```bash
//! DB_HOST=localhost
//! DB_PORT=3306
//! DB_NAME=pos
//! DB_USER=pos
//! DB_PASSWORD='p@ss/word'
//! ALLOWED_ORIGINS=http://localhost:3000
//! ```
//!
//! When the server is running, API documentation is available at:
//!
//! - Swagger UI: `http://localhost:8000/swagger-ui`
//! - Scalar: `http://localhost:8000/scalar`

pub mod cli;
pub mod config;
pub mod docs;
pub mod logging;
pub mod middleware;
pub mod modules;
pub mod router;
pub mod state;
pub mod validator;

// Re-export workspace crates for convenience
pub use tillpoint_config;
pub use tillpoint_core;
pub use tillpoint_db;
pub use tillpoint_models;
