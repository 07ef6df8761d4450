//! # Tillpoint Core
//!
//! Foundational types shared by every Tillpoint crate.
//!
//! - [`errors`]: the [`AppError`] type handlers return, with conversion into
//!   an HTTP response of the form `{"error": "..."}`
//!
//! # Example
//!
//! ```ignore
//! use tillpoint_core::AppError;
//!
//! let error = AppError::not_found(anyhow::anyhow!("User not found"));
//! ```

pub mod errors;

pub use errors::{AppError, ErrorResponse};
