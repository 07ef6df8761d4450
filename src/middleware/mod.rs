//! Request extractors and middleware.
//!
//! - [`session`]: per-request database session extractor

pub mod session;
