//! pgcast diagnostics and error handling
//!
//! This crate provides the error handling infrastructure shared by the pgcast
//! crates: structured error codes, error categories, and diagnostic reporting.

mod error;
mod error_code;

pub use error::*;
pub use error_code::*;

/// Result type for pgcast operations
pub type Result<T> = std::result::Result<T, PgCastError>;
