//! pgcast type system
//!
//! This crate defines the types shared by both evaluation backends:
//! - SQL data types (`DataType`) with their simple and SQL names
//! - Runtime values (`Value`)
//! - Source type allow-lists and the host engine's cast compatibility rules
//! - Fixed-offset zone ids used to resolve timestamp literals

pub mod coercion;
pub mod type_system;
pub mod value;
pub mod zone;

pub use coercion::*;
pub use type_system::*;
pub use value::*;
pub use zone::*;
