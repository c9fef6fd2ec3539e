//! PostgreSQL-dialect casts for Rust
//!
//! This crate bundles the pgcast workspace:
//! - Boolean and timestamp casts following PostgreSQL's strict input rules
//! - An interpreted backend and a Rust code generation backend that agree on
//!   every value, NULL and error message
//! - Host engine default casts the dialect falls back to
//! - Session configuration and the dialect rewrite and zone resolution passes
//!
//! # Example
//!
//! ```ignore
//! use pgcast::{plan_cast, CastConfig, Literal};
//! use pgcast::types::{DataType, Value};
//!
//! let cast = plan_cast(Literal::new("yes").into_ref(), &DataType::Boolean, &CastConfig::postgres())?;
//! assert_eq!(cast.eval(&[])?, Value::Boolean(true));
//! ```

// Re-export all public APIs from internal crates
pub use pgcast_diagnostics as diagnostics;
pub use pgcast_eval as eval;
pub use pgcast_types as types;

// Convenience re-exports
pub use pgcast_diagnostics::{PgCastError, Result};
pub use pgcast_eval::{
    BoundReference, CastConfig, CastContract, DefaultCast, EvalError, ExprRef, Expression,
    FragmentContext, Literal, PostgresCastToBoolean, PostgresCastToTimestamp, SqlDialect,
    plan_cast, resolve_time_zone, rewrite_cast,
};

// CLI module (only available with cli feature)
#[cfg(feature = "cli")]
pub mod cli;
