//! pgcast evaluation
//!
//! PostgreSQL-dialect casts to boolean and timestamp, each available through
//! two backends that agree on every input:
//!
//! - **Interpreted**: `Expression::eval` converts a row's values directly.
//! - **Generated**: `Expression::gen_code` emits Rust source that calls the
//!   same `truth`, `datetime` and `runtime` routines once compiled.
//!
//! # Example
//!
//! ```ignore
//! use pgcast_eval::{plan_cast, CastConfig, Literal};
//! use pgcast_types::{DataType, Value};
//!
//! let cast = plan_cast(Literal::new(" TRUE ").into_ref(), &DataType::Boolean, &CastConfig::postgres())?;
//! assert_eq!(cast.eval(&[])?, Value::Boolean(true));
//! ```
//!
//! # Architecture
//!
//! - `cast`: the cast expressions and their shared contract
//! - `rules`: per-source conversion rules, dialect overrides over host defaults
//! - `dialect`: configuration, the rewrite pass and zone resolution
//! - `codegen`: the code generation context and fragment helpers

pub mod cast;
pub mod codegen;
pub mod datetime;
pub mod dialect;
pub mod error;
pub mod expression;
pub mod rules;
pub mod runtime;
pub mod truth;

pub use cast::{CastContract, DefaultCast, PostgresCastToBoolean, PostgresCastToTimestamp};
pub use codegen::{CodegenContext, ExprCode, FragmentContext, ReferenceValue};
pub use dialect::{CastConfig, SqlDialect, plan_cast, resolve_time_zone, rewrite_cast};
pub use error::{EvalError, EvalResult};
pub use expression::{BoundReference, ExprRef, Expression, Literal, Row, TimeZoneAware, check_tree};
pub use rules::{CastRule, CastRules};
pub use truth::{TruthValue, classify, normalize};
