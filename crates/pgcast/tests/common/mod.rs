//! Common test utilities for the pgcast facade
//!
//! Shared helpers for planning casts under a session configuration and
//! evaluating them over single-column rows.

use pgcast::types::{DataType, Value};
use pgcast::{BoundReference, CastConfig, EvalError, ExprRef, Expression, SqlDialect, plan_cast};

/// PostgreSQL session pinned to `zone`
pub fn postgres_session(zone: &str) -> CastConfig {
    CastConfig {
        dialect: SqlDialect::PostgreSql,
        ansi_enabled: false,
        session_time_zone: zone.to_string(),
    }
}

/// Nullable column 0 of `data_type`
pub fn column(data_type: DataType) -> ExprRef {
    BoundReference::new(0, data_type, true).named("c").into_ref()
}

/// Plan a cast of column 0 and evaluate it over `value`
pub fn cast_value(
    config: &CastConfig,
    source: DataType,
    target: DataType,
    value: Value,
) -> Result<Value, EvalError> {
    let cast = plan_cast(column(source), &target, config)?;
    cast.eval(&[value])
}
