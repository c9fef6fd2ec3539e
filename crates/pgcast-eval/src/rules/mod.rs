//! Per-source cast rules
//!
//! A cast looks up the rule for its child's declared type in a `CastRules`
//! table. Dialects register overrides for the sources they treat
//! differently; every other source falls through to the host default rule.

mod default;
mod postgres;

pub use default::{DefaultBooleanCast, DefaultTimestampCast};
pub use postgres::{PostgresStringToBoolean, PostgresStringToTimestamp};

use pgcast_types::{DataType, Value, ZoneId};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::codegen::{CodegenContext, ReferenceValue};
use crate::error::{EvalError, EvalResult};

/// Conversion of non-null values of one source type
pub trait CastRule: fmt::Debug + Send + Sync {
    /// Convert `input`; NULL outputs are allowed for permissive rules
    fn cast(&self, input: &Value, zone: Option<&ZoneId>) -> EvalResult<Value>;

    /// Emit an expression of type `Option<T>` converting `input`
    ///
    /// `input` names a `&S` binding, where `S` is the Rust type of `source`.
    fn gen_code(
        &self,
        ctx: &mut dyn CodegenContext,
        input: &str,
        source: &DataType,
        zone: Option<&ZoneId>,
    ) -> EvalResult<String>;
}

/// Rule lookup keyed by source type
#[derive(Debug, Clone)]
pub struct CastRules {
    target: DataType,
    overrides: HashMap<DataType, Arc<dyn CastRule>>,
    fallback: Arc<dyn CastRule>,
}

impl CastRules {
    /// Table where every source uses `fallback`
    pub fn new(target: DataType, fallback: Arc<dyn CastRule>) -> Self {
        Self {
            target,
            overrides: HashMap::new(),
            fallback,
        }
    }

    /// Replace the rule for one source type
    pub fn with_override(mut self, source: DataType, rule: Arc<dyn CastRule>) -> Self {
        self.overrides.insert(source, rule);
        self
    }

    /// Host rules for `target`
    pub fn host(target: &DataType, ansi_enabled: bool) -> EvalResult<Self> {
        match target {
            DataType::Boolean => Ok(Self::new(
                DataType::Boolean,
                Arc::new(DefaultBooleanCast::new(ansi_enabled)),
            )),
            DataType::Timestamp => Ok(Self::new(
                DataType::Timestamp,
                Arc::new(DefaultTimestampCast::new(ansi_enabled)),
            )),
            other => Err(EvalError::internal(format!(
                "no cast rules target {}",
                other
            ))),
        }
    }

    /// PostgreSQL boolean rules: strict strings, host rules otherwise
    pub fn postgres_boolean() -> Self {
        Self::new(DataType::Boolean, Arc::new(DefaultBooleanCast::new(false)))
            .with_override(DataType::String, Arc::new(PostgresStringToBoolean))
    }

    /// PostgreSQL timestamp rules: strict strings, host rules otherwise
    pub fn postgres_timestamp() -> Self {
        Self::new(
            DataType::Timestamp,
            Arc::new(DefaultTimestampCast::new(false)),
        )
        .with_override(DataType::String, Arc::new(PostgresStringToTimestamp))
    }

    pub fn target(&self) -> &DataType {
        &self.target
    }

    /// Rule for values declared as `source`
    pub fn rule_for(&self, source: &DataType) -> &dyn CastRule {
        self.overrides
            .get(source)
            .map(Arc::as_ref)
            .unwrap_or(self.fallback.as_ref())
    }

    /// Whether `source` has a dialect override
    pub fn is_overridden(&self, source: &DataType) -> bool {
        self.overrides.contains_key(source)
    }
}

fn require_zone(zone: Option<&ZoneId>) -> EvalResult<&ZoneId> {
    zone.ok_or_else(|| EvalError::internal("timestamp rule invoked without a zone"))
}

/// Register `zone` with the context, returning its `&ZoneId` binding
fn zone_binding(ctx: &mut dyn CodegenContext, zone: Option<&ZoneId>) -> EvalResult<String> {
    let zone = require_zone(zone)?;
    Ok(ctx.add_reference("zone", ReferenceValue::Zone(zone.clone())))
}
