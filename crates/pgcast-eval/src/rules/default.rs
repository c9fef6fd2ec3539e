//! Host engine casts
//!
//! With ANSI mode off, malformed strings become NULL; with it on they fail
//! the same way the PostgreSQL casts do.

use pgcast_types::{DataType, Value, ZoneId};

use super::{CastRule, require_zone, zone_binding};
use crate::codegen::{CodegenContext, RUNTIME_CRATE};
use crate::datetime;
use crate::error::{EvalError, EvalResult};
use crate::runtime;
use crate::truth;

/// Default conversion of anything to boolean
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DefaultBooleanCast {
    ansi_enabled: bool,
}

impl DefaultBooleanCast {
    pub fn new(ansi_enabled: bool) -> Self {
        Self { ansi_enabled }
    }

    pub fn ansi_enabled(&self) -> bool {
        self.ansi_enabled
    }
}

impl CastRule for DefaultBooleanCast {
    fn cast(&self, input: &Value, _zone: Option<&ZoneId>) -> EvalResult<Value> {
        Ok(match input {
            Value::Null => Value::Null,
            Value::Boolean(b) => Value::Boolean(*b),
            Value::Integer(i) => Value::Boolean(*i != 0),
            Value::Long(l) => Value::Boolean(*l != 0),
            Value::Double(d) => Value::Boolean(*d != 0.0),
            Value::Decimal(d) => Value::Boolean(!d.is_zero()),
            Value::String(s) if self.ansi_enabled => Value::Boolean(runtime::string_to_boolean(s)?),
            Value::String(s) => truth::classify(s).as_bool().into(),
            Value::Date(_) => Value::Null,
            other => {
                return Err(EvalError::unsupported_cast(
                    &other.data_type(),
                    &DataType::Boolean,
                ));
            }
        })
    }

    fn gen_code(
        &self,
        _ctx: &mut dyn CodegenContext,
        input: &str,
        source: &DataType,
        _zone: Option<&ZoneId>,
    ) -> EvalResult<String> {
        Ok(match source {
            DataType::Null | DataType::Date => "None".to_string(),
            DataType::Boolean => format!("Some(*{input})"),
            DataType::Integer | DataType::Long => format!("Some(*{input} != 0)"),
            DataType::Double => format!("Some(*{input} != 0.0)"),
            DataType::Decimal => format!("Some(!{input}.is_zero())"),
            DataType::String if self.ansi_enabled => {
                format!("Some({RUNTIME_CRATE}::runtime::string_to_boolean({input})?)")
            }
            DataType::String => format!("{RUNTIME_CRATE}::truth::classify({input}).as_bool()"),
            other => return Err(EvalError::unsupported_cast(other, &DataType::Boolean)),
        })
    }
}

/// Default conversion of anything to timestamp
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DefaultTimestampCast {
    ansi_enabled: bool,
}

impl DefaultTimestampCast {
    pub fn new(ansi_enabled: bool) -> Self {
        Self { ansi_enabled }
    }

    pub fn ansi_enabled(&self) -> bool {
        self.ansi_enabled
    }
}

impl CastRule for DefaultTimestampCast {
    fn cast(&self, input: &Value, zone: Option<&ZoneId>) -> EvalResult<Value> {
        Ok(match input {
            Value::Null => Value::Null,
            Value::Timestamp(t) => Value::Timestamp(*t),
            Value::Long(seconds) => Value::Timestamp(runtime::seconds_to_timestamp(*seconds)),
            Value::Date(d) => Value::Timestamp(runtime::date_to_timestamp(*d, require_zone(zone)?)),
            Value::String(s) if self.ansi_enabled => {
                Value::Timestamp(runtime::string_to_timestamp(s, require_zone(zone)?)?)
            }
            Value::String(s) => datetime::parse_timestamp(s, require_zone(zone)?)
                .map(Value::Timestamp)
                .unwrap_or(Value::Null),
            other => {
                return Err(EvalError::unsupported_cast(
                    &other.data_type(),
                    &DataType::Timestamp,
                ));
            }
        })
    }

    fn gen_code(
        &self,
        ctx: &mut dyn CodegenContext,
        input: &str,
        source: &DataType,
        zone: Option<&ZoneId>,
    ) -> EvalResult<String> {
        Ok(match source {
            DataType::Null => "None".to_string(),
            DataType::Timestamp => format!("Some(*{input})"),
            DataType::Long => {
                format!("Some({RUNTIME_CRATE}::runtime::seconds_to_timestamp(*{input}))")
            }
            DataType::Date => {
                let zone = zone_binding(ctx, zone)?;
                format!("Some({RUNTIME_CRATE}::runtime::date_to_timestamp(*{input}, {zone}))")
            }
            DataType::String if self.ansi_enabled => {
                let zone = zone_binding(ctx, zone)?;
                format!("Some({RUNTIME_CRATE}::runtime::string_to_timestamp({input}, {zone})?)")
            }
            DataType::String => {
                let zone = zone_binding(ctx, zone)?;
                format!("{RUNTIME_CRATE}::datetime::parse_timestamp({input}, {zone})")
            }
            other => return Err(EvalError::unsupported_cast(other, &DataType::Timestamp)),
        })
    }
}
