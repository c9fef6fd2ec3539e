//! PostgreSQL string rules
//!
//! Strings that do not spell a value of the target type are errors, never
//! NULL.

use pgcast_types::{DataType, Value, ZoneId};

use super::{CastRule, require_zone, zone_binding};
use crate::codegen::{CodegenContext, RUNTIME_CRATE};
use crate::error::{EvalError, EvalResult};
use crate::runtime;

/// `'yes'::boolean`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PostgresStringToBoolean;

impl CastRule for PostgresStringToBoolean {
    fn cast(&self, input: &Value, _zone: Option<&ZoneId>) -> EvalResult<Value> {
        match input {
            Value::Null => Ok(Value::Null),
            Value::String(s) => runtime::string_to_boolean(s).map(Value::Boolean),
            other => Err(EvalError::type_mismatch(&DataType::String, &other.data_type())),
        }
    }

    fn gen_code(
        &self,
        _ctx: &mut dyn CodegenContext,
        input: &str,
        source: &DataType,
        _zone: Option<&ZoneId>,
    ) -> EvalResult<String> {
        if source != &DataType::String {
            return Err(EvalError::type_mismatch(&DataType::String, source));
        }
        Ok(format!(
            "Some({RUNTIME_CRATE}::runtime::string_to_boolean({input})?)"
        ))
    }
}

/// `'2020-01-01'::timestamp`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PostgresStringToTimestamp;

impl CastRule for PostgresStringToTimestamp {
    fn cast(&self, input: &Value, zone: Option<&ZoneId>) -> EvalResult<Value> {
        match input {
            Value::Null => Ok(Value::Null),
            Value::String(s) => {
                runtime::string_to_timestamp(s, require_zone(zone)?).map(Value::Timestamp)
            }
            other => Err(EvalError::type_mismatch(&DataType::String, &other.data_type())),
        }
    }

    fn gen_code(
        &self,
        ctx: &mut dyn CodegenContext,
        input: &str,
        source: &DataType,
        zone: Option<&ZoneId>,
    ) -> EvalResult<String> {
        if source != &DataType::String {
            return Err(EvalError::type_mismatch(&DataType::String, source));
        }
        let zone = zone_binding(ctx, zone)?;
        Ok(format!(
            "Some({RUNTIME_CRATE}::runtime::string_to_timestamp({input}, {zone})?)"
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codegen::FragmentContext;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_boolean_rule() {
        let rule = PostgresStringToBoolean;
        assert_eq!(rule.cast(&Value::string(" t "), None), Ok(Value::Boolean(true)));
        assert_eq!(
            rule.cast(&Value::string("maybe"), None),
            Err(EvalError::invalid_input_syntax("boolean", "maybe"))
        );
        assert!(rule.cast(&Value::Integer(1), None).is_err());
    }

    #[test]
    fn test_boolean_fragment_shape() {
        let mut ctx = FragmentContext::new();
        let code = PostgresStringToBoolean
            .gen_code(&mut ctx, "input_4", &DataType::String, None)
            .unwrap();
        assert_eq!(
            code,
            "Some(::pgcast_eval::runtime::string_to_boolean(input_4)?)"
        );
        assert!(ctx.references().is_empty());
    }

    #[test]
    fn test_timestamp_rule_needs_zone() {
        let rule = PostgresStringToTimestamp;
        assert!(rule.cast(&Value::string("2020-01-01"), None).is_err());
        assert_eq!(
            rule.cast(&Value::string("1970-01-01 00:00:01"), Some(&ZoneId::utc())),
            Ok(Value::Timestamp(1_000_000))
        );
    }

    #[test]
    fn test_timestamp_fragment_shape() {
        let mut ctx = FragmentContext::new();
        let plus2 = ZoneId::parse("+02:00").unwrap();
        let code = PostgresStringToTimestamp
            .gen_code(&mut ctx, "input_4", &DataType::String, Some(&plus2))
            .unwrap();
        assert_eq!(
            code,
            "Some(::pgcast_eval::runtime::string_to_timestamp(input_4, zone_0)?)"
        );
        assert_eq!(
            ctx.references(),
            vec![crate::codegen::ReferenceValue::Zone(plus2)]
        );
    }

    #[test]
    fn test_rules_reject_other_sources() {
        let mut ctx = FragmentContext::new();
        assert!(PostgresStringToBoolean
            .gen_code(&mut ctx, "x", &DataType::Integer, None)
            .is_err());
    }
}
