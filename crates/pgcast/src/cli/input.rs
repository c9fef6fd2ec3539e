//! Command-line input parsing
//!
//! Turns the textual cast operands given on the command line into typed
//! expressions.

use anyhow::{Context, Result, anyhow, bail};
use chrono::NaiveDate;
use pgcast_eval::{BoundReference, ExprRef, Literal};
use pgcast_types::{DataType, Value, ZoneId};
use rust_decimal::Decimal;

/// Parse a type name such as `boolean`, `int` or `array<string>`
pub fn parse_type(name: &str) -> Result<DataType> {
    name.parse::<DataType>().map_err(|e| anyhow!(e))
}

/// Parse `text` as a value of `data_type`
pub fn parse_value(text: &str, data_type: &DataType) -> Result<Value> {
    let value = match data_type {
        DataType::Null => Value::Null,
        DataType::String => Value::string(text),
        DataType::Boolean => Value::Boolean(
            text.parse()
                .with_context(|| format!("'{}' is not a boolean literal", text))?,
        ),
        DataType::Integer => Value::Integer(
            text.parse()
                .with_context(|| format!("'{}' is not an int", text))?,
        ),
        DataType::Long => Value::Long(
            text.parse()
                .with_context(|| format!("'{}' is not a bigint", text))?,
        ),
        DataType::Double => Value::Double(
            text.parse()
                .with_context(|| format!("'{}' is not a double", text))?,
        ),
        DataType::Decimal => Value::Decimal(
            text.parse::<Decimal>()
                .with_context(|| format!("'{}' is not a decimal", text))?,
        ),
        DataType::Date => Value::Date(
            NaiveDate::parse_from_str(text, "%Y-%m-%d")
                .with_context(|| format!("'{}' is not a yyyy-mm-dd date", text))?,
        ),
        DataType::Timestamp => Value::Timestamp(
            pgcast_eval::datetime::parse_timestamp(text, &ZoneId::utc())
                .ok_or_else(|| anyhow!("'{}' is not a timestamp", text))?,
        ),
        DataType::Array(_) => bail!("array literals are not supported on the command line"),
    };
    Ok(value)
}

/// Literal operand of `data_type`, or its typed NULL
pub fn literal(text: Option<&str>, data_type: &DataType) -> Result<ExprRef> {
    let literal = match text {
        Some(text) => Literal::typed(parse_value(text, data_type)?, data_type.clone())?,
        None => Literal::null(data_type.clone()),
    };
    Ok(literal.into_ref())
}

/// Nullable input column of `data_type`
pub fn column(data_type: &DataType) -> ExprRef {
    BoundReference::new(0, data_type.clone(), true)
        .named("input")
        .into_ref()
}
