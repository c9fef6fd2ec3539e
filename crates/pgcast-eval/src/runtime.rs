//! Routines shared by both evaluation backends
//!
//! The interpreted rules call these directly; generated fragments reach them
//! through `::pgcast_eval::runtime::*`. Anything that can fail for a given
//! value lives here or in `truth`/`datetime`, never in emitted text.

use chrono::NaiveDate;
use pgcast_types::{DataType, Value, ZoneId};
use rust_decimal::Decimal;

use crate::codegen::ReferenceValue;
use crate::datetime;
use crate::error::{EvalError, EvalResult};
use crate::truth::{self, TruthValue};

/// Strict PostgreSQL string to boolean
pub fn string_to_boolean(s: &str) -> EvalResult<bool> {
    match truth::classify(s) {
        TruthValue::True => Ok(true),
        TruthValue::False => Ok(false),
        TruthValue::Invalid => Err(EvalError::invalid_input_syntax(
            "boolean",
            truth::normalize(s),
        )),
    }
}

/// Strict PostgreSQL string to timestamp micros
///
/// The error carries the raw string, untrimmed.
pub fn string_to_timestamp(s: &str, zone: &ZoneId) -> EvalResult<i64> {
    datetime::parse_timestamp(s, zone)
        .ok_or_else(|| EvalError::invalid_input_syntax("timestamp", s))
}

/// Midnight of `date` in `zone`
pub fn date_to_timestamp(date: NaiveDate, zone: &ZoneId) -> i64 {
    datetime::date_to_micros(date, zone)
}

/// Epoch seconds to micros, saturating at the `i64` bounds
pub fn seconds_to_timestamp(seconds: i64) -> i64 {
    seconds.saturating_mul(1_000_000)
}

/// Column `ordinal` of `row`, checked against its declared type
///
/// Nulls are accepted for every declared type.
pub fn column<'a>(row: &'a [Value], ordinal: usize, declared: &DataType) -> EvalResult<&'a Value> {
    let value = row.get(ordinal).ok_or(EvalError::ColumnOutOfBounds {
        ordinal,
        length: row.len(),
    })?;
    if value.is_null() {
        return Ok(value);
    }
    let found = value.data_type();
    let matches = match (declared, &found) {
        // Element types of arrays are not tracked per value.
        (DataType::Array(_), DataType::Array(_)) => true,
        (declared, found) => declared == found,
    };
    if matches {
        Ok(value)
    } else {
        Err(EvalError::type_mismatch(declared, &found))
    }
}

macro_rules! column_reader {
    ($(#[$doc:meta])* $name:ident, $data_type:expr, $variant:ident, $ty:ty) => {
        $(#[$doc])*
        pub fn $name(row: &[Value], ordinal: usize) -> EvalResult<Option<$ty>> {
            match column(row, ordinal, &$data_type)? {
                Value::Null => Ok(None),
                Value::$variant(v) => Ok(Some(v.clone())),
                other => Err(EvalError::type_mismatch(&$data_type, &other.data_type())),
            }
        }
    };
}

/// Read a column declared as `null`
pub fn read_null(row: &[Value], ordinal: usize) -> EvalResult<Option<()>> {
    column(row, ordinal, &DataType::Null).map(|_| None)
}

column_reader!(
    /// Read a boolean column
    read_boolean, DataType::Boolean, Boolean, bool
);
column_reader!(
    /// Read an int column
    read_integer, DataType::Integer, Integer, i32
);
column_reader!(
    /// Read a bigint column
    read_long, DataType::Long, Long, i64
);
column_reader!(read_double, DataType::Double, Double, f64);
column_reader!(read_decimal, DataType::Decimal, Decimal, Decimal);
column_reader!(
    /// Read a string column
    read_string, DataType::String, String, String
);
column_reader!(
    /// Read a date column
    read_date, DataType::Date, Date, NaiveDate
);
column_reader!(
    /// Read a timestamp column as micros
    read_timestamp, DataType::Timestamp, Timestamp, i64
);
column_reader!(read_array, DataType::array(DataType::Null), Array, Vec<Value>);

/// Name of the reader generated code calls for a column of `data_type`
pub(crate) fn reader_for(data_type: &DataType) -> &'static str {
    match data_type {
        DataType::Null => "read_null",
        DataType::Boolean => "read_boolean",
        DataType::Integer => "read_integer",
        DataType::Long => "read_long",
        DataType::Double => "read_double",
        DataType::Decimal => "read_decimal",
        DataType::String => "read_string",
        DataType::Date => "read_date",
        DataType::Timestamp => "read_timestamp",
        DataType::Array(_) => "read_array",
    }
}

fn reference(references: &[ReferenceValue], index: usize) -> EvalResult<&ReferenceValue> {
    references.get(index).ok_or_else(|| {
        EvalError::internal(format!(
            "reference {} missing, {} bound",
            index,
            references.len()
        ))
    })
}

/// Zone id bound at `index` of a generated unit's references
pub fn zone_reference(references: &[ReferenceValue], index: usize) -> EvalResult<&ZoneId> {
    reference(references, index)?.as_zone()
}

/// Value bound at `index` of a generated unit's references
pub fn value_reference(references: &[ReferenceValue], index: usize) -> EvalResult<&Value> {
    reference(references, index)?.as_value()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("t", true)]
    #[case(" YES ", true)]
    #[case("0", false)]
    #[case("No", false)]
    fn test_string_to_boolean(#[case] input: &str, #[case] expected: bool) {
        assert_eq!(string_to_boolean(input), Ok(expected));
    }

    #[test]
    fn test_string_to_boolean_reports_normalized_input() {
        let err = string_to_boolean("  MayBe ").unwrap_err();
        assert_eq!(err.to_string(), "invalid input syntax for type boolean: maybe");
    }

    #[test]
    fn test_string_to_timestamp_reports_raw_input() {
        let err = string_to_timestamp(" not-a-date", &ZoneId::utc()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid input syntax for type timestamp:  not-a-date"
        );
    }

    #[test]
    fn test_seconds_saturate() {
        assert_eq!(seconds_to_timestamp(1), 1_000_000);
        assert_eq!(seconds_to_timestamp(i64::MAX), i64::MAX);
        assert_eq!(seconds_to_timestamp(i64::MIN), i64::MIN);
    }

    #[test]
    fn test_column_checks_declared_type() {
        let row = vec![Value::string("x"), Value::Null, Value::Integer(1)];
        assert_eq!(read_string(&row, 0), Ok(Some("x".to_string())));
        assert_eq!(read_string(&row, 1), Ok(None));
        assert_eq!(read_integer(&row, 2), Ok(Some(1)));
        assert_eq!(
            read_string(&row, 2),
            Err(EvalError::type_mismatch(&DataType::String, &DataType::Integer))
        );
        assert_eq!(
            read_string(&row, 3),
            Err(EvalError::ColumnOutOfBounds {
                ordinal: 3,
                length: 3
            })
        );
    }

    #[test]
    fn test_array_columns_ignore_element_type() {
        let row = vec![Value::Array(vec![Value::Integer(1)])];
        assert!(column(&row, 0, &DataType::array(DataType::String)).is_ok());
        assert_eq!(read_array(&row, 0), Ok(Some(vec![Value::Integer(1)])));
    }

    #[test]
    fn test_references() {
        let refs = vec![
            ReferenceValue::Zone(ZoneId::utc()),
            ReferenceValue::Value(Value::Integer(3)),
        ];
        assert_eq!(zone_reference(&refs, 0), Ok(&ZoneId::utc()));
        assert_eq!(value_reference(&refs, 1), Ok(&Value::Integer(3)));
        assert!(zone_reference(&refs, 1).is_err());
        assert!(value_reference(&refs, 2).is_err());
    }
}
