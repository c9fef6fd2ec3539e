//! SQL data types
//!
//! `DataType` is the declared type of an expression. Casts validate their
//! child's `DataType` before evaluation and never look at values to do so.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Declared SQL type of an expression
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "element", rename_all = "lowercase")]
pub enum DataType {
    /// Type of the untyped NULL literal
    Null,
    /// Boolean
    Boolean,
    /// 32-bit signed integer
    Integer,
    /// 64-bit signed integer
    Long,
    /// 64-bit float
    Double,
    /// Arbitrary precision decimal
    Decimal,
    /// Unicode string
    String,
    /// Calendar date without zone
    Date,
    /// Instant, stored as microseconds since the Unix epoch
    Timestamp,
    /// Homogeneous array
    Array(Box<DataType>),
}

impl DataType {
    /// Create an array type
    pub fn array(element_type: DataType) -> Self {
        Self::Array(Box::new(element_type))
    }

    /// Lowercase name used in plan strings and error messages
    pub fn simple_name(&self) -> String {
        match self {
            Self::Null => "null".to_string(),
            Self::Boolean => "boolean".to_string(),
            Self::Integer => "int".to_string(),
            Self::Long => "bigint".to_string(),
            Self::Double => "double".to_string(),
            Self::Decimal => "decimal".to_string(),
            Self::String => "string".to_string(),
            Self::Date => "date".to_string(),
            Self::Timestamp => "timestamp".to_string(),
            Self::Array(element) => format!("array<{}>", element.simple_name()),
        }
    }

    /// Uppercase name used when rendering SQL
    pub fn sql_name(&self) -> String {
        match self {
            Self::Array(element) => format!("ARRAY<{}>", element.sql_name()),
            Self::Null => "VOID".to_string(),
            other => other.simple_name().to_uppercase(),
        }
    }

    /// Check if this is the NULL literal type
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Check if this type is numeric
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            Self::Integer | Self::Long | Self::Double | Self::Decimal
        )
    }

    /// Check if this type is temporal
    pub fn is_temporal(&self) -> bool {
        matches!(self, Self::Date | Self::Timestamp)
    }

    /// Casts to this type need a zone id to be evaluated
    pub fn needs_time_zone(&self) -> bool {
        matches!(self, Self::Timestamp)
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.simple_name())
    }
}

impl FromStr for DataType {
    type Err = String;

    /// Parse a simple name; `integer`, `long` and `varchar` are accepted too
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        if let Some(inner) = lower
            .strip_prefix("array<")
            .and_then(|rest| rest.strip_suffix('>'))
        {
            return Ok(Self::array(inner.parse()?));
        }
        match lower.as_str() {
            "null" | "void" => Ok(Self::Null),
            "boolean" | "bool" => Ok(Self::Boolean),
            "int" | "integer" => Ok(Self::Integer),
            "bigint" | "long" => Ok(Self::Long),
            "double" => Ok(Self::Double),
            "decimal" => Ok(Self::Decimal),
            "string" | "varchar" | "text" => Ok(Self::String),
            "date" => Ok(Self::Date),
            "timestamp" => Ok(Self::Timestamp),
            _ => Err(format!("unknown data type '{}'", s.trim())),
        }
    }
}
