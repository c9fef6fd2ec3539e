//! Code generation support
//!
//! Expressions emit Rust source fragments instead of values. A fragment
//! binds one variable of type `Option<T>` holding the expression's result,
//! where `T` is the Rust type of the expression's `DataType` (see
//! [`rust_type`]); `None` is SQL NULL. Fragments are spliced into a function
//! returning `EvalResult<_>`, so a strict cast aborts with `return Err(..)`.
//!
//! Generated code never duplicates cast logic beyond control flow: it calls
//! the same `truth`, `datetime` and `runtime` routines the interpreted path
//! uses, by absolute path under [`RUNTIME_CRATE`].
//!
//! Constants that have no literal Rust spelling (zone ids, decimals, dates,
//! arrays) are registered as external references and bound by the host
//! before the fragment runs.

use indexmap::IndexMap;
use pgcast_types::{DataType, Value, ZoneId};
use serde::{Deserialize, Serialize};

use crate::error::{EvalError, EvalResult};

/// Crate path generated code uses to reach shared routines
pub const RUNTIME_CRATE: &str = "::pgcast_eval";

/// Crate path generated code uses to reach value types
pub const TYPES_CRATE: &str = "::pgcast_types";

/// Generated code for one expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExprCode {
    /// Statements computing the result
    pub code: String,
    /// Name of the `Option<T>` variable holding the result
    pub value: String,
}

impl ExprCode {
    /// Create generated code
    pub fn new(code: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            value: value.into(),
        }
    }

    /// Expression testing the result for NULL
    pub fn is_null(&self) -> String {
        format!("{}.is_none()", self.value)
    }
}

/// An external constant made available to generated code
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum ReferenceValue {
    /// Zone id bound to a timezone-aware cast
    Zone(ZoneId),
    /// Literal without a Rust spelling
    Value(Value),
}

impl ReferenceValue {
    /// Get the zone, failing on any other kind
    pub fn as_zone(&self) -> EvalResult<&ZoneId> {
        match self {
            Self::Zone(zone) => Ok(zone),
            Self::Value(v) => Err(EvalError::internal(format!(
                "reference holds a {} value, expected a zone id",
                v.data_type()
            ))),
        }
    }

    /// Get the value, failing on any other kind
    pub fn as_value(&self) -> EvalResult<&Value> {
        match self {
            Self::Value(v) => Ok(v),
            Self::Zone(zone) => Err(EvalError::internal(format!(
                "reference holds zone id {}, expected a value",
                zone
            ))),
        }
    }
}

/// Collaborator handed to `Expression::gen_code`
pub trait CodegenContext {
    /// A variable name not used anywhere else in the unit
    fn fresh_name(&mut self, prefix: &str) -> String;

    /// Register an external constant, returning the variable it is bound to
    fn add_reference(&mut self, hint: &str, value: ReferenceValue) -> String;
}

/// Default code generation context
///
/// Numbers names with one counter for the whole unit, deduplicates equal
/// references, and renders the finished unit as a function.
#[derive(Debug, Default)]
pub struct FragmentContext {
    next_id: usize,
    references: IndexMap<String, ReferenceValue>,
}

impl FragmentContext {
    /// Create an empty context
    pub fn new() -> Self {
        Self::default()
    }

    /// Registered references in binding order
    pub fn references(&self) -> Vec<ReferenceValue> {
        self.references.values().cloned().collect()
    }

    /// Names of registered references in binding order
    pub fn reference_names(&self) -> impl Iterator<Item = &str> {
        self.references.keys().map(String::as_str)
    }

    /// Render a complete function evaluating `code`
    ///
    /// The function takes the input row and the slice returned by
    /// [`references`](Self::references), in that order.
    pub fn render_function(&self, name: &str, code: &ExprCode, data_type: &DataType) -> String {
        let mut out = String::new();
        out.push_str("#[allow(unused_variables)]\n");
        out.push_str(&format!("pub fn {name}(\n"));
        out.push_str(&format!("    row: &[{TYPES_CRATE}::Value],\n"));
        out.push_str(&format!(
            "    references: &[{RUNTIME_CRATE}::codegen::ReferenceValue],\n"
        ));
        out.push_str(&format!(
            ") -> {RUNTIME_CRATE}::EvalResult<{TYPES_CRATE}::Value> {{\n"
        ));
        for (index, (var, reference)) in self.references.iter().enumerate() {
            let accessor = match reference {
                ReferenceValue::Zone(_) => "zone_reference",
                ReferenceValue::Value(_) => "value_reference",
            };
            out.push_str(&format!(
                "    let {var} = {RUNTIME_CRATE}::runtime::{accessor}(references, {index})?;\n"
            ));
        }
        if self.references.is_empty() {
            out.push_str("    let _ = references;\n");
        }
        for line in code.code.lines() {
            if !line.is_empty() {
                out.push_str("    ");
                out.push_str(line);
            }
            out.push('\n');
        }
        out.push_str(&format!("    Ok({})\n", into_value(&code.value, data_type)));
        out.push_str("}\n");
        out
    }
}

impl CodegenContext for FragmentContext {
    fn fresh_name(&mut self, prefix: &str) -> String {
        let name = format!("{}_{}", prefix, self.next_id);
        self.next_id += 1;
        name
    }

    fn add_reference(&mut self, hint: &str, value: ReferenceValue) -> String {
        if let Some((name, _)) = self.references.iter().find(|(_, v)| **v == value) {
            return name.clone();
        }
        let name = self.fresh_name(hint);
        log::trace!("registered reference {} = {:?}", name, value);
        self.references.insert(name.clone(), value);
        name
    }
}

/// Rust type of a non-null value of `data_type` in generated code
pub fn rust_type(data_type: &DataType) -> String {
    match data_type {
        DataType::Null => "()".to_string(),
        DataType::Boolean => "bool".to_string(),
        DataType::Integer => "i32".to_string(),
        DataType::Long | DataType::Timestamp => "i64".to_string(),
        DataType::Double => "f64".to_string(),
        DataType::Decimal => "::rust_decimal::Decimal".to_string(),
        DataType::String => "String".to_string(),
        DataType::Date => "::chrono::NaiveDate".to_string(),
        DataType::Array(_) => format!("Vec<{TYPES_CRATE}::Value>"),
    }
}

/// `Value` variant holding a non-null value of `data_type`
pub fn value_variant(data_type: &DataType) -> Option<&'static str> {
    match data_type {
        DataType::Null => None,
        DataType::Boolean => Some("Boolean"),
        DataType::Integer => Some("Integer"),
        DataType::Long => Some("Long"),
        DataType::Double => Some("Double"),
        DataType::Decimal => Some("Decimal"),
        DataType::String => Some("String"),
        DataType::Date => Some("Date"),
        DataType::Timestamp => Some("Timestamp"),
        DataType::Array(_) => Some("Array"),
    }
}

/// Expression converting an `Option<T>` variable into a `Value`
pub fn into_value(var: &str, data_type: &DataType) -> String {
    match value_variant(data_type) {
        Some(variant) => format!(
            "{var}.map({TYPES_CRATE}::Value::{variant}).unwrap_or({TYPES_CRATE}::Value::Null)"
        ),
        None => format!("{TYPES_CRATE}::Value::Null"),
    }
}

/// Rust string literal for `s`
///
/// Quotes, backslashes, control and non-ASCII characters are escaped so the
/// text can never terminate the literal early.
pub fn string_literal(s: &str) -> String {
    format!("\"{}\"", s.escape_default())
}

/// Rust expression of type `Option<T>` for a literal value, if it has one
///
/// Decimals, dates and arrays return `None` and must go through a reference.
pub fn inline_literal(value: &Value) -> Option<String> {
    match value {
        Value::Null => Some("None".to_string()),
        Value::Boolean(b) => Some(format!("Some({})", b)),
        Value::Integer(i) => Some(format!("Some({}i32)", i)),
        Value::Long(l) => Some(format!("Some({}i64)", l)),
        Value::Timestamp(t) => Some(format!("Some({}i64)", t)),
        // Bit pattern keeps NaN payloads and signed zeros exact.
        Value::Double(d) => Some(format!("Some(f64::from_bits({:#x}))", d.to_bits())),
        Value::String(s) => Some(format!("Some(String::from({}))", string_literal(s))),
        Value::Decimal(_) | Value::Date(_) | Value::Array(_) => None,
    }
}
