//! Expression tree nodes
//!
//! Every node supports both backends: `eval` interprets a row directly and
//! `gen_code` emits a fragment computing the same value. Nodes are
//! immutable and shared through `ExprRef`; rewriting a node produces a new one.

use pgcast_types::{DataType, TypeCheckResult, Value, ZoneId};
use std::fmt;
use std::sync::Arc;

use crate::codegen::{self, CodegenContext, ExprCode, ReferenceValue, RUNTIME_CRATE};
use crate::error::{EvalError, EvalResult};
use crate::runtime;

/// Shared handle to an expression node
pub type ExprRef = Arc<dyn Expression>;

/// An input row
pub type Row = [Value];

/// A node of the expression tree
pub trait Expression: fmt::Debug + fmt::Display + Send + Sync {
    /// Result type
    fn data_type(&self) -> DataType;

    /// Whether evaluation can produce NULL
    fn nullable(&self) -> bool;

    /// Direct children
    fn children(&self) -> Vec<ExprRef> {
        Vec::new()
    }

    /// Copy of this node with its children replaced
    fn with_new_children(&self, children: Vec<ExprRef>) -> EvalResult<ExprRef>;

    /// Validate input types without looking at any value
    fn check_input_data_types(&self) -> TypeCheckResult {
        TypeCheckResult::Success
    }

    /// Interpret against `row`
    fn eval(&self, row: &Row) -> EvalResult<Value>;

    /// Emit code computing the same result as [`eval`](Self::eval)
    fn gen_code(&self, ctx: &mut dyn CodegenContext) -> EvalResult<ExprCode>;

    /// SQL text of this expression
    fn sql(&self) -> String;

    /// Zone binding view, for timezone-aware nodes
    fn as_time_zone_aware(&self) -> Option<&dyn TimeZoneAware> {
        None
    }
}

/// Nodes whose result depends on a session zone
pub trait TimeZoneAware {
    /// Bound zone, if resolved
    fn zone_id(&self) -> Option<&ZoneId>;

    /// Copy of this node bound to `zone`; the receiver is left unchanged
    fn with_zone(&self, zone: ZoneId) -> ExprRef;

    /// Whether evaluation needs a bound zone
    fn needs_time_zone(&self) -> bool;

    /// Whether a zone still has to be bound before evaluation
    fn is_unresolved(&self) -> bool {
        self.needs_time_zone() && self.zone_id().is_none()
    }
}

/// Check every node of a tree, children first
pub fn check_tree(expr: &ExprRef) -> TypeCheckResult {
    for child in expr.children() {
        let result = check_tree(&child);
        if result.is_failure() {
            return result;
        }
    }
    expr.check_input_data_types()
}

/// A constant
#[derive(Debug, Clone, PartialEq)]
pub struct Literal {
    value: Value,
    data_type: DataType,
}

impl Literal {
    /// Literal typed after its value
    pub fn new(value: impl Into<Value>) -> Self {
        let value = value.into();
        let data_type = value.data_type();
        Self { value, data_type }
    }

    /// Literal with an explicit type, typically a typed NULL
    pub fn typed(value: Value, data_type: DataType) -> EvalResult<Self> {
        let found = value.data_type();
        let compatible = value.is_null()
            || found == data_type
            || matches!((&found, &data_type), (DataType::Array(_), DataType::Array(_)));
        if !compatible {
            return Err(EvalError::type_mismatch(&data_type, &found));
        }
        Ok(Self { value, data_type })
    }

    /// NULL of `data_type`
    pub fn null(data_type: DataType) -> Self {
        Self {
            value: Value::Null,
            data_type,
        }
    }

    /// The constant value
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Shared handle to this literal
    pub fn into_ref(self) -> ExprRef {
        Arc::new(self)
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl Expression for Literal {
    fn data_type(&self) -> DataType {
        self.data_type.clone()
    }

    fn nullable(&self) -> bool {
        self.value.is_null()
    }

    fn with_new_children(&self, children: Vec<ExprRef>) -> EvalResult<ExprRef> {
        leaf_children(self, children)
    }

    fn eval(&self, _row: &Row) -> EvalResult<Value> {
        Ok(self.value.clone())
    }

    fn gen_code(&self, ctx: &mut dyn CodegenContext) -> EvalResult<ExprCode> {
        let value = ctx.fresh_name("literal");
        let ty = codegen::rust_type(&self.data_type);
        let init = match codegen::inline_literal(&self.value) {
            Some(init) => init,
            None => {
                let reference = ctx.add_reference("constant", ReferenceValue::Value(self.value.clone()));
                // Only reached for non-null decimal, date and array constants.
                let variant = codegen::value_variant(&self.data_type).ok_or_else(|| {
                    EvalError::internal(format!("no value variant for {}", self.data_type))
                })?;
                format!(
                    "match {reference} {{ {}::Value::{variant}(v) => Some(v.clone()), _ => None }}",
                    codegen::TYPES_CRATE
                )
            }
        };
        Ok(ExprCode::new(
            format!("let {value}: Option<{ty}> = {init};"),
            value,
        ))
    }

    fn sql(&self) -> String {
        self.value.sql_literal()
    }
}

/// Column `ordinal` of the input row
#[derive(Debug, Clone, PartialEq)]
pub struct BoundReference {
    ordinal: usize,
    data_type: DataType,
    nullable: bool,
    name: Option<String>,
}

impl BoundReference {
    pub fn new(ordinal: usize, data_type: DataType, nullable: bool) -> Self {
        Self {
            ordinal,
            data_type,
            nullable,
            name: None,
        }
    }

    /// Attach a column name used when rendering
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn ordinal(&self) -> usize {
        self.ordinal
    }

    pub fn into_ref(self) -> ExprRef {
        Arc::new(self)
    }
}

impl fmt::Display for BoundReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "{}#{}", name, self.ordinal),
            None => write!(
                f,
                "input[{}, {}, {}]",
                self.ordinal, self.data_type, self.nullable
            ),
        }
    }
}

impl Expression for BoundReference {
    fn data_type(&self) -> DataType {
        self.data_type.clone()
    }

    fn nullable(&self) -> bool {
        self.nullable
    }

    fn with_new_children(&self, children: Vec<ExprRef>) -> EvalResult<ExprRef> {
        leaf_children(self, children)
    }

    fn eval(&self, row: &Row) -> EvalResult<Value> {
        runtime::column(row, self.ordinal, &self.data_type).cloned()
    }

    fn gen_code(&self, ctx: &mut dyn CodegenContext) -> EvalResult<ExprCode> {
        let value = ctx.fresh_name("column");
        let code = format!(
            "let {value}: Option<{}> = {RUNTIME_CRATE}::runtime::{}(row, {})?;",
            codegen::rust_type(&self.data_type),
            runtime::reader_for(&self.data_type),
            self.ordinal
        );
        Ok(ExprCode::new(code, value))
    }

    fn sql(&self) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => format!("input[{}]", self.ordinal),
        }
    }
}

fn leaf_children<E>(expr: &E, children: Vec<ExprRef>) -> EvalResult<ExprRef>
where
    E: Expression + Clone + 'static,
{
    if !children.is_empty() {
        return Err(EvalError::internal(format!(
            "{} is a leaf but was given {} children",
            expr,
            children.len()
        )));
    }
    Ok(Arc::new(expr.clone()))
}
