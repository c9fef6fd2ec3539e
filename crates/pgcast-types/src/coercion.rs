//! Cast compatibility rules
//!
//! Two layers live here:
//! - `TypeCoercer` answers whether the host engine's default cast supports a
//!   (source, target) pair at all.
//! - `SourceTypeCheck` is a fixed allow-list of source types used by dialect
//!   casts, which are narrower than the host defaults.
//!
//! Both are pure functions of `DataType`; neither ever reads a value.

use crate::DataType;
use pgcast_diagnostics::{PgCastError, PGC0100};

/// Outcome of validating a cast's input type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeCheckResult {
    /// The source type is accepted
    Success,
    /// The source type is rejected, with a message naming it
    Failure(String),
}

impl TypeCheckResult {
    /// Check if validation passed
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }

    /// Check if validation failed
    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Failure message, if any
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Success => None,
            Self::Failure(message) => Some(message),
        }
    }

    /// Convert into a structural error result
    pub fn into_result(self) -> pgcast_diagnostics::Result<()> {
        match self {
            Self::Success => Ok(()),
            Self::Failure(message) => Err(PgCastError::structural(PGC0100, message)),
        }
    }
}

/// Fixed allow-list of source types accepted by a cast
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceTypeCheck {
    target: DataType,
    allowed: Vec<DataType>,
}

impl SourceTypeCheck {
    /// Create an allow-list for casts to `target`
    pub fn new(target: DataType, allowed: Vec<DataType>) -> Self {
        Self { target, allowed }
    }

    /// Sources accepted by the PostgreSQL boolean cast
    pub fn postgres_boolean() -> Self {
        Self::new(
            DataType::Boolean,
            vec![DataType::String, DataType::Integer, DataType::Null],
        )
    }

    /// Sources accepted by the PostgreSQL timestamp cast
    pub fn postgres_timestamp() -> Self {
        Self::new(DataType::Timestamp, vec![DataType::String, DataType::Date])
    }

    /// The target type this list guards
    pub fn target(&self) -> &DataType {
        &self.target
    }

    /// Accepted source types
    pub fn allowed(&self) -> &[DataType] {
        &self.allowed
    }

    /// Validate a declared source type
    pub fn check(&self, source: &DataType) -> TypeCheckResult {
        if self.allowed.contains(source) {
            TypeCheckResult::Success
        } else {
            TypeCheckResult::Failure(format!(
                "cannot cast type {} to {}",
                source.simple_name(),
                self.target.simple_name()
            ))
        }
    }
}

/// Cast rules of the host engine, without any dialect
#[derive(Debug, Clone, Default)]
pub struct TypeCoercer;

impl TypeCoercer {
    /// Create a new type coercer
    pub fn new() -> Self {
        Self
    }

    /// Check if the host engine can cast `from` to `to`
    ///
    /// Only the targets the default casts implement are listed; everything
    /// else is out of reach for this crate.
    pub fn can_cast(&self, from: &DataType, to: &DataType) -> bool {
        if from == to || from.is_null() {
            return true;
        }

        match (from, to) {
            (DataType::Integer, DataType::Boolean) => true,
            (DataType::Long, DataType::Boolean) => true,
            (DataType::Double, DataType::Boolean) => true,
            (DataType::Decimal, DataType::Boolean) => true,
            (DataType::String, DataType::Boolean) => true,
            (DataType::Date, DataType::Boolean) => true,

            (DataType::String, DataType::Timestamp) => true,
            (DataType::Date, DataType::Timestamp) => true,
            (DataType::Long, DataType::Timestamp) => true,

            _ => false,
        }
    }

    /// Validate a host cast, naming both types on failure
    pub fn check_cast(&self, from: &DataType, to: &DataType) -> TypeCheckResult {
        if self.can_cast(from, to) {
            TypeCheckResult::Success
        } else {
            TypeCheckResult::Failure(format!(
                "cannot cast {} to {}",
                from.simple_name(),
                to.simple_name()
            ))
        }
    }
}
