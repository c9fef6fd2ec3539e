//! Evaluation errors for pgcast
//!
//! Both evaluation backends report failures through `EvalError`. The
//! interpreted path returns it from `Expression::eval`; generated code
//! returns the very same value from the fragment it was spliced into, so
//! a failure has one message regardless of the backend that produced it.

use pgcast_diagnostics::{
    ErrorCategory, ErrorCode, PgCastError, PGC0100, PGC0101, PGC0200, PGC0201, PGC0202, PGC0400,
    PGC0402, PGC0403, PGC0404,
};
use pgcast_types::{DataType, ZoneError};
use thiserror::Error;

/// Result type for evaluation operations
pub type EvalResult<T> = Result<T, EvalError>;

/// Errors that can occur during cast validation and evaluation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EvalError {
    /// Malformed literal for a strict cast
    #[error("invalid input syntax for type {target}: {input}")]
    InvalidInputSyntax { target: String, input: String },

    /// Input type rejected during plan validation
    #[error("{message}")]
    TypeCheck { message: String },

    /// No rule exists for this source/target pair
    #[error("Cannot cast {from_type} to {to_type}")]
    UnsupportedCast { from_type: String, to_type: String },

    /// A strict dialect cast was asked about permissive mode
    #[error("{cast} does not support ANSI mode: PostgreSQL dialect casts are always strict")]
    AnsiModeUnsupported { cast: String },

    /// A timezone-aware expression was evaluated before zone resolution
    #[error("zone id is not bound for {expression}")]
    ZoneNotBound { expression: String },

    /// Unparseable zone id
    #[error("invalid zone id: {0}")]
    InvalidZone(#[from] ZoneError),

    /// A value did not match its expression's declared type
    #[error("Type mismatch: expected {expected}, found {found}")]
    TypeMismatch { expected: String, found: String },

    /// Row too short for a bound reference
    #[error("Column {ordinal} out of bounds for row of length {length}")]
    ColumnOutOfBounds { ordinal: usize, length: usize },

    /// Internal error (should not happen)
    #[error("Internal evaluation error: {message}")]
    Internal { message: String },
}

impl EvalError {
    /// Create an invalid input syntax error
    pub fn invalid_input_syntax(target: impl Into<String>, input: impl Into<String>) -> Self {
        Self::InvalidInputSyntax {
            target: target.into(),
            input: input.into(),
        }
    }

    /// Create a type check error
    pub fn type_check(message: impl Into<String>) -> Self {
        Self::TypeCheck {
            message: message.into(),
        }
    }

    /// Create an unsupported cast error
    pub fn unsupported_cast(from_type: &DataType, to_type: &DataType) -> Self {
        Self::UnsupportedCast {
            from_type: from_type.simple_name(),
            to_type: to_type.simple_name(),
        }
    }

    /// Create an ANSI mode error
    pub fn ansi_mode_unsupported(cast: impl Into<String>) -> Self {
        Self::AnsiModeUnsupported { cast: cast.into() }
    }

    /// Create an unbound zone error
    pub fn zone_not_bound(expression: impl Into<String>) -> Self {
        Self::ZoneNotBound {
            expression: expression.into(),
        }
    }

    /// Create a type mismatch error from data types
    pub fn type_mismatch(expected: &DataType, found: &DataType) -> Self {
        Self::TypeMismatch {
            expected: expected.simple_name(),
            found: found.simple_name(),
        }
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Structured error code
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::InvalidInputSyntax { target, .. } => match target.as_str() {
                "boolean" => PGC0201,
                "timestamp" => PGC0202,
                _ => PGC0200,
            },
            Self::TypeCheck { .. } => PGC0100,
            Self::UnsupportedCast { .. } => PGC0101,
            Self::AnsiModeUnsupported { .. } => PGC0402,
            Self::ZoneNotBound { .. } => PGC0403,
            Self::InvalidZone(_) => PGC0404,
            Self::TypeMismatch { .. } | Self::ColumnOutOfBounds { .. } | Self::Internal { .. } => {
                PGC0400
            }
        }
    }

    /// Structural, format or configuration
    pub fn category(&self) -> ErrorCategory {
        self.code().category()
    }

    /// Check if this error depends on the evaluated value
    pub fn is_format_error(&self) -> bool {
        self.category() == ErrorCategory::Format
    }
}

impl From<EvalError> for PgCastError {
    fn from(err: EvalError) -> Self {
        let code = err.code();
        match err {
            EvalError::InvalidInputSyntax { ref input, .. } => {
                PgCastError::format(code, err.to_string(), input.clone())
            }
            EvalError::TypeCheck { .. } | EvalError::UnsupportedCast { .. } => {
                PgCastError::structural(code, err.to_string())
            }
            EvalError::AnsiModeUnsupported { .. }
            | EvalError::ZoneNotBound { .. }
            | EvalError::InvalidZone(_) => PgCastError::configuration(code, err.to_string()),
            EvalError::TypeMismatch { .. }
            | EvalError::ColumnOutOfBounds { .. }
            | EvalError::Internal { .. } => PgCastError::system(code, err.to_string()),
        }
    }
}
