//! pgcast error codes following a structured numbering system
//!
//! Error code ranges:
//! - PGC0100-PGC0199: Structural errors (type checking before evaluation)
//! - PGC0200-PGC0299: Format errors (malformed input discovered per value)
//! - PGC0400-PGC0499: Configuration and system errors

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

/// Error code identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ErrorCode(u16);

/// Broad error category, derived from the code range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCategory {
    /// Detected from types alone, before any value is read
    Structural,
    /// Depends on the actual value encountered during evaluation
    Format,
    /// Caller or integration bug
    Configuration,
    /// Code outside the known ranges
    Unknown,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Structural => write!(f, "structural"),
            Self::Format => write!(f, "format"),
            Self::Configuration => write!(f, "configuration"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

impl ErrorCode {
    /// Create a new error code
    pub const fn new(code: u16) -> Self {
        Self(code)
    }

    /// Get the numeric code
    pub const fn code(&self) -> u16 {
        self.0
    }

    /// Get error information for this code
    pub fn info(&self) -> &'static ErrorInfo {
        ERROR_INFO.get(&self.0).unwrap_or(&UNKNOWN_ERROR)
    }

    /// Check if this is a structural error (0100-0199)
    pub const fn is_structural_error(&self) -> bool {
        self.0 >= 100 && self.0 < 200
    }

    /// Check if this is a format error (0200-0299)
    pub const fn is_format_error(&self) -> bool {
        self.0 >= 200 && self.0 < 300
    }

    /// Check if this is a configuration error (0400-0499)
    pub const fn is_configuration_error(&self) -> bool {
        self.0 >= 400 && self.0 < 500
    }

    /// Category of this code
    pub const fn category(&self) -> ErrorCategory {
        if self.is_structural_error() {
            ErrorCategory::Structural
        } else if self.is_format_error() {
            ErrorCategory::Format
        } else if self.is_configuration_error() {
            ErrorCategory::Configuration
        } else {
            ErrorCategory::Unknown
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PGC{:04}", self.0)
    }
}

/// Information about an error code
#[derive(Debug, Clone)]
pub struct ErrorInfo {
    /// Short description of the error
    pub description: &'static str,
    /// Detailed help text
    pub help: Option<&'static str>,
}

impl ErrorInfo {
    const fn new(description: &'static str) -> Self {
        Self {
            description,
            help: None,
        }
    }

    const fn with_help(mut self, help: &'static str) -> Self {
        self.help = Some(help);
        self
    }
}

static UNKNOWN_ERROR: ErrorInfo = ErrorInfo::new("Unknown error");

static ERROR_INFO: LazyLock<HashMap<u16, ErrorInfo>> = LazyLock::new(|| {
    let mut map = HashMap::new();

    // Structural errors (0100-0199)
    map.insert(
        100,
        ErrorInfo::new("Unsupported cast source type")
            .with_help("The PostgreSQL dialect only accepts a fixed set of source types per cast"),
    );
    map.insert(101, ErrorInfo::new("Unsupported cast target type"));

    // Format errors (0200-0299)
    map.insert(200, ErrorInfo::new("Evaluation failed"));
    map.insert(
        201,
        ErrorInfo::new("Invalid input syntax for type boolean")
            .with_help("Accepted spellings: t, true, y, yes, 1, f, false, n, no, 0"),
    );
    map.insert(202, ErrorInfo::new("Invalid input syntax for type timestamp"));

    // Configuration and system errors (0400-0499)
    map.insert(
        400,
        ErrorInfo::new("Internal error")
            .with_help("A value did not match its declared type or a row was too short"),
    );
    map.insert(401, ErrorInfo::new("Configuration error"));
    map.insert(
        402,
        ErrorInfo::new("ANSI mode is not supported by the dialect")
            .with_help("Dialect casts are always strict; do not query their ANSI flag"),
    );
    map.insert(
        403,
        ErrorInfo::new("Zone id not bound")
            .with_help("Run the zone resolution pass before evaluating timezone-aware casts"),
    );
    map.insert(404, ErrorInfo::new("Invalid zone id"));
    map.insert(405, ErrorInfo::new("I/O error"));

    map
});

// Structural errors
pub const PGC0100: ErrorCode = ErrorCode::new(100);
pub const PGC0101: ErrorCode = ErrorCode::new(101);

// Format errors
pub const PGC0200: ErrorCode = ErrorCode::new(200);
pub const PGC0201: ErrorCode = ErrorCode::new(201);
pub const PGC0202: ErrorCode = ErrorCode::new(202);

// Configuration and system errors
pub const PGC0400: ErrorCode = ErrorCode::new(400);
pub const PGC0401: ErrorCode = ErrorCode::new(401);
pub const PGC0402: ErrorCode = ErrorCode::new(402);
pub const PGC0403: ErrorCode = ErrorCode::new(403);
pub const PGC0404: ErrorCode = ErrorCode::new(404);
pub const PGC0405: ErrorCode = ErrorCode::new(405);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_display() {
        assert_eq!(PGC0100.to_string(), "PGC0100");
        assert_eq!(PGC0201.to_string(), "PGC0201");
    }

    #[test]
    fn test_error_categories() {
        assert!(PGC0100.is_structural_error());
        assert!(!PGC0100.is_format_error());

        assert!(PGC0201.is_format_error());
        assert!(PGC0402.is_configuration_error());

        assert_eq!(PGC0101.category(), ErrorCategory::Structural);
        assert_eq!(PGC0202.category(), ErrorCategory::Format);
        assert_eq!(PGC0403.category(), ErrorCategory::Configuration);
        assert_eq!(ErrorCode::new(7).category(), ErrorCategory::Unknown);
    }

    #[test]
    fn test_error_info() {
        assert_eq!(PGC0100.info().description, "Unsupported cast source type");
        assert!(PGC0201.info().help.is_some());
        assert_eq!(ErrorCode::new(999).info().description, "Unknown error");
    }
}
