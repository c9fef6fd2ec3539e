//! pgcast error types

use crate::{ErrorCategory, ErrorCode};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Diagnostic severity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    /// Error - validation or evaluation cannot proceed
    Error,
    /// Warning - potential issue but can continue
    Warning,
    /// Information - informational message
    Info,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
            Severity::Info => write!(f, "info"),
        }
    }
}

/// A diagnostic message with code and optional help
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Severity level
    pub severity: Severity,
    /// Error code
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
    /// Additional context or help
    pub help: Option<String>,
}

impl Diagnostic {
    /// Create a new error diagnostic
    pub fn error(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            code,
            message: message.into(),
            help: None,
        }
    }

    /// Create a new warning diagnostic
    pub fn warning(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            code,
            message: message.into(),
            help: None,
        }
    }

    /// Set help text
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// Render with terminal colors
    #[cfg(feature = "colored")]
    pub fn render_colored(&self) -> String {
        use colored::Colorize;

        let severity = match self.severity {
            Severity::Error => self.severity.to_string().red().bold(),
            Severity::Warning => self.severity.to_string().yellow().bold(),
            Severity::Info => self.severity.to_string().blue().bold(),
        };
        let mut out = format!("{}[{}]: {}", severity, self.code.to_string().bold(), self.message);
        if let Some(help) = &self.help {
            out.push_str(&format!("\n  {} {}", "help:".cyan(), help));
        }
        out
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} - {}", self.severity, self.code, self.message)?;
        if let Some(help) = &self.help {
            write!(f, " ({})", help)?;
        }
        Ok(())
    }
}

/// Main pgcast error type
#[derive(Debug, Clone, Error)]
pub enum PgCastError {
    /// Type-level error raised before evaluation
    #[error("{code}: {message}")]
    Structural {
        code: ErrorCode,
        message: String,
        context: Option<String>,
    },

    /// Malformed input value discovered during evaluation
    #[error("{code}: {message}")]
    Format {
        code: ErrorCode,
        message: String,
        input: String,
    },

    /// Integration bug, such as asking a strict cast to be permissive
    #[error("{code}: {message}")]
    Configuration {
        code: ErrorCode,
        message: String,
        context: Option<String>,
    },

    /// System error (I/O, internal invariants)
    #[error("{code}: {message}")]
    System {
        code: ErrorCode,
        message: String,
        context: Option<String>,
    },
}

impl PgCastError {
    /// Create a structural error
    pub fn structural(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::Structural {
            code,
            message: message.into(),
            context: None,
        }
    }

    /// Create a format error carrying the offending input
    pub fn format(code: ErrorCode, message: impl Into<String>, input: impl Into<String>) -> Self {
        Self::Format {
            code,
            message: message.into(),
            input: input.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::Configuration {
            code,
            message: message.into(),
            context: None,
        }
    }

    /// Create a system error
    pub fn system(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::System {
            code,
            message: message.into(),
            context: None,
        }
    }

    /// Attach context to errors that carry it
    pub fn with_context(mut self, ctx: impl Into<String>) -> Self {
        match &mut self {
            Self::Structural { context, .. }
            | Self::Configuration { context, .. }
            | Self::System { context, .. } => *context = Some(ctx.into()),
            Self::Format { .. } => {}
        }
        self
    }

    /// Get the error code
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Structural { code, .. } => *code,
            Self::Format { code, .. } => *code,
            Self::Configuration { code, .. } => *code,
            Self::System { code, .. } => *code,
        }
    }

    /// Get the message without the code prefix
    pub fn message(&self) -> &str {
        match self {
            Self::Structural { message, .. }
            | Self::Format { message, .. }
            | Self::Configuration { message, .. }
            | Self::System { message, .. } => message,
        }
    }

    /// Get the error category
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Structural { .. } => ErrorCategory::Structural,
            Self::Format { .. } => ErrorCategory::Format,
            Self::Configuration { .. } => ErrorCategory::Configuration,
            Self::System { code, .. } => code.category(),
        }
    }

    /// Convert to a diagnostic
    pub fn to_diagnostic(&self) -> Diagnostic {
        let mut diag = Diagnostic::error(self.code(), self.message());
        let help = match self {
            Self::Structural { context, .. }
            | Self::Configuration { context, .. }
            | Self::System { context, .. } => context.clone(),
            Self::Format { .. } => None,
        };
        if let Some(help) = help.or_else(|| self.code().info().help.map(str::to_string)) {
            diag = diag.with_help(help);
        }
        diag
    }
}
