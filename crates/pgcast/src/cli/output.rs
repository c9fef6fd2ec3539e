//! Output formatting utilities

use anyhow::{Context, Result};
use colored::*;
use pgcast_diagnostics::PgCastError;
use std::fs::File;
use std::io::{self, IsTerminal, Write};
use std::path::Path;

/// Set up color output based on user preference
pub fn setup_colors(mode: &str) {
    match mode.to_lowercase().as_str() {
        "always" => colored::control::set_override(true),
        "never" => colored::control::set_override(false),
        _ => colored::control::set_override(io::stdout().is_terminal()),
    }
}

/// Format an error for display
///
/// Workspace errors are rendered as diagnostics with their code and help.
pub fn format_error(error: &anyhow::Error) -> String {
    match error.downcast_ref::<PgCastError>() {
        Some(err) => err.to_diagnostic().render_colored(),
        None => format!("{} {:#}", "Error:".red().bold(), error),
    }
}

/// Format a success message for display
pub fn format_success(message: &str) -> String {
    format!("{} {}", "Success:".green().bold(), message)
}

/// Format a rejected item for display
pub fn format_failure(message: &str) -> String {
    format!("{} {}", "Rejected:".red().bold(), message)
}

/// Write output to a file or stdout
pub fn write_output(content: &str, output_file: Option<&Path>) -> Result<()> {
    if let Some(path) = output_file {
        let mut file = File::create(path)
            .with_context(|| format!("Failed to create output file: {}", path.display()))?;
        file.write_all(content.as_bytes())
            .with_context(|| format!("Failed to write to output file: {}", path.display()))?;
        eprintln!(
            "{}",
            format_success(&format!("Output written to {}", path.display()))
        );
    } else {
        print!("{}", content);
        if !content.ends_with('\n') {
            println!();
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pgcast_diagnostics::PGC0201;

    #[test]
    fn test_format_error_uses_diagnostics() {
        colored::control::set_override(false);
        let err = anyhow::Error::new(PgCastError::format(
            PGC0201,
            "invalid input syntax for type boolean: maybe",
            "maybe",
        ));
        let rendered = format_error(&err);
        assert!(rendered.starts_with("error[PGC0201]: invalid input syntax for type boolean: maybe"));

        let plain = format_error(&anyhow::anyhow!("boom"));
        assert_eq!(plain, "Error: boom");
    }
}
