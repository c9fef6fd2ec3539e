//! Check command implementation

use super::{config, input, output};
use anyhow::{Result, bail};
use colored::*;
use pgcast_eval::{Expression, rewrite_cast};
use pgcast_types::TypeCheckResult;

/// Configuration for check command
pub struct CheckConfig {
    pub target: String,
    /// Source type names to validate
    pub sources: Vec<String>,
    pub overrides: config::ConfigOverrides,
}

/// Outcome for one source type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceCheck {
    pub source: String,
    pub result: TypeCheckResult,
}

/// Type check casts from each source without evaluating anything
pub fn check(config: CheckConfig) -> Result<()> {
    if config.sources.is_empty() {
        bail!("No source types specified");
    }

    let results = check_sources(&config)?;
    let mut rejected = 0;
    for check in &results {
        match &check.result {
            TypeCheckResult::Success => {
                println!("{} {} -> {}", "ok".green().bold(), check.source, config.target)
            }
            TypeCheckResult::Failure(message) => {
                rejected += 1;
                eprintln!("{}", output::format_failure(message));
            }
        }
    }

    if rejected > 0 {
        bail!("{} of {} source type(s) rejected", rejected, results.len());
    }
    println!(
        "{}",
        output::format_success(&format!("all {} source type(s) accepted", results.len()))
    );
    Ok(())
}

/// Run the type check for every requested source
pub fn check_sources(config: &CheckConfig) -> Result<Vec<SourceCheck>> {
    let cast_config = config::load_config(&config.overrides)?;
    let target = input::parse_type(&config.target)?;

    config
        .sources
        .iter()
        .map(|name| -> Result<SourceCheck> {
            let source = input::parse_type(name)?;
            let cast = rewrite_cast(input::column(&source), &target, &cast_config)?;
            Ok(SourceCheck {
                source: source.simple_name(),
                result: cast.check_input_data_types(),
            })
        })
        .collect()
}
