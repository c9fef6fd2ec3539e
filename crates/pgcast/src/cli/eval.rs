//! Eval command implementation

use super::{config, input, output};
use anyhow::{Context, Result};
use pgcast_diagnostics::PgCastError;
use pgcast_eval::{Expression, plan_cast};

/// Configuration for eval command
pub struct EvalConfig {
    /// Target type name
    pub target: String,
    /// Source type name
    pub from: String,
    /// Value to cast; `None` casts a typed NULL
    pub value: Option<String>,
    pub json: bool,
    pub overrides: config::ConfigOverrides,
}

/// Interpret a cast of a single literal and print the result
pub fn eval(config: EvalConfig) -> Result<()> {
    let cast_config = config::load_config(&config.overrides)?;
    let target = input::parse_type(&config.target)?;
    let source = input::parse_type(&config.from)?;
    let child = input::literal(config.value.as_deref(), &source)?;

    let cast = plan_cast(child, &target, &cast_config).map_err(PgCastError::from)?;
    log::info!("evaluating {}", cast);
    let value = cast.eval(&[]).map_err(PgCastError::from)?;

    let rendered = if config.json {
        serde_json::to_string(&value).context("Failed to serialize value")?
    } else {
        value.to_string()
    };
    output::write_output(&rendered, None)
}
