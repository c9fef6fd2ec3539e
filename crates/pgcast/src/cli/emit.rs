//! Emit command implementation

use super::{config, input, output};
use anyhow::{Context, Result};
use pgcast_diagnostics::PgCastError;
use pgcast_eval::{Expression, FragmentContext, plan_cast};
use std::fmt::Write as _;
use std::path::PathBuf;

/// Configuration for emit command
pub struct EmitConfig {
    pub target: String,
    pub from: String,
    /// Cast this literal instead of an input column
    pub literal: Option<String>,
    /// Name of the generated function
    pub name: String,
    /// Append the references the function expects, as JSON
    pub references: bool,
    pub output_file: Option<PathBuf>,
    pub overrides: config::ConfigOverrides,
}

/// Print the Rust function computing a cast
pub fn emit(config: EmitConfig) -> Result<()> {
    let unit = render(&config)?;
    output::write_output(&unit, config.output_file.as_deref())
}

/// Render the unit `emit` prints
pub fn render(config: &EmitConfig) -> Result<String> {
    let cast_config = config::load_config(&config.overrides)?;
    let target = input::parse_type(&config.target)?;
    let source = input::parse_type(&config.from)?;
    let child = match &config.literal {
        Some(text) => input::literal(Some(text), &source)?,
        None => input::column(&source),
    };

    let cast = plan_cast(child, &target, &cast_config).map_err(PgCastError::from)?;
    let mut ctx = FragmentContext::new();
    let code = cast.gen_code(&mut ctx).map_err(PgCastError::from)?;
    log::info!("emitted {} as {}", cast, code.value);

    let mut unit = format!("// {}\n", cast);
    unit.push_str(&ctx.render_function(&config.name, &code, &cast.data_type()));
    if config.references {
        let json = serde_json::to_string_pretty(&ctx.references())
            .context("Failed to serialize references")?;
        let _ = writeln!(unit, "\n/* references:\n{}\n*/", json);
    }
    Ok(unit)
}
