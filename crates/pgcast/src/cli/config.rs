//! Cast configuration loading
//!
//! A JSON file provides the base `CastConfig`; command-line flags override
//! individual fields.

use pgcast_diagnostics::{PgCastError, PGC0405};
use pgcast_eval::{CastConfig, SqlDialect};
use std::fs;
use std::path::PathBuf;

/// Flags that shape the session configuration
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub config_file: Option<PathBuf>,
    pub dialect: Option<String>,
    pub zone: Option<String>,
    pub ansi: bool,
}

/// Build the effective configuration
pub fn load_config(overrides: &ConfigOverrides) -> pgcast_diagnostics::Result<CastConfig> {
    let mut config = match &overrides.config_file {
        Some(path) => {
            let json = fs::read_to_string(path).map_err(|e| {
                PgCastError::configuration(
                    PGC0405,
                    format!("cannot read config file {}: {}", path.display(), e),
                )
            })?;
            CastConfig::from_json(&json)?
        }
        None => CastConfig::default(),
    };

    if let Some(dialect) = &overrides.dialect {
        config.dialect = dialect.parse::<SqlDialect>()?;
    }
    if let Some(zone) = &overrides.zone {
        config.session_time_zone = zone.clone();
    }
    if overrides.ansi {
        config.ansi_enabled = true;
    }

    config.session_zone().map_err(PgCastError::from)?;
    log::debug!("effective cast config: {:?}", config);
    Ok(config)
}
