//! Dialect selection and plan passes
//!
//! `rewrite_cast` picks the cast expression for a target type under the
//! configured dialect, `resolve_time_zone` binds the session zone on every
//! timezone-aware node still missing one, and `plan_cast` runs both followed
//! by type checking.

use pgcast_diagnostics::{PgCastError, PGC0401};
use pgcast_types::{DataType, TypeCheckResult, ZoneId};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::cast::{DefaultCast, PostgresCastToBoolean, PostgresCastToTimestamp};
use crate::error::{EvalError, EvalResult};
use crate::expression::{check_tree, ExprRef, Expression};

/// SQL dialect governing cast semantics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SqlDialect {
    /// Host engine casts
    #[default]
    Default,
    /// PostgreSQL casts for boolean and timestamp targets
    #[serde(alias = "postgres")]
    PostgreSql,
}

impl SqlDialect {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::PostgreSql => "postgresql",
        }
    }
}

impl fmt::Display for SqlDialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SqlDialect {
    type Err = PgCastError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "default" => Ok(Self::Default),
            "postgresql" | "postgres" => Ok(Self::PostgreSql),
            other => Err(PgCastError::configuration(
                PGC0401,
                format!("unknown dialect '{}'", other),
            )),
        }
    }
}

/// Session settings affecting casts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CastConfig {
    pub dialect: SqlDialect,
    /// Strict host casts; dialect casts ignore this
    pub ansi_enabled: bool,
    /// Zone id bound to unresolved timezone-aware casts
    pub session_time_zone: String,
}

impl Default for CastConfig {
    fn default() -> Self {
        Self {
            dialect: SqlDialect::Default,
            ansi_enabled: false,
            session_time_zone: "UTC".to_string(),
        }
    }
}

impl CastConfig {
    /// Defaults with the PostgreSQL dialect selected
    pub fn postgres() -> Self {
        Self {
            dialect: SqlDialect::PostgreSql,
            ..Self::default()
        }
    }

    /// Parse from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> pgcast_diagnostics::Result<Self> {
        let config: Self = serde_json::from_str(json).map_err(|e| {
            PgCastError::configuration(PGC0401, format!("invalid cast config: {}", e))
        })?;
        config.session_zone().map_err(PgCastError::from)?;
        Ok(config)
    }

    /// The session zone id, validated
    pub fn session_zone(&self) -> EvalResult<ZoneId> {
        Ok(ZoneId::parse(&self.session_time_zone)?)
    }
}

/// Build the cast of `child` to `target` under `config`'s dialect
pub fn rewrite_cast(child: ExprRef, target: &DataType, config: &CastConfig) -> EvalResult<ExprRef> {
    let cast: ExprRef = match (config.dialect, target) {
        (SqlDialect::PostgreSql, DataType::Boolean) => Arc::new(PostgresCastToBoolean::new(child)),
        (SqlDialect::PostgreSql, DataType::Timestamp) => {
            Arc::new(PostgresCastToTimestamp::new(child))
        }
        _ => Arc::new(DefaultCast::new(child, target.clone(), config.ansi_enabled)?),
    };
    log::debug!("rewrote cast to {} under {} dialect", cast, config.dialect);
    Ok(cast)
}

/// Bind `zone` on every timezone-aware node without one
///
/// Already bound nodes keep their zone. Nodes that need no change are
/// returned as the same shared handle.
pub fn resolve_time_zone(expr: &ExprRef, zone: &ZoneId) -> EvalResult<ExprRef> {
    let children = expr.children();
    let node = if children.is_empty() {
        Arc::clone(expr)
    } else {
        let resolved = children
            .iter()
            .map(|child| resolve_time_zone(child, zone))
            .collect::<EvalResult<Vec<_>>>()?;
        let unchanged = resolved
            .iter()
            .zip(&children)
            .all(|(new, old)| Arc::ptr_eq(new, old));
        if unchanged {
            Arc::clone(expr)
        } else {
            expr.with_new_children(resolved)?
        }
    };

    let rebound = match node.as_time_zone_aware() {
        Some(aware) if aware.zone_id().is_none() => {
            log::trace!("resolving zone of {} to {}", node, zone);
            Some(aware.with_zone(zone.clone()))
        }
        _ => None,
    };
    Ok(rebound.unwrap_or(node))
}

/// Rewrite, resolve zones and type check a cast in one go
pub fn plan_cast(child: ExprRef, target: &DataType, config: &CastConfig) -> EvalResult<ExprRef> {
    let cast = rewrite_cast(child, target, config)?;
    let cast = resolve_time_zone(&cast, &config.session_zone()?)?;
    match check_tree(&cast) {
        TypeCheckResult::Success => Ok(cast),
        TypeCheckResult::Failure(message) => Err(EvalError::type_check(message)),
    }
}
