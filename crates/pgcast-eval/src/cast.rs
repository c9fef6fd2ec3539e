//! Cast expressions
//!
//! `PostgresCastToBoolean` and `PostgresCastToTimestamp` are the strict
//! PostgreSQL casts; `DefaultCast` is the host engine's cast they fall back
//! to for sources the dialect does not override. All three share one core:
//! NULL in gives NULL out, then the rule for the child's declared type does
//! the conversion under either backend.

use pgcast_types::{DataType, SourceTypeCheck, TypeCheckResult, TypeCoercer, Value, ZoneId};
use std::fmt;
use std::sync::{Arc, LazyLock};

use crate::codegen::{self, CodegenContext, ExprCode};
use crate::error::{EvalError, EvalResult};
use crate::expression::{ExprRef, Expression, Row, TimeZoneAware};
use crate::rules::CastRules;

static POSTGRES_BOOLEAN_RULES: LazyLock<Arc<CastRules>> =
    LazyLock::new(|| Arc::new(CastRules::postgres_boolean()));

static POSTGRES_TIMESTAMP_RULES: LazyLock<Arc<CastRules>> =
    LazyLock::new(|| Arc::new(CastRules::postgres_timestamp()));

/// Shape shared by every cast expression
pub trait CastContract: Expression + TimeZoneAware {
    /// The value being cast
    fn child(&self) -> &ExprRef;

    /// Whether malformed input is an error rather than NULL
    ///
    /// Dialect casts are always strict and refuse the question.
    fn ansi_enabled(&self) -> EvalResult<bool>;
}

#[derive(Debug, Clone)]
struct CastCore {
    name: &'static str,
    child: ExprRef,
    target: DataType,
    zone_id: Option<ZoneId>,
    rules: Arc<CastRules>,
}

impl CastCore {
    fn with_zone(&self, zone: ZoneId) -> Self {
        log::debug!("binding zone {} to {}", zone, self.display());
        Self {
            zone_id: Some(zone),
            ..self.clone()
        }
    }

    fn with_child(&self, mut children: Vec<ExprRef>) -> EvalResult<Self> {
        match (children.pop(), children.is_empty()) {
            (Some(child), true) => Ok(Self {
                child,
                ..self.clone()
            }),
            _ => Err(EvalError::internal(format!(
                "{} takes exactly one child",
                self.name
            ))),
        }
    }

    fn display(&self) -> String {
        format!("{}({} as {})", self.name, self.child, self.target)
    }

    fn sql(&self) -> String {
        format!("CAST({} AS {})", self.child.sql(), self.target.sql_name())
    }

    /// Zone handed to rules; an unbound zone fails before any value is read
    fn zone(&self) -> EvalResult<Option<&ZoneId>> {
        match &self.zone_id {
            None if self.target.needs_time_zone() => {
                Err(EvalError::zone_not_bound(self.display()))
            }
            zone => Ok(zone.as_ref()),
        }
    }

    fn eval(&self, row: &Row) -> EvalResult<Value> {
        let zone = self.zone()?;
        let input = self.child.eval(row)?;
        if input.is_null() {
            return Ok(Value::Null);
        }
        let source = self.child.data_type();
        self.rules.rule_for(&source).cast(&input, zone)
    }

    fn gen_code(&self, ctx: &mut dyn CodegenContext) -> EvalResult<ExprCode> {
        let zone = self.zone()?;
        let child = self.child.gen_code(ctx)?;
        let source = self.child.data_type();
        let input = ctx.fresh_name("input");
        let value = ctx.fresh_name("value");
        let convert = self
            .rules
            .rule_for(&source)
            .gen_code(ctx, &input, &source, zone)?;
        log::trace!("emitting {} as {}", self.display(), value);

        let mut code = child.code;
        code.push('\n');
        code.push_str(&format!(
            "let {value}: Option<{}> = match &{} {{\n    None => None,\n    Some({input}) => {{\n",
            codegen::rust_type(&self.target),
            child.value
        ));
        for line in convert.lines() {
            code.push_str("        ");
            code.push_str(line);
            code.push('\n');
        }
        code.push_str("    }\n};");
        Ok(ExprCode::new(code, value))
    }
}

macro_rules! impl_cast_expression {
    ($ty:ident) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.core.display())
            }
        }

        impl Expression for $ty {
            fn data_type(&self) -> DataType {
                self.core.target.clone()
            }

            fn nullable(&self) -> bool {
                self.result_nullable()
            }

            fn children(&self) -> Vec<ExprRef> {
                vec![self.core.child.clone()]
            }

            fn with_new_children(&self, children: Vec<ExprRef>) -> EvalResult<ExprRef> {
                Ok(Arc::new(Self {
                    core: self.core.with_child(children)?,
                    ..self.clone()
                }))
            }

            fn check_input_data_types(&self) -> TypeCheckResult {
                let result = self.check_source(&self.core.child.data_type());
                if let TypeCheckResult::Failure(message) = &result {
                    log::debug!("{} rejected: {}", self, message);
                }
                result
            }

            fn eval(&self, row: &Row) -> EvalResult<Value> {
                self.core.eval(row)
            }

            fn gen_code(&self, ctx: &mut dyn CodegenContext) -> EvalResult<ExprCode> {
                self.core.gen_code(ctx)
            }

            fn sql(&self) -> String {
                self.core.sql()
            }

            fn as_time_zone_aware(&self) -> Option<&dyn TimeZoneAware> {
                Some(self)
            }
        }

        impl TimeZoneAware for $ty {
            fn zone_id(&self) -> Option<&ZoneId> {
                self.core.zone_id.as_ref()
            }

            fn with_zone(&self, zone: ZoneId) -> ExprRef {
                Arc::new(Self {
                    core: self.core.with_zone(zone),
                    ..self.clone()
                })
            }

            fn needs_time_zone(&self) -> bool {
                self.core.target.needs_time_zone()
            }
        }
    };
}

/// PostgreSQL `CAST(x AS BOOLEAN)`
#[derive(Debug, Clone)]
pub struct PostgresCastToBoolean {
    core: CastCore,
}

impl PostgresCastToBoolean {
    pub const NAME: &'static str = "PostgreCastToBoolean";

    pub fn new(child: ExprRef) -> Self {
        Self::with_zone_id(child, None)
    }

    pub fn with_zone_id(child: ExprRef, zone_id: Option<ZoneId>) -> Self {
        Self {
            core: CastCore {
                name: Self::NAME,
                child,
                target: DataType::Boolean,
                zone_id,
                rules: Arc::clone(&POSTGRES_BOOLEAN_RULES),
            },
        }
    }

    fn check_source(&self, source: &DataType) -> TypeCheckResult {
        SourceTypeCheck::postgres_boolean().check(source)
    }

    fn result_nullable(&self) -> bool {
        self.core.child.nullable()
    }
}

impl_cast_expression!(PostgresCastToBoolean);

impl CastContract for PostgresCastToBoolean {
    fn child(&self) -> &ExprRef {
        &self.core.child
    }

    fn ansi_enabled(&self) -> EvalResult<bool> {
        Err(EvalError::ansi_mode_unsupported(Self::NAME))
    }
}

/// PostgreSQL `CAST(x AS TIMESTAMP)`
#[derive(Debug, Clone)]
pub struct PostgresCastToTimestamp {
    core: CastCore,
}

impl PostgresCastToTimestamp {
    pub const NAME: &'static str = "PostgreCastToTimestamp";

    /// Cast whose zone is bound later by zone resolution
    pub fn new(child: ExprRef) -> Self {
        Self::with_zone_id(child, None)
    }

    pub fn with_zone_id(child: ExprRef, zone_id: Option<ZoneId>) -> Self {
        Self {
            core: CastCore {
                name: Self::NAME,
                child,
                target: DataType::Timestamp,
                zone_id,
                rules: Arc::clone(&POSTGRES_TIMESTAMP_RULES),
            },
        }
    }

    fn check_source(&self, source: &DataType) -> TypeCheckResult {
        SourceTypeCheck::postgres_timestamp().check(source)
    }

    fn result_nullable(&self) -> bool {
        self.core.child.nullable()
    }
}

impl_cast_expression!(PostgresCastToTimestamp);

impl CastContract for PostgresCastToTimestamp {
    fn child(&self) -> &ExprRef {
        &self.core.child
    }

    fn ansi_enabled(&self) -> EvalResult<bool> {
        Err(EvalError::ansi_mode_unsupported(Self::NAME))
    }
}

/// Host engine `CAST(x AS <target>)`
#[derive(Debug, Clone)]
pub struct DefaultCast {
    core: CastCore,
    ansi_enabled: bool,
}

impl DefaultCast {
    pub const NAME: &'static str = "cast";

    pub fn new(child: ExprRef, target: DataType, ansi_enabled: bool) -> EvalResult<Self> {
        let rules = CastRules::host(&target, ansi_enabled)
            .map_err(|_| EvalError::unsupported_cast(&child.data_type(), &target))?;
        Ok(Self {
            core: CastCore {
                name: Self::NAME,
                child,
                target,
                zone_id: None,
                rules: Arc::new(rules),
            },
            ansi_enabled,
        })
    }

    fn check_source(&self, source: &DataType) -> TypeCheckResult {
        TypeCoercer::new().check_cast(source, &self.core.target)
    }

    /// Permissive casts turn malformed strings into NULL
    fn result_nullable(&self) -> bool {
        let source = self.core.child.data_type();
        self.core.child.nullable()
            || (!self.ansi_enabled && source == DataType::String)
            || (source == DataType::Date && self.core.target == DataType::Boolean)
    }
}

impl_cast_expression!(DefaultCast);

impl CastContract for DefaultCast {
    fn child(&self) -> &ExprRef {
        &self.core.child
    }

    fn ansi_enabled(&self) -> EvalResult<bool> {
        Ok(self.ansi_enabled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codegen::FragmentContext;
    use crate::expression::{BoundReference, Literal};
    use pretty_assertions::assert_eq;

    fn string_column() -> ExprRef {
        BoundReference::new(0, DataType::String, true)
            .named("a")
            .into_ref()
    }

    #[test]
    fn test_rendering() {
        let cast = PostgresCastToBoolean::new(string_column());
        assert_eq!(cast.to_string(), "PostgreCastToBoolean(a#0 as boolean)");
        assert_eq!(cast.sql(), "CAST(a AS BOOLEAN)");

        let cast = PostgresCastToTimestamp::new(Literal::new("2020-01-01").into_ref());
        assert_eq!(
            cast.to_string(),
            "PostgreCastToTimestamp(2020-01-01 as timestamp)"
        );
        assert_eq!(cast.sql(), "CAST('2020-01-01' AS TIMESTAMP)");

        let cast = DefaultCast::new(string_column(), DataType::Boolean, false).unwrap();
        assert_eq!(cast.to_string(), "cast(a#0 as boolean)");
    }

    #[test]
    fn test_nullability_follows_child() {
        let not_null = BoundReference::new(0, DataType::String, false).into_ref();
        assert!(!PostgresCastToBoolean::new(not_null.clone()).nullable());
        assert!(PostgresCastToBoolean::new(string_column()).nullable());
        // The permissive host cast can still produce NULL.
        assert!(DefaultCast::new(not_null, DataType::Boolean, false).unwrap().nullable());
    }

    #[test]
    fn test_ansi_mode_is_refused_by_dialect_casts() {
        let cast = PostgresCastToBoolean::new(string_column());
        assert_eq!(
            cast.ansi_enabled(),
            Err(EvalError::ansi_mode_unsupported("PostgreCastToBoolean"))
        );
        let cast = DefaultCast::new(string_column(), DataType::Timestamp, true).unwrap();
        assert_eq!(cast.ansi_enabled(), Ok(true));
    }

    #[test]
    fn test_unbound_zone_fails_both_backends() {
        let cast = PostgresCastToTimestamp::new(Literal::new("2020-01-01").into_ref());
        let expected = EvalError::zone_not_bound("PostgreCastToTimestamp(2020-01-01 as timestamp)");
        assert_eq!(cast.eval(&[]), Err(expected.clone()));
        assert_eq!(cast.gen_code(&mut FragmentContext::new()), Err(expected));
    }

    #[test]
    fn test_boolean_cast_needs_no_zone() {
        let cast = PostgresCastToBoolean::new(Literal::new("yes").into_ref());
        assert!(!cast.needs_time_zone());
        assert_eq!(cast.eval(&[]), Ok(Value::Boolean(true)));
    }

    #[test]
    fn test_with_new_children() {
        let cast = PostgresCastToBoolean::new(string_column());
        let replaced = cast
            .with_new_children(vec![Literal::new(0).into_ref()])
            .unwrap();
        assert_eq!(replaced.to_string(), "PostgreCastToBoolean(0 as boolean)");
        assert!(cast.with_new_children(vec![]).is_err());
    }

    #[test]
    fn test_gen_code_layout() {
        let mut ctx = FragmentContext::new();
        let cast = PostgresCastToBoolean::new(Literal::new(7).into_ref());
        let code = cast.gen_code(&mut ctx).unwrap();
        assert_eq!(code.value, "value_2");
        assert_eq!(
            code.code,
            "let literal_0: Option<i32> = Some(7i32);\n\
             let value_2: Option<bool> = match &literal_0 {\n    \
             None => None,\n    \
             Some(input_1) => {\n        \
             Some(*input_1 != 0)\n    \
             }\n\
             };"
        );
    }
}
