//! Command implementations driven without a process
//!
//! Exercises the emit and check commands the `pgcast` binary dispatches to.

#![cfg(feature = "cli")]

use pgcast::cli::check::{CheckConfig, check_sources};
use pgcast::cli::config::ConfigOverrides;
use pgcast::cli::emit::{EmitConfig, render};
use pgcast::cli::input;
use pgcast::types::{DataType, TypeCheckResult, Value};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn postgres() -> ConfigOverrides {
    ConfigOverrides {
        dialect: Some("postgresql".to_string()),
        ..Default::default()
    }
}

fn emit_config(target: &str, from: &str, literal: Option<&str>) -> EmitConfig {
    EmitConfig {
        target: target.to_string(),
        from: from.to_string(),
        literal: literal.map(str::to_string),
        name: "cast_fn".to_string(),
        references: false,
        output_file: None,
        overrides: postgres(),
    }
}

// ============================================================================
// Emit
// ============================================================================

#[test]
fn test_emit_names_function() {
    let unit = render(&emit_config("boolean", "int", None)).unwrap();
    assert!(unit.contains("pub fn cast_fn("));
    assert!(unit.contains("::pgcast_eval::runtime::read_integer(row, 0)?"));
    assert!(unit.contains("Some(*input_1 != 0)"));
}

#[test]
fn test_emit_literal_has_no_column_reads() {
    let unit = render(&emit_config("boolean", "string", Some("yes"))).unwrap();
    assert!(unit.starts_with("// PostgreCastToBoolean(yes as boolean)\n"));
    assert!(!unit.contains("read_string"));
}

#[test]
fn test_emit_binds_session_zone() {
    let mut config = emit_config("timestamp", "string", None);
    config.overrides.zone = Some("+08:00".to_string());
    config.references = true;
    let unit = render(&config).unwrap();
    assert!(unit.contains("::pgcast_eval::runtime::string_to_timestamp("));
    assert!(unit.contains("\"value\": \"+08:00\""));
}

#[test]
fn test_emit_rejects_unknown_zone() {
    let mut config = emit_config("timestamp", "string", None);
    config.overrides.zone = Some("Mars/Olympus".to_string());
    assert!(render(&config).is_err());
}

// ============================================================================
// Check
// ============================================================================

#[rstest]
#[case("timestamp", "date", TypeCheckResult::Success)]
#[case("timestamp", "int", TypeCheckResult::Failure("cannot cast type int to timestamp".to_string()))]
#[case("boolean", "void", TypeCheckResult::Success)]
#[case("boolean", "bigint", TypeCheckResult::Failure("cannot cast type bigint to boolean".to_string()))]
fn test_check_sources(#[case] target: &str, #[case] source: &str, #[case] expected: TypeCheckResult) {
    let config = CheckConfig {
        target: target.to_string(),
        sources: vec![source.to_string()],
        overrides: postgres(),
    };
    let results = check_sources(&config).unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].result, expected);
}

#[test]
fn test_check_unknown_type() {
    let config = CheckConfig {
        target: "boolean".to_string(),
        sources: vec!["uuid".to_string()],
        overrides: postgres(),
    };
    assert!(check_sources(&config).is_err());
}

// ============================================================================
// Input
// ============================================================================

#[rstest]
#[case("int", "42", Value::Integer(42))]
#[case("string", " t ", Value::string(" t "))]
#[case("void", "anything", Value::Null)]
fn test_parse_value(#[case] type_name: &str, #[case] text: &str, #[case] expected: Value) {
    let data_type = input::parse_type(type_name).unwrap();
    assert_eq!(input::parse_value(text, &data_type).unwrap(), expected);
}

#[test]
fn test_parse_value_rejects_bad_int() {
    assert!(input::parse_value("forty", &DataType::Integer).is_err());
}
