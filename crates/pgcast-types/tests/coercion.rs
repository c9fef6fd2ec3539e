//! Cast compatibility tests for the pgcast type system
//!
//! Tests source type validation without ever touching values:
//! - PostgreSQL allow-lists for boolean and timestamp casts
//! - Host engine cast rules
//! - Zone ids accepted by timezone-aware casts

use pgcast_types::*;
use pretty_assertions::assert_eq;
use rstest::rstest;

// === PostgreSQL Allow-Lists ===

#[rstest]
#[case(DataType::String, true)]
#[case(DataType::Integer, true)]
#[case(DataType::Null, true)]
#[case(DataType::Boolean, false)]
#[case(DataType::Long, false)]
#[case(DataType::Double, false)]
#[case(DataType::Date, false)]
#[case(DataType::Timestamp, false)]
#[case(DataType::array(DataType::String), false)]
fn test_boolean_sources(#[case] source: DataType, #[case] accepted: bool) {
    let result = SourceTypeCheck::postgres_boolean().check(&source);
    assert_eq!(result.is_success(), accepted, "{}", source);
}

#[rstest]
#[case(DataType::String, true)]
#[case(DataType::Date, true)]
#[case(DataType::Null, false)]
#[case(DataType::Integer, false)]
#[case(DataType::Long, false)]
#[case(DataType::Timestamp, false)]
#[case(DataType::array(DataType::Date), false)]
fn test_timestamp_sources(#[case] source: DataType, #[case] accepted: bool) {
    let result = SourceTypeCheck::postgres_timestamp().check(&source);
    assert_eq!(result.is_success(), accepted, "{}", source);
}

#[test]
fn test_failure_names_source_and_target() {
    let result = SourceTypeCheck::postgres_boolean().check(&DataType::Date);
    assert_eq!(result.message(), Some("cannot cast type date to boolean"));

    let result = SourceTypeCheck::postgres_timestamp().check(&DataType::array(DataType::Integer));
    assert_eq!(result.message(), Some("cannot cast type array<int> to timestamp"));
}

#[test]
fn test_custom_allow_list() {
    let check = SourceTypeCheck::new(DataType::Boolean, vec![DataType::Long]);
    assert_eq!(check.target(), &DataType::Boolean);
    assert_eq!(check.allowed(), &[DataType::Long]);
    assert!(check.check(&DataType::Long).is_success());
    assert!(check.check(&DataType::String).is_failure());
}

// === Host Rules ===

#[test]
fn test_dialect_lists_are_narrower_than_host() {
    let coercer = TypeCoercer::new();
    for check in [
        SourceTypeCheck::postgres_boolean(),
        SourceTypeCheck::postgres_timestamp(),
    ] {
        for source in check.allowed() {
            assert!(
                coercer.can_cast(source, check.target()),
                "{} -> {}",
                source,
                check.target()
            );
        }
    }
}

#[test]
fn test_host_failure_message() {
    let result = TypeCoercer::new().check_cast(&DataType::Timestamp, &DataType::Boolean);
    assert_eq!(result.message(), Some("cannot cast timestamp to boolean"));
}

// === Zone Ids ===

#[rstest]
#[case("UTC", 0)]
#[case("Z", 0)]
#[case("Etc/GMT", 0)]
#[case("+08:00", 8 * 3600)]
#[case("-0530", -(5 * 3600 + 30 * 60))]
#[case("GMT+3", 3 * 3600)]
#[case("UTC-01:30", -(3600 + 30 * 60))]
fn test_zone_offsets(#[case] id: &str, #[case] offset: i32) {
    assert_eq!(ZoneId::parse(id).unwrap().offset_seconds(), offset);
}

#[rstest]
#[case("")]
#[case("America/New_York")]
#[case("+25:00")]
fn test_zone_rejects(#[case] id: &str) {
    assert!(ZoneId::parse(id).is_err());
}

#[test]
fn test_zone_serializes_as_id() {
    let zone = ZoneId::parse("+02:00").unwrap();
    let json = serde_json::to_string(&zone).unwrap();
    let back: ZoneId = serde_json::from_str(&json).unwrap();
    assert_eq!(back, zone);
    assert!(serde_json::from_str::<ZoneId>("\"Mars/Olympus\"").is_err());
}
