//! Tests for the date/time literal grammar
//!
//! Covers:
//! - Date-only literals
//! - Date-times with and without seconds, fractions and offsets
//! - Error offsets and expectations for malformed text

use gql_date_diagnostics::Span;
use gql_date_parser::{Component, DateTimeLiteral, TimeOfDay, parse_date_literal};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;

fn parse_ok(input: &str) -> DateTimeLiteral {
    parse_date_literal(input).unwrap_or_else(|e| panic!("Failed to parse '{}': {}", input, e))
}

#[test]
fn test_date_only() {
    let lit = parse_ok("2018-07-24");
    assert_eq!((lit.year, lit.month, lit.day), (2018, 7, 24));
    assert!(lit.is_date_only());
    assert_eq!(lit.timezone_offset, None);
}

#[test]
fn test_datetime_with_zulu_and_millis() {
    let lit = parse_ok("2015-12-01T14:15:07.123Z");
    assert_eq!(
        lit.time,
        Some(TimeOfDay::new(14, 15, 7).with_nanosecond(123_000_000))
    );
    assert_eq!(lit.timezone_offset, Some(0));
    assert_eq!(lit.span_of(Component::Offset), Some(Span::point(23)));
}

#[test]
fn test_datetime_with_compact_offset() {
    let lit = parse_ok("2015-11-21T19:59:32.987+0200");
    assert_eq!(lit.timezone_offset, Some(120));
    assert_eq!(lit.offset_start, Some(23));
}

#[test]
fn test_round_trip_pattern_fraction() {
    // seven fraction digits, as produced by round-trip ("O") formatting
    let lit = parse_ok("2024-03-15T12:30:45.1234567-07:00");
    let time = lit.time.unwrap();
    assert_eq!(time.nanosecond, 123_456_700);
    assert_eq!(lit.timezone_offset, Some(-420));
}

#[rstest]
#[case("2015-12-01T14:15", 14, 15, 0, 0)]
#[case("2015-12-01t14:15:07", 14, 15, 7, 0)]
#[case("2015-12-01 14:15:07.5", 14, 15, 7, 500_000_000)]
#[case("2015-12-01T00:00:00.000000001", 0, 0, 0, 1)]
fn test_time_forms(
    #[case] input: &str,
    #[case] hour: u8,
    #[case] minute: u8,
    #[case] second: u8,
    #[case] nanosecond: u32,
) {
    let lit = parse_ok(input);
    assert_eq!(
        lit.time,
        Some(TimeOfDay::new(hour, minute, second).with_nanosecond(nanosecond))
    );
    assert_eq!(lit.timezone_offset, None);
}

#[rstest]
#[case("2015-12-01T10:00Z", 0)]
#[case("2015-12-01T10:00z", 0)]
#[case("2015-12-01T10:00+02:00", 120)]
#[case("2015-12-01T10:00+0200", 120)]
#[case("2015-12-01T10:00+02", 120)]
#[case("2015-12-01T10:00-05:30", -330)]
#[case("2015-12-01T10:00:00-00:00", 0)]
fn test_offset_forms(#[case] input: &str, #[case] minutes: i16) {
    assert_eq!(parse_ok(input).timezone_offset, Some(minutes));
}

#[test]
fn test_shape_only_no_range_checks() {
    // range validation belongs to the caller
    let lit = parse_ok("2012-12-32T25:61:61+99:00");
    assert_eq!((lit.month, lit.day), (12, 32));
    assert_eq!(lit.time, Some(TimeOfDay::new(25, 61, 61)));
    assert_eq!(lit.timezone_offset, Some(99 * 60));
}

#[rstest]
#[case("some unknown date", 0, Some('s'), "4-digit year")]
#[case("Dec 32 2012", 0, Some('D'), "4-digit year")]
#[case("2015-12-01x", 10, Some('x'), "end of input")]
#[case("2015-12-01T", 11, None, "2-digit hour")]
#[case("2015-12-01T14:15:07.Z", 20, Some('Z'), "fraction digits")]
#[case("2015-12-01T14:15:07.1234567890Z", 29, Some('0'), "end of input")]
#[case("2015-11-21T19:59:32.987+2", 24, Some('2'), "2-digit offset hours")]
#[case("2015-12-1", 8, Some('1'), "2-digit day")]
#[case(" 2015-12-01", 0, Some(' '), "4-digit year")]
#[case("2015-12-01Z", 10, Some('Z'), "end of input")]
#[case("2015-12-01T10:00+01:75", 20, Some('7'), "offset minutes 00-59")]
fn test_errors_point_at_failure(
    #[case] input: &str,
    #[case] offset: usize,
    #[case] found: Option<char>,
    #[case] expected: &str,
) {
    let err = parse_date_literal(input).expect_err(input);
    assert_eq!(err.offset, offset, "offset for {input}");
    assert_eq!(err.found, found, "found for {input}");
    assert!(
        err.expected.iter().any(|e| e == expected),
        "expected {:?} in {:?} for {}",
        expected,
        err.expected,
        input
    );
}

#[test]
fn test_non_ascii_digits_rejected() {
    // Arabic-Indic digits are digits to Unicode, not to this grammar
    let err = parse_date_literal("٢٠١٥-12-01").unwrap_err();
    assert_eq!(err.offset, 0);
    assert_eq!(err.span(), Span::new(0, 2));
}

#[test]
fn test_error_message() {
    let err = parse_date_literal("2015-12-01x").unwrap_err();
    assert_eq!(
        err.to_string(),
        "unexpected character 'x', expected end of input"
    );
}

proptest! {
    #[test]
    fn canonical_form_parses_back(
        year in 1u16..=9999,
        month in 1u8..=12,
        day in 1u8..=28,
        hour in 0u8..=23,
        minute in 0u8..=59,
        second in 0u8..=59,
        nanosecond in 0u32..1_000_000_000,
        offset in -840i16..=840,
    ) {
        let lit = DateTimeLiteral::date(year, month, day)
            .with_time(TimeOfDay::new(hour, minute, second).with_nanosecond(nanosecond))
            .with_timezone(offset);
        let parsed = parse_date_literal(&lit.to_string()).unwrap();

        prop_assert_eq!(
            (parsed.year, parsed.month, parsed.day, parsed.time, parsed.timezone_offset),
            (lit.year, lit.month, lit.day, lit.time, lit.timezone_offset)
        );
    }

    #[test]
    fn arbitrary_text_never_panics(text in "\\PC{0,40}") {
        let _ = parse_date_literal(&text);
    }
}
