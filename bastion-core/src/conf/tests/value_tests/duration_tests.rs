use crate::conf::values::{DurationError, GoDuration, parse_duration, parse_duration_second};
use hcl::Value;
use pretty_assertions::assert_eq;
use std::time::Duration;

fn secs(n: i64) -> GoDuration {
    GoDuration::from_secs(n).unwrap()
}

fn millis(n: i64) -> GoDuration {
    GoDuration::from_nanos(n * 1_000_000)
}

#[test]
fn parse_duration_literals() {
    assert_eq!(parse_duration("30s").unwrap(), secs(30));
    assert_eq!(parse_duration("5m").unwrap(), secs(300));
    assert_eq!(parse_duration("1h30m").unwrap(), secs(5400));
    assert_eq!(parse_duration("2h45m10s").unwrap(), secs(9910));
    assert_eq!(parse_duration("300ms").unwrap(), millis(300));
    assert_eq!(parse_duration("1.5s").unwrap(), millis(1500));
    assert_eq!(parse_duration(".5s").unwrap(), millis(500));
    assert_eq!(parse_duration("10us").unwrap(), GoDuration::from_nanos(10_000));
    assert_eq!(parse_duration("10µs").unwrap(), GoDuration::from_nanos(10_000));
    assert_eq!(parse_duration("7ns").unwrap(), GoDuration::from_nanos(7));
    assert_eq!(parse_duration("0").unwrap(), GoDuration::ZERO);
}

#[test]
fn parse_duration_signed() {
    assert_eq!(parse_duration("-5s").unwrap(), secs(-5));
    assert_eq!(parse_duration("+5s").unwrap(), secs(5));
    assert!(parse_duration("-1.5h").unwrap().is_negative());
}

#[test]
fn parse_duration_rejects_malformed_literals() {
    assert_eq!(
        parse_duration("").unwrap_err(),
        DurationError::InvalidLiteral {
            input: "".to_string()
        }
    );
    assert_eq!(
        parse_duration("10").unwrap_err(),
        DurationError::MissingUnit {
            input: "10".to_string()
        }
    );
    assert_eq!(
        parse_duration("5d").unwrap_err(),
        DurationError::UnknownUnit {
            unit: "d".to_string(),
            input: "5d".to_string()
        }
    );
    assert!(matches!(
        parse_duration("s").unwrap_err(),
        DurationError::InvalidLiteral { .. }
    ));
    assert!(matches!(
        parse_duration("-").unwrap_err(),
        DurationError::InvalidLiteral { .. }
    ));
}

#[test]
fn parse_duration_rejects_overflow() {
    assert!(matches!(
        parse_duration("9999999999999h").unwrap_err(),
        DurationError::InvalidLiteral { .. }
    ));
}

#[test]
fn parse_duration_second_accepts_numbers_as_seconds() {
    assert_eq!(parse_duration_second(&Value::from(30i64)).unwrap(), secs(30));
    assert_eq!(parse_duration_second(&Value::from(-5i64)).unwrap(), secs(-5));
    // fractional seconds are truncated
    assert_eq!(parse_duration_second(&Value::from(2.9f64)).unwrap(), secs(2));
}

#[test]
fn parse_duration_second_accepts_strings() {
    assert_eq!(parse_duration_second(&Value::from("10s")).unwrap(), secs(10));
    assert_eq!(parse_duration_second(&Value::from("10")).unwrap(), secs(10));
    assert_eq!(parse_duration_second(&Value::from("-10")).unwrap(), secs(-10));
    assert_eq!(parse_duration_second(&Value::from("250ms")).unwrap(), millis(250));
    assert_eq!(
        parse_duration_second(&Value::from("")).unwrap(),
        GoDuration::ZERO
    );
}

#[test]
fn parse_duration_second_rejects_garbage() {
    // Arrange
    let input = Value::from("notaduration");

    // Act
    let err = parse_duration_second(&input).unwrap_err();

    // Assert
    assert_eq!(
        err,
        DurationError::InvalidSeconds {
            input: "notaduration".to_string()
        }
    );
    assert_eq!(err.to_string(), "invalid number of seconds \"notaduration\"");
}

#[test]
fn parse_duration_second_rejects_other_types() {
    assert_eq!(
        parse_duration_second(&Value::from(true)).unwrap_err(),
        DurationError::UnsupportedType { kind: "bool" }
    );
    assert_eq!(
        parse_duration_second(&Value::Array(vec![])).unwrap_err(),
        DurationError::UnsupportedType { kind: "list" }
    );
}

#[test]
fn duration_display_matches_literal_syntax() {
    assert_eq!(GoDuration::ZERO.to_string(), "0s");
    assert_eq!(secs(90).to_string(), "1m30s");
    assert_eq!(secs(3600).to_string(), "1h0m0s");
    assert_eq!(millis(1500).to_string(), "1.5s");
    assert_eq!(millis(250).to_string(), "250ms");
    assert_eq!(GoDuration::from_nanos(1_500).to_string(), "1.5µs");
    assert_eq!(GoDuration::from_nanos(42).to_string(), "42ns");
    assert_eq!(secs(-5).to_string(), "-5s");
}

#[test]
fn duration_display_round_trips_through_parser() {
    for d in [secs(5400), millis(1500), secs(-90), GoDuration::from_nanos(1_500)] {
        assert_eq!(parse_duration(&d.to_string()).unwrap(), d);
    }
}

#[test]
fn duration_std_conversion() {
    assert_eq!(secs(10).as_std(), Some(Duration::from_secs(10)));
    assert_eq!(secs(-10).as_std(), None);
    assert_eq!(GoDuration::from(Duration::from_millis(5)), millis(5));
}
