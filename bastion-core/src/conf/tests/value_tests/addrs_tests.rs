use crate::conf::values::{AddrError, parse_addrs};
use hcl::Value;
use ipnet::IpNet;
use pretty_assertions::assert_eq;

fn net(s: &str) -> IpNet {
    s.parse().unwrap()
}

#[test]
fn parse_comma_separated_string() {
    // Arrange
    let raw = Value::from("127.0.0.1, 10.0.0.0/8 ,::1");

    // Act
    let addrs = parse_addrs(&raw).unwrap();

    // Assert
    assert_eq!(
        addrs,
        vec![net("127.0.0.1/32"), net("10.0.0.0/8"), net("::1/128")]
    );
}

#[test]
fn parse_list_of_strings() {
    let raw = Value::Array(vec![Value::from("192.168.0.0/16"), Value::from("fd00::/8")]);

    assert_eq!(
        parse_addrs(&raw).unwrap(),
        vec![net("192.168.0.0/16"), net("fd00::/8")]
    );
}

#[test]
fn parse_empty_list_is_empty() {
    assert_eq!(parse_addrs(&Value::Array(vec![])).unwrap(), Vec::<IpNet>::new());
}

#[test]
fn parse_blank_string_fails() {
    assert_eq!(
        parse_addrs(&Value::from(" , ")).unwrap_err(),
        AddrError::Empty {
            input: " , ".to_string()
        }
    );
}

#[test]
fn parse_invalid_address_fails() {
    // Act
    let err = parse_addrs(&Value::from("10.0.0.1,not-an-ip")).unwrap_err();

    // Assert
    assert!(matches!(&err, AddrError::Invalid { addr, .. } if addr == "not-an-ip"));
    assert!(err.to_string().starts_with("error parsing address \"not-an-ip\": "));
}

#[test]
fn parse_non_string_entries_fail() {
    let raw = Value::Array(vec![Value::from("10.0.0.1"), Value::from(true)]);

    assert_eq!(
        parse_addrs(&raw).unwrap_err(),
        AddrError::NotAString {
            value: "true".to_string()
        }
    );
}

#[test]
fn parse_unsupported_type_fails() {
    assert_eq!(
        parse_addrs(&Value::from(42i64)).unwrap_err(),
        AddrError::UnsupportedType { kind: "number" }
    );
}
