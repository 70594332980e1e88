use crate::conf::values::{CipherError, cipher_suite_name, parse_ciphers};
use pretty_assertions::assert_eq;

#[test]
fn parse_single_cipher() {
    assert_eq!(
        parse_ciphers("TLS_RSA_WITH_AES_128_CBC_SHA").unwrap(),
        vec![0x002f]
    );
}

#[test]
fn parse_cipher_list_keeps_order() {
    // Arrange
    let raw = " TLS_ECDHE_RSA_WITH_AES_256_GCM_SHA384 , TLS_AES_128_GCM_SHA256,,";

    // Act
    let suites = parse_ciphers(raw).unwrap();

    // Assert
    assert_eq!(suites, vec![0xc030, 0x1301]);
}

#[test]
fn parse_cipher_list_colon_separated() {
    assert_eq!(
        parse_ciphers("TLS_AES_128_GCM_SHA256:TLS_CHACHA20_POLY1305_SHA256").unwrap(),
        vec![0x1301, 0x1303]
    );
}

#[test]
fn parse_cipher_hex_ids() {
    assert_eq!(parse_ciphers("0xc02f,0X1302").unwrap(), vec![0xc02f, 0x1302]);
    assert_eq!(
        parse_ciphers("0x1234").unwrap_err(),
        CipherError::Unsupported("0x1234".to_string())
    );
}

#[test]
fn parse_unknown_cipher_fails() {
    // Act
    let err = parse_ciphers("TLS_AES_128_GCM_SHA256,bogus_suite").unwrap_err();

    // Assert
    assert_eq!(err, CipherError::Unsupported("bogus_suite".to_string()));
    assert_eq!(err.to_string(), "unsupported cipher \"bogus_suite\"");
}

#[test]
fn parse_empty_cipher_list() {
    assert_eq!(parse_ciphers("").unwrap(), Vec::<u16>::new());
}

#[test]
fn cipher_names_by_id() {
    assert_eq!(
        cipher_suite_name(0x002f),
        Some("TLS_RSA_WITH_AES_128_CBC_SHA")
    );
    assert_eq!(
        cipher_suite_name(0xcca8),
        Some("TLS_ECDHE_RSA_WITH_CHACHA20_POLY1305_SHA256")
    );
    assert_eq!(cipher_suite_name(0x0000), None);
}
