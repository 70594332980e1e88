use thiserror::Error;

/// Cipher suites accepted by `tls_cipher_suites`, by IANA name.
const CIPHER_SUITES: &[(&str, u16)] = &[
    // TLS 1.0 - 1.2
    ("TLS_RSA_WITH_RC4_128_SHA", 0x0005),
    ("TLS_RSA_WITH_3DES_EDE_CBC_SHA", 0x000a),
    ("TLS_RSA_WITH_AES_128_CBC_SHA", 0x002f),
    ("TLS_RSA_WITH_AES_256_CBC_SHA", 0x0035),
    ("TLS_RSA_WITH_AES_128_CBC_SHA256", 0x003c),
    ("TLS_RSA_WITH_AES_128_GCM_SHA256", 0x009c),
    ("TLS_RSA_WITH_AES_256_GCM_SHA384", 0x009d),
    ("TLS_ECDHE_ECDSA_WITH_RC4_128_SHA", 0xc007),
    ("TLS_ECDHE_ECDSA_WITH_AES_128_CBC_SHA", 0xc009),
    ("TLS_ECDHE_ECDSA_WITH_AES_256_CBC_SHA", 0xc00a),
    ("TLS_ECDHE_RSA_WITH_RC4_128_SHA", 0xc011),
    ("TLS_ECDHE_RSA_WITH_3DES_EDE_CBC_SHA", 0xc012),
    ("TLS_ECDHE_RSA_WITH_AES_128_CBC_SHA", 0xc013),
    ("TLS_ECDHE_RSA_WITH_AES_256_CBC_SHA", 0xc014),
    ("TLS_ECDHE_ECDSA_WITH_AES_128_CBC_SHA256", 0xc023),
    ("TLS_ECDHE_RSA_WITH_AES_128_CBC_SHA256", 0xc027),
    ("TLS_ECDHE_ECDSA_WITH_AES_128_GCM_SHA256", 0xc02b),
    ("TLS_ECDHE_ECDSA_WITH_AES_256_GCM_SHA384", 0xc02c),
    ("TLS_ECDHE_RSA_WITH_AES_128_GCM_SHA256", 0xc02f),
    ("TLS_ECDHE_RSA_WITH_AES_256_GCM_SHA384", 0xc030),
    ("TLS_ECDHE_RSA_WITH_CHACHA20_POLY1305_SHA256", 0xcca8),
    ("TLS_ECDHE_ECDSA_WITH_CHACHA20_POLY1305_SHA256", 0xcca9),
    // Legacy short names for the two ChaCha20 suites above.
    ("TLS_ECDHE_RSA_WITH_CHACHA20_POLY1305", 0xcca8),
    ("TLS_ECDHE_ECDSA_WITH_CHACHA20_POLY1305", 0xcca9),
    // TLS 1.3
    ("TLS_AES_128_GCM_SHA256", 0x1301),
    ("TLS_AES_256_GCM_SHA384", 0x1302),
    ("TLS_CHACHA20_POLY1305_SHA256", 0x1303),
];

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CipherError {
    #[error("unsupported cipher {0:?}")]
    Unsupported(String),
}

/// Parses a comma or colon separated list of cipher suite names into their
/// 16-bit identifiers, preserving order.
///
/// Entries may also be given as hex identifiers (`0xc02f`) as long as the
/// identifier is a known suite. Blank entries are skipped.
pub fn parse_ciphers(raw: &str) -> Result<Vec<u16>, CipherError> {
    raw.split([',', ':'])
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(|name| lookup(name).ok_or_else(|| CipherError::Unsupported(name.to_owned())))
        .collect()
}

/// Returns the canonical name of a supported cipher suite.
pub fn cipher_suite_name(id: u16) -> Option<&'static str> {
    CIPHER_SUITES
        .iter()
        .find(|(_, suite)| *suite == id)
        .map(|(name, _)| *name)
}

fn lookup(name: &str) -> Option<u16> {
    if let Some(hex) = name
        .strip_prefix("0x")
        .or_else(|| name.strip_prefix("0X"))
    {
        let id = u16::from_str_radix(hex, 16).ok()?;
        return cipher_suite_name(id).map(|_| id);
    }

    CIPHER_SUITES
        .iter()
        .find(|(candidate, _)| *candidate == name)
        .map(|(_, id)| *id)
}
