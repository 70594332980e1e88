use crate::conf::values::{AddrError, CipherError, DurationError};
use thiserror::Error;

/// A problem with a single listener block.
#[derive(Debug, Error)]
pub enum ListenerError {
    //-------------------------------------------------------------------------
    // Decoding
    //-------------------------------------------------------------------------
    #[error("failed to decode listener block: {source}")]
    Decode {
        #[source]
        source: hcl::Error,
    },

    #[error("failed to decode raw listener block: {source}")]
    DecodeRaw {
        #[source]
        source: hcl::Error,
    },

    #[error("unsupported listener type {kind:?}")]
    UnsupportedType { kind: String },

    //-------------------------------------------------------------------------
    // Request parameters
    //-------------------------------------------------------------------------
    #[error("max_request_size cannot be negative")]
    NegativeMaxRequestSize,

    #[error("max_request_duration cannot be negative")]
    NegativeMaxRequestDuration,

    #[error("error parsing {field}: {source}")]
    InvalidDuration {
        field: &'static str,
        #[source]
        source: DurationError,
    },

    //-------------------------------------------------------------------------
    // TLS
    //-------------------------------------------------------------------------
    #[error("invalid value for tls_cipher_suites: {source}")]
    InvalidCipherSuites {
        #[source]
        source: CipherError,
    },

    //-------------------------------------------------------------------------
    // Proxy protocol / X-Forwarded-For
    //-------------------------------------------------------------------------
    #[error("error parsing {field}: {source}")]
    InvalidAddrs {
        field: &'static str,
        #[source]
        source: AddrError,
    },

    #[error(
        "proxy_protocol_behavior set to allow or deny only authorized addresses but no proxy_protocol_authorized_addrs value"
    )]
    MissingProxyProtocolAuthorizedAddrs,

    #[error("x_forwarded_for_hop_skips cannot be negative but set to {value}")]
    NegativeHopSkips { value: i64 },
}

impl ListenerError {
    pub fn duration(field: &'static str, source: DurationError) -> Self {
        Self::InvalidDuration { field, source }
    }

    pub fn addrs(field: &'static str, source: AddrError) -> Self {
        Self::InvalidAddrs { field, source }
    }
}
