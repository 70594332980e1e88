use crate::conf::values::{lenient_bool, lenient_i64};
use hcl::Value;
use serde::Deserialize;

/// The operator DSL for a single `listener "<type>" { ... }` block.
///
/// Fields that need post-processing keep their raw form here and are
/// lowered into [`Listener`](crate::conf::types::Listener) after validation.
#[derive(Debug, Deserialize, Default, Clone)]
#[serde(default)]
pub struct ListenerSpec {
    pub address: String,
    pub cluster_address: String,
    #[serde(deserialize_with = "lenient_i64")]
    pub max_request_size: i64,
    pub max_request_duration: Option<Value>,
    #[serde(deserialize_with = "lenient_bool")]
    pub require_request_header: bool,

    #[serde(deserialize_with = "lenient_bool")]
    pub tls_disable: bool,
    pub tls_cert_file: String,
    pub tls_key_file: String,
    pub tls_min_version: String,
    pub tls_cipher_suites: String,
    #[serde(deserialize_with = "lenient_bool")]
    pub tls_prefer_server_cipher_suites: bool,
    #[serde(deserialize_with = "lenient_bool")]
    pub tls_require_and_verify_client_cert: bool,
    pub tls_client_ca_file: String,
    #[serde(deserialize_with = "lenient_bool")]
    pub tls_disable_client_certs: bool,

    pub http_read_timeout: Option<Value>,
    pub http_read_header_timeout: Option<Value>,
    pub http_write_timeout: Option<Value>,
    pub http_idle_timeout: Option<Value>,

    pub proxy_protocol_behavior: String,
    pub proxy_protocol_authorized_addrs: Option<Value>,

    pub x_forwarded_for_authorized_addrs: Option<Value>,
    #[serde(deserialize_with = "lenient_i64")]
    pub x_forwarded_for_hop_skips: i64,
    #[serde(deserialize_with = "lenient_bool")]
    pub x_forwarded_for_reject_not_present: bool,
    #[serde(deserialize_with = "lenient_bool")]
    pub x_forwarded_for_reject_not_authorized: bool,

    pub socket_mode: String,
    pub socket_user: String,
    pub socket_group: String,

    pub telemetry: TelemetrySpec,
}

#[derive(Debug, Deserialize, Default, Clone)]
#[serde(default)]
pub struct TelemetrySpec {
    #[serde(deserialize_with = "lenient_bool")]
    pub unauthenticated_metrics_access: bool,
}
