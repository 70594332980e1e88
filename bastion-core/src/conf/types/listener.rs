use crate::conf::types::{ListenerType, ProxyProtocolBehavior};
use crate::conf::values::GoDuration;
use hcl::{Map, Value};
use ipnet::IpNet;
use serde::Serialize;

/// A validated listener definition handed to the transport layer.
///
/// Every derived field is either unset (the raw value was absent) or holds
/// a value that passed validation. Listeners are only built by
/// [`parse_listeners`](crate::conf::parse_listeners) and are read-only
/// afterwards:
///
/// ```compile_fail
/// # use bastion_core::conf::Listener;
/// fn tamper(listener: &mut Listener) {
///     listener.max_request_size = -1;
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct Listener {
    #[serde(skip)]
    pub(crate) raw_config: Map<String, Value>,

    #[serde(rename = "type")]
    pub(crate) kind: ListenerType,
    pub(crate) purpose: String,

    pub(crate) address: String,
    pub(crate) cluster_address: String,
    pub(crate) max_request_size: i64,
    pub(crate) max_request_duration: Option<GoDuration>,
    pub(crate) require_request_header: bool,

    pub(crate) tls_disable: bool,
    pub(crate) tls_cert_file: String,
    pub(crate) tls_key_file: String,
    pub(crate) tls_min_version: String,
    pub(crate) tls_cipher_suites: Vec<u16>,
    pub(crate) tls_prefer_server_cipher_suites: bool,
    pub(crate) tls_require_and_verify_client_cert: bool,
    pub(crate) tls_client_ca_file: String,
    pub(crate) tls_disable_client_certs: bool,

    pub(crate) http_read_timeout: Option<GoDuration>,
    pub(crate) http_read_header_timeout: Option<GoDuration>,
    pub(crate) http_write_timeout: Option<GoDuration>,
    pub(crate) http_idle_timeout: Option<GoDuration>,

    pub(crate) proxy_protocol_behavior: Option<ProxyProtocolBehavior>,
    pub(crate) proxy_protocol_authorized_addrs: Vec<IpNet>,

    pub(crate) x_forwarded_for_authorized_addrs: Vec<IpNet>,
    pub(crate) x_forwarded_for_hop_skips: i64,
    pub(crate) x_forwarded_for_reject_not_present: bool,
    pub(crate) x_forwarded_for_reject_not_authorized: bool,

    pub(crate) socket_mode: String,
    pub(crate) socket_user: String,
    pub(crate) socket_group: String,

    pub(crate) telemetry: ListenerTelemetry,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ListenerTelemetry {
    pub(crate) unauthenticated_metrics_access: bool,
}

impl ListenerTelemetry {
    pub fn unauthenticated_metrics_access(&self) -> bool {
        self.unauthenticated_metrics_access
    }
}

impl Listener {
    /// The listener block exactly as it appeared in the config, for display.
    pub fn raw_config(&self) -> &Map<String, Value> {
        &self.raw_config
    }

    pub fn with_purpose(mut self, purpose: impl Into<String>) -> Self {
        self.purpose = purpose.into();
        self
    }

    pub fn kind(&self) -> ListenerType {
        self.kind
    }

    pub fn purpose(&self) -> &str {
        &self.purpose
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn cluster_address(&self) -> &str {
        &self.cluster_address
    }

    /// Zero means the transport default.
    pub fn max_request_size(&self) -> i64 {
        self.max_request_size
    }

    pub fn max_request_duration(&self) -> Option<GoDuration> {
        self.max_request_duration
    }

    pub fn require_request_header(&self) -> bool {
        self.require_request_header
    }

    //-------------------------------------------------------------------------
    // TLS
    //-------------------------------------------------------------------------

    pub fn tls_disable(&self) -> bool {
        self.tls_disable
    }

    pub fn tls_cert_file(&self) -> &str {
        &self.tls_cert_file
    }

    pub fn tls_key_file(&self) -> &str {
        &self.tls_key_file
    }

    pub fn tls_min_version(&self) -> &str {
        &self.tls_min_version
    }

    /// Empty means the transport's default suites.
    pub fn tls_cipher_suites(&self) -> &[u16] {
        &self.tls_cipher_suites
    }

    pub fn tls_prefer_server_cipher_suites(&self) -> bool {
        self.tls_prefer_server_cipher_suites
    }

    pub fn tls_require_and_verify_client_cert(&self) -> bool {
        self.tls_require_and_verify_client_cert
    }

    pub fn tls_client_ca_file(&self) -> &str {
        &self.tls_client_ca_file
    }

    pub fn tls_disable_client_certs(&self) -> bool {
        self.tls_disable_client_certs
    }

    //-------------------------------------------------------------------------
    // HTTP timeouts
    //-------------------------------------------------------------------------

    pub fn http_read_timeout(&self) -> Option<GoDuration> {
        self.http_read_timeout
    }

    pub fn http_read_header_timeout(&self) -> Option<GoDuration> {
        self.http_read_header_timeout
    }

    pub fn http_write_timeout(&self) -> Option<GoDuration> {
        self.http_write_timeout
    }

    pub fn http_idle_timeout(&self) -> Option<GoDuration> {
        self.http_idle_timeout
    }

    //-------------------------------------------------------------------------
    // Proxy protocol / X-Forwarded-For
    //-------------------------------------------------------------------------

    pub fn proxy_protocol_behavior(&self) -> Option<&ProxyProtocolBehavior> {
        self.proxy_protocol_behavior.as_ref()
    }

    pub fn proxy_protocol_authorized_addrs(&self) -> &[IpNet] {
        &self.proxy_protocol_authorized_addrs
    }

    pub fn x_forwarded_for_authorized_addrs(&self) -> &[IpNet] {
        &self.x_forwarded_for_authorized_addrs
    }

    pub fn x_forwarded_for_hop_skips(&self) -> i64 {
        self.x_forwarded_for_hop_skips
    }

    pub fn x_forwarded_for_reject_not_present(&self) -> bool {
        self.x_forwarded_for_reject_not_present
    }

    pub fn x_forwarded_for_reject_not_authorized(&self) -> bool {
        self.x_forwarded_for_reject_not_authorized
    }

    //-------------------------------------------------------------------------
    // Socket
    //-------------------------------------------------------------------------

    pub fn socket_mode(&self) -> &str {
        &self.socket_mode
    }

    pub fn socket_user(&self) -> &str {
        &self.socket_user
    }

    pub fn socket_group(&self) -> &str {
        &self.socket_group
    }

    pub fn telemetry(&self) -> &ListenerTelemetry {
        &self.telemetry
    }
}
