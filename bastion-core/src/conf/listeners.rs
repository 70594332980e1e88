use crate::conf::parse::ListenerBlock;
use crate::conf::types::{
    Listener, ListenerSpec, ListenerTelemetry, ListenerType, ProxyProtocolBehavior, SharedConfig,
};
use crate::conf::validation::{ListenerError, ListenerErrors, ValidationCtx};
use crate::conf::values::{GoDuration, parse_addrs, parse_ciphers, parse_duration_second};
use hcl::{Map, Value};
use ipnet::IpNet;

/// Decodes and validates every listener block, appending the results to
/// `result` in input order.
///
/// Blocks are independent: every block is checked and all errors are
/// returned together. Nothing is appended unless every block is valid.
pub fn parse_listeners(
    result: &mut SharedConfig,
    blocks: &[ListenerBlock],
) -> Result<(), ListenerErrors> {
    let mut ctx = ValidationCtx::default();
    let mut listeners = Vec::with_capacity(blocks.len());

    for block in blocks {
        match parse_listener(block) {
            Ok(listener) => listeners.push(listener),
            Err(errors) => ctx.merge(errors),
        }
    }

    ctx.into_result()?;

    tracing::debug!(count = listeners.len(), "listeners validated");
    result.append_listeners(listeners);
    Ok(())
}

/// Decodes and validates a single listener block.
pub fn parse_listener(block: &ListenerBlock) -> Result<Listener, ListenerErrors> {
    let key = block.key();

    //-------------------------------------------------------------------------
    // Decode (fail fast)
    //-------------------------------------------------------------------------
    let spec: ListenerSpec = hcl::from_body(block.body.clone())
        .map_err(|source| ListenerErrors::single(key, ListenerError::Decode { source }))?;

    let raw_config: Map<String, Value> = hcl::from_body(block.body.clone())
        .map_err(|source| ListenerErrors::single(key, ListenerError::DecodeRaw { source }))?;

    let kind: ListenerType = key
        .parse()
        .map_err(|kind| ListenerErrors::single(key, ListenerError::UnsupportedType { kind }))?;

    //-------------------------------------------------------------------------
    // Normalize and validate (collect every problem in the block)
    //-------------------------------------------------------------------------
    let mut errors = Vec::new();
    let max_request_duration = request_parameters(&spec, &mut errors);
    let tls_cipher_suites = tls_parameters(&spec, &mut errors);
    let timeouts = http_timeouts(&spec, &mut errors);
    let (proxy_protocol_behavior, proxy_protocol_authorized_addrs) =
        proxy_protocol(&spec, &mut errors);
    let x_forwarded_for_authorized_addrs = x_forwarded_for(&spec, &mut errors);

    let mut ctx = ValidationCtx::default();
    for error in errors {
        ctx.push(key, error);
    }
    ctx.into_result()?;

    tracing::debug!(key, kind = %kind, address = %spec.address, "listener decoded");

    Ok(Listener {
        raw_config,
        kind,
        purpose: String::new(),
        address: spec.address,
        cluster_address: spec.cluster_address,
        max_request_size: spec.max_request_size,
        max_request_duration,
        require_request_header: spec.require_request_header,
        tls_disable: spec.tls_disable,
        tls_cert_file: spec.tls_cert_file,
        tls_key_file: spec.tls_key_file,
        tls_min_version: spec.tls_min_version,
        tls_cipher_suites,
        tls_prefer_server_cipher_suites: spec.tls_prefer_server_cipher_suites,
        tls_require_and_verify_client_cert: spec.tls_require_and_verify_client_cert,
        tls_client_ca_file: spec.tls_client_ca_file,
        tls_disable_client_certs: spec.tls_disable_client_certs,
        http_read_timeout: timeouts.read,
        http_read_header_timeout: timeouts.read_header,
        http_write_timeout: timeouts.write,
        http_idle_timeout: timeouts.idle,
        proxy_protocol_behavior,
        proxy_protocol_authorized_addrs,
        x_forwarded_for_authorized_addrs,
        x_forwarded_for_hop_skips: spec.x_forwarded_for_hop_skips,
        x_forwarded_for_reject_not_present: spec.x_forwarded_for_reject_not_present,
        x_forwarded_for_reject_not_authorized: spec.x_forwarded_for_reject_not_authorized,
        socket_mode: spec.socket_mode,
        socket_user: spec.socket_user,
        socket_group: spec.socket_group,
        telemetry: ListenerTelemetry {
            unauthenticated_metrics_access: spec.telemetry.unauthenticated_metrics_access,
        },
    })
}

/// Hard limits: size and duration must not be negative.
fn request_parameters(spec: &ListenerSpec, errors: &mut Vec<ListenerError>) -> Option<GoDuration> {
    if spec.max_request_size < 0 {
        errors.push(ListenerError::NegativeMaxRequestSize);
    }

    let raw = spec.max_request_duration.as_ref()?;
    match parse_duration_second(raw) {
        Ok(duration) if duration.is_negative() => {
            errors.push(ListenerError::NegativeMaxRequestDuration);
            None
        }
        Ok(duration) => Some(duration),
        Err(source) => {
            errors.push(ListenerError::duration("max_request_duration", source));
            None
        }
    }
}

/// An empty cipher list means the transport's default suites.
fn tls_parameters(spec: &ListenerSpec, errors: &mut Vec<ListenerError>) -> Vec<u16> {
    if spec.tls_cipher_suites.is_empty() {
        return Vec::new();
    }

    parse_ciphers(&spec.tls_cipher_suites).unwrap_or_else(|source| {
        errors.push(ListenerError::InvalidCipherSuites { source });
        Vec::new()
    })
}

struct HttpTimeouts {
    read: Option<GoDuration>,
    read_header: Option<GoDuration>,
    write: Option<GoDuration>,
    idle: Option<GoDuration>,
}

/// Soft tuning: only unparseable values are rejected, negatives pass through.
fn http_timeouts(spec: &ListenerSpec, errors: &mut Vec<ListenerError>) -> HttpTimeouts {
    let mut timeout = |field: &'static str, raw: &Option<Value>| {
        let raw = raw.as_ref()?;
        parse_duration_second(raw)
            .map_err(|source| errors.push(ListenerError::duration(field, source)))
            .ok()
    };

    HttpTimeouts {
        read: timeout("http_read_timeout", &spec.http_read_timeout),
        read_header: timeout("http_read_header_timeout", &spec.http_read_header_timeout),
        write: timeout("http_write_timeout", &spec.http_write_timeout),
        idle: timeout("http_idle_timeout", &spec.http_idle_timeout),
    }
}

/// The authorized list is only checked against the behavior when the
/// operator wrote the field at all; an absent list is left to the transport.
fn proxy_protocol(
    spec: &ListenerSpec,
    errors: &mut Vec<ListenerError>,
) -> (Option<ProxyProtocolBehavior>, Vec<IpNet>) {
    let behavior = match spec.proxy_protocol_behavior.as_str() {
        "" => None,
        raw => {
            let Ok(behavior) = raw.parse::<ProxyProtocolBehavior>();
            if let ProxyProtocolBehavior::Other(other) = &behavior {
                tracing::warn!(behavior = %other, "unrecognized proxy_protocol_behavior");
            }
            Some(behavior)
        }
    };

    let Some(raw) = spec.proxy_protocol_authorized_addrs.as_ref() else {
        return (behavior, Vec::new());
    };

    let addrs = match parse_addrs(raw) {
        Ok(addrs) => addrs,
        Err(source) => {
            errors.push(ListenerError::addrs("proxy_protocol_authorized_addrs", source));
            return (behavior, Vec::new());
        }
    };

    if addrs.is_empty()
        && behavior
            .as_ref()
            .is_some_and(ProxyProtocolBehavior::requires_authorized_addrs)
    {
        errors.push(ListenerError::MissingProxyProtocolAuthorizedAddrs);
    }

    (behavior, addrs)
}

fn x_forwarded_for(spec: &ListenerSpec, errors: &mut Vec<ListenerError>) -> Vec<IpNet> {
    let addrs = match spec.x_forwarded_for_authorized_addrs.as_ref().map(parse_addrs) {
        None => Vec::new(),
        Some(Ok(addrs)) => addrs,
        Some(Err(source)) => {
            errors.push(ListenerError::addrs("x_forwarded_for_authorized_addrs", source));
            Vec::new()
        }
    };

    if spec.x_forwarded_for_hop_skips < 0 {
        errors.push(ListenerError::NegativeHopSkips {
            value: spec.x_forwarded_for_hop_skips,
        });
    }

    addrs
}
