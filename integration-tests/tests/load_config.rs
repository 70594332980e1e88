use bastion_core::conf::types::{ListenerType, ProxyProtocolBehavior};
use bastion_core::conf::values::GoDuration;
use bastion_core::conf::{ConfigError, load_config};
use integration_tests::harness::{fixture_path, load_fixture, write_config};
use pretty_assertions::assert_eq;

#[test]
fn load_full_config() {
    // Act
    let config = load_fixture("bastion.hcl").unwrap();

    // Assert
    let listeners = config.listeners();
    assert_eq!(listeners.len(), 2);

    let tcp = &listeners[0];
    assert_eq!(tcp.kind(), ListenerType::Tcp);
    assert_eq!(tcp.address(), "0.0.0.0:8200");
    assert_eq!(tcp.cluster_address(), "0.0.0.0:8201");
    assert_eq!(tcp.tls_cipher_suites(), vec![0xc02f, 0xc030]);
    assert_eq!(tcp.max_request_size(), 33554432);
    assert_eq!(tcp.max_request_duration(), GoDuration::from_secs(90));
    assert_eq!(tcp.http_read_header_timeout(), GoDuration::from_secs(10));
    assert_eq!(tcp.http_idle_timeout(), GoDuration::from_secs(300));
    assert_eq!(tcp.http_read_timeout(), None);
    assert_eq!(
        tcp.proxy_protocol_behavior(),
        Some(&ProxyProtocolBehavior::AllowAuthorized)
    );
    assert_eq!(tcp.proxy_protocol_authorized_addrs().len(), 2);
    assert_eq!(
        tcp.x_forwarded_for_authorized_addrs()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>(),
        vec!["172.16.0.0/12".to_string()]
    );
    assert_eq!(tcp.x_forwarded_for_hop_skips(), 1);
    assert!(tcp.x_forwarded_for_reject_not_authorized());
    assert!(!tcp.x_forwarded_for_reject_not_present());
    assert!(tcp.telemetry().unauthenticated_metrics_access());

    let unix = &listeners[1];
    assert_eq!(unix.kind(), ListenerType::Unix);
    assert_eq!(unix.address(), "/run/bastion/bastion.sock");
    assert_eq!(unix.socket_mode(), "0660");
    assert!(unix.tls_disable());
    assert!(unix.tls_cipher_suites().is_empty());
}

#[test]
fn load_config_reports_every_invalid_listener() {
    // Act
    let err = load_fixture("invalid.hcl").unwrap_err();

    // Assert
    let ConfigError::Listeners(errors) = &err else {
        panic!("expected listener errors, got {err:?}");
    };
    assert_eq!(
        errors.messages(),
        vec![
            "listeners.tcp: max_request_size cannot be negative".to_string(),
            r#"listeners.udp: unsupported listener type "udp""#.to_string(),
            r#"listeners.tcp: invalid value for tls_cipher_suites: unsupported cipher "TLS_NOT_A_SUITE""#
                .to_string(),
            "listeners.tcp: proxy_protocol_behavior set to allow or deny only authorized addresses but no proxy_protocol_authorized_addrs value"
                .to_string(),
            "listeners.tcp: x_forwarded_for_hop_skips cannot be negative but set to -2".to_string(),
        ]
    );
    assert_eq!(
        err.to_string().lines().next(),
        Some("5 errors occurred:")
    );
}

#[test]
fn load_config_syntax_error_names_the_file() {
    // Act
    let err = load_fixture("syntax_error.hcl").unwrap_err();

    // Assert
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(
        err.to_string()
            .contains(&fixture_path("syntax_error.hcl").display().to_string())
    );
}

#[test]
fn load_config_single_error_matches_multierror_format() {
    // Arrange
    let (_dir, path) = write_config("listener \"tcp\" {\n  max_request_size = -1\n}\n");

    // Act
    let err = load_config(&path).unwrap_err();

    // Assert
    assert_eq!(
        err.to_string(),
        "1 error occurred:\n\t* listeners.tcp: max_request_size cannot be negative\n"
    );
}

#[test]
fn load_config_keeps_raw_blocks_for_display() {
    // Act
    let config = load_fixture("bastion.hcl").unwrap();
    let sanitized = config.sanitized();

    // Assert
    let listeners = sanitized["listeners"].as_array().unwrap();
    assert_eq!(listeners.len(), 2);
    assert_eq!(listeners[0]["type"], "tcp");
    assert_eq!(listeners[0]["config"]["max_request_duration"], "90s");
    assert_eq!(
        listeners[0]["config"]["proxy_protocol_authorized_addrs"][1],
        "192.168.0.0/16"
    );
    assert_eq!(listeners[1]["type"], "unix");
    assert_eq!(listeners[1]["config"]["socket_mode"], "0660");
}
