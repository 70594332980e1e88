use crate::conf::validation::{ListenerError, ListenerErrors};
use crate::conf::{ConfigError, load_config};
use owo_colors::OwoColorize;
use std::path::PathBuf;

pub fn check(path: PathBuf, plain: bool) -> anyhow::Result<()> {
    match load_config(&path) {
        Ok(cfg) => {
            println!("✔ Config loaded successfully");
            println!("✔ {} listeners", cfg.listeners().len());
            println!(
                "✔ {} with TLS enabled",
                cfg.listeners().iter().filter(|l| !l.tls_disable()).count()
            );
            Ok(())
        }
        Err(err) => {
            print_config_error(&err, plain);
            std::process::exit(1);
        }
    }
}

fn print_config_error(err: &ConfigError, plain: bool) {
    match err {
        ConfigError::Listeners(errors) if !plain => render_pretty(errors),
        _ => eprintln!("{}", err),
    }

    if let ConfigError::Listeners(errors) = err {
        for hint in errors.issues().iter().filter_map(|i| listener_error_hint(&i.error)) {
            eprintln!();
            eprintln!("{}", hint);
        }
    }
}

fn render_pretty(errors: &ListenerErrors) {
    eprintln!("configuration validation failed ({} errors)\n", errors.len());
    for issue in errors.issues() {
        eprintln!(
            "  {}: {}: {}",
            "error".red().bold(),
            issue.context().bold(),
            issue.error
        );
    }
}

pub fn listener_error_hint(err: &ListenerError) -> Option<&'static str> {
    match err {
        ListenerError::UnsupportedType { .. } => Some(
            "Listener blocks must be labelled with a supported type.\n\
             \n\
             Example:\n\
             \n\
             listener \"tcp\" {\n\
             \x20 address = \"127.0.0.1:8200\"\n\
             }",
        ),

        ListenerError::InvalidDuration { .. } => Some(
            "Durations are a number of seconds or a duration literal such as \"30s\", \"5m\" or \"1h30m\".",
        ),

        ListenerError::InvalidCipherSuites { .. } => Some(
            "tls_cipher_suites takes a comma separated list of IANA cipher suite names,\n\
             for example \"TLS_ECDHE_RSA_WITH_AES_128_GCM_SHA256,TLS_AES_128_GCM_SHA256\".",
        ),

        ListenerError::MissingProxyProtocolAuthorizedAddrs => Some(
            "Set proxy_protocol_authorized_addrs to the load balancers allowed to send\n\
             PROXY protocol headers, or change proxy_protocol_behavior to \"use_always\".",
        ),

        _ => None,
    }
}
