use std::io::{self, IsTerminal};
use tracing_subscriber::{EnvFilter, fmt};

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Initialize the logging system with JSON formatting and environment-based filtering
///
/// This function sets up the logging infrastructure using tracing-subscriber:
/// - Uses environment variables for log level filtering (defaults to "info" if not set)
/// - Configures JSON output format for structured logging
/// - Flattens event fields for cleaner log output
/// - Writes to stderr so command output on stdout stays machine readable
pub fn init_json_logging() {
    fmt()
        .with_env_filter(env_filter())
        .with_writer(io::stderr)
        .json()
        .flatten_event(true)
        .init();
}

pub fn init_pretty_logging() {
    fmt()
        .with_env_filter(env_filter())
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

pub fn init_logging() {
    match default_log_mode() {
        LogMode::Pretty => init_pretty_logging(),
        LogMode::Json => init_json_logging(),
    }
}

pub fn default_log_mode() -> LogMode {
    if io::stderr().is_terminal() {
        LogMode::Pretty
    } else {
        LogMode::Json
    }
}

#[derive(Debug, Clone, Copy)]
pub enum LogMode {
    Json,
    Pretty,
}
