//! Parsers for listener fields whose raw form needs interpretation.

mod addrs;
mod ciphers;
mod duration;
mod lenient;

pub use addrs::{AddrError, parse_addrs};
pub use ciphers::{CipherError, cipher_suite_name, parse_ciphers};
pub use duration::{DurationError, GoDuration, parse_duration, parse_duration_second};
pub(crate) use lenient::{lenient_bool, lenient_i64};

use hcl::Value;

pub(crate) fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "object",
    }
}

/// Short human readable rendering of a value for error messages.
pub(crate) fn render(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Array(_) | Value::Object(_) => kind_of(value).to_string(),
    }
}
