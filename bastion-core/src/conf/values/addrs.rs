use crate::conf::values::{kind_of, render};
use hcl::Value;
use ipnet::IpNet;
use std::net::IpAddr;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AddrError {
    #[error("unable to parse addresses from {input:?}")]
    Empty { input: String },

    #[error("error parsing {value} as string")]
    NotAString { value: String },

    #[error("unknown address input type {kind}")]
    UnsupportedType { kind: &'static str },

    #[error("error parsing address {addr:?}: {source}")]
    Invalid {
        addr: String,
        #[source]
        source: ipnet::AddrParseError,
    },
}

/// Parses an address allow-list.
///
/// The value is either a comma separated string or a list of strings. Each
/// entry is an IP address (treated as a single-host network) or a CIDR range.
pub fn parse_addrs(value: &Value) -> Result<Vec<IpNet>, AddrError> {
    let entries: Vec<&str> = match value {
        Value::String(s) => {
            let entries: Vec<&str> = s
                .split(',')
                .map(str::trim)
                .filter(|entry| !entry.is_empty())
                .collect();
            if entries.is_empty() {
                return Err(AddrError::Empty { input: s.clone() });
            }
            entries
        }
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::String(s) => Ok(s.trim()),
                other => Err(AddrError::NotAString {
                    value: render(other),
                }),
            })
            .collect::<Result<_, _>>()?,
        other => {
            return Err(AddrError::UnsupportedType {
                kind: kind_of(other),
            });
        }
    };

    entries.into_iter().map(parse_addr).collect()
}

fn parse_addr(addr: &str) -> Result<IpNet, AddrError> {
    if let Ok(ip) = addr.parse::<IpAddr>() {
        return Ok(IpNet::from(ip));
    }

    addr.parse::<IpNet>().map_err(|source| AddrError::Invalid {
        addr: addr.to_owned(),
        source,
    })
}
