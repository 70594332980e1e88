use serde::{Serialize, Serializer};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// How a listener treats PROXY protocol headers from upstream peers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ProxyProtocolBehavior {
    /// Always require and use the header.
    UseAlways,
    /// Use the header from authorized peers, ignore it from others.
    AllowAuthorized,
    /// Use the header from authorized peers, reject connections from others.
    DenyUnauthorized,
    /// Reject connections from authorized peers.
    DenyAuthorized,
    /// A value this layer does not interpret. The transport decides.
    Other(String),
}

impl ProxyProtocolBehavior {
    pub fn as_str(&self) -> &str {
        match self {
            ProxyProtocolBehavior::UseAlways => "use_always",
            ProxyProtocolBehavior::AllowAuthorized => "allow_authorized",
            ProxyProtocolBehavior::DenyUnauthorized => "deny_unauthorized",
            ProxyProtocolBehavior::DenyAuthorized => "deny_authorized",
            ProxyProtocolBehavior::Other(s) => s,
        }
    }

    /// Behaviors that are meaningless without an authorized address list.
    pub fn requires_authorized_addrs(&self) -> bool {
        matches!(
            self,
            ProxyProtocolBehavior::AllowAuthorized | ProxyProtocolBehavior::DenyAuthorized
        )
    }
}

impl FromStr for ProxyProtocolBehavior {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "use_always" => ProxyProtocolBehavior::UseAlways,
            "allow_authorized" => ProxyProtocolBehavior::AllowAuthorized,
            "deny_unauthorized" => ProxyProtocolBehavior::DenyUnauthorized,
            "deny_authorized" => ProxyProtocolBehavior::DenyAuthorized,
            other => ProxyProtocolBehavior::Other(other.to_owned()),
        })
    }
}

impl fmt::Display for ProxyProtocolBehavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ProxyProtocolBehavior {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
