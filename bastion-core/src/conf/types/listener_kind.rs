use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Transport a listener binds to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ListenerType {
    Tcp,
    Unix,
}

impl ListenerType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ListenerType::Tcp => "tcp",
            ListenerType::Unix => "unix",
        }
    }
}

impl FromStr for ListenerType {
    type Err = String;

    /// Matches case-insensitively. The error carries the lower-cased input.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.to_lowercase();
        match lowered.as_str() {
            "tcp" => Ok(ListenerType::Tcp),
            "unix" => Ok(ListenerType::Unix),
            _ => Err(lowered),
        }
    }
}

impl fmt::Display for ListenerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
