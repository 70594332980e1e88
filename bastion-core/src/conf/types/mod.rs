mod listener;
mod listener_kind;
mod proxy_protocol;
mod shared;
mod specification;

pub use listener::{Listener, ListenerTelemetry};
pub use listener_kind::ListenerType;
pub use proxy_protocol::ProxyProtocolBehavior;
pub use shared::SharedConfig;
pub use specification::{ListenerSpec, TelemetrySpec};
