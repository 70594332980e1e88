mod error;
mod listeners;
mod loader;
mod parse;
#[cfg(test)]
mod tests;
pub mod types;
pub mod validation;
pub mod values;

pub use error::ConfigError;
pub use listeners::{parse_listener, parse_listeners};
pub use loader::{load_config, load_config_str};
pub use parse::{LISTENER_BLOCK, ListenerBlock, listener_blocks, parse_document};
pub use types::{Listener, SharedConfig};
