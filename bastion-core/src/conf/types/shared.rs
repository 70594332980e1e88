use crate::conf::types::Listener;
use serde::Serialize;
use serde_json::json;

/// Configuration shared by every server command.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SharedConfig {
    listeners: Vec<Listener>,
}

impl SharedConfig {
    pub fn listeners(&self) -> &[Listener] {
        &self.listeners
    }

    pub(crate) fn append_listeners(&mut self, listeners: Vec<Listener>) {
        self.listeners.extend(listeners);
    }

    /// Display view of the config built from each listener's raw block.
    pub fn sanitized(&self) -> serde_json::Value {
        let listeners: Vec<_> = self
            .listeners
            .iter()
            .map(|l| {
                json!({
                    "type": l.kind,
                    "config": l.raw_config(),
                })
            })
            .collect();

        json!({ "listeners": listeners })
    }
}
