use crate::conf::ConfigError;
use hcl::eval::{Context, Evaluate};
use hcl::{Block, Body};
use std::path::Path;

/// Identifier of listener blocks in a config document.
pub const LISTENER_BLOCK: &str = "listener";

/// One `listener` block: the optional type label and its body.
#[derive(Debug, Clone, PartialEq)]
pub struct ListenerBlock {
    pub key: Option<String>,
    pub body: Body,
}

impl ListenerBlock {
    pub fn new(key: impl Into<String>, body: Body) -> Self {
        Self {
            key: Some(key.into()),
            body,
        }
    }

    /// Key used in error context. Falls back to the block identifier.
    pub fn key(&self) -> &str {
        self.key.as_deref().unwrap_or(LISTENER_BLOCK)
    }
}

impl From<&Block> for ListenerBlock {
    fn from(block: &Block) -> Self {
        Self {
            key: block.labels().first().map(|label| label.as_str().to_owned()),
            body: block.body().clone(),
        }
    }
}

/// Parses an HCL document without evaluating it.
pub fn parse_document(path: &Path, src: &str) -> Result<Body, ConfigError> {
    hcl::parse(src).map_err(|e| ConfigError::parse(path, e))
}

/// Top-level `listener` blocks, in document order.
///
/// Only listener bodies are evaluated, so literal expressions (`-1`,
/// `2 * 60`) are folded there while the rest of the document is left alone.
pub fn listener_blocks(path: &Path, body: &Body) -> Result<Vec<ListenerBlock>, ConfigError> {
    let ctx = Context::new();

    body.blocks()
        .filter(|block| block.identifier() == LISTENER_BLOCK)
        .map(|block| {
            let mut listener = ListenerBlock::from(block);
            listener.body = listener
                .body
                .evaluate(&ctx)
                .map_err(|e| ConfigError::evaluate(path, e))?;
            Ok(listener)
        })
        .collect()
}
