use crate::conf::{ListenerBlock, listener_blocks, parse_document};
use std::path::Path;

/// Parses `src` as a config document and returns its listener blocks.
pub fn blocks(src: &str) -> Vec<ListenerBlock> {
    let path = Path::new("/test/bastion.hcl");
    let body = parse_document(path, src).unwrap();
    listener_blocks(path, &body).unwrap()
}

/// A single `listener "<key>"` block with `attrs` as its body.
pub fn block(key: &str, attrs: &str) -> ListenerBlock {
    let mut blocks = blocks(&format!("listener \"{key}\" {{\n{attrs}\n}}\n"));
    assert_eq!(blocks.len(), 1);
    blocks.remove(0)
}
