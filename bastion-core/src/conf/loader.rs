use crate::conf::ConfigError;
use crate::conf::listeners::parse_listeners;
use crate::conf::parse::{listener_blocks, parse_document};
use crate::conf::types::SharedConfig;
use std::fs;
use std::path::Path;

/// Loads and validates the listener configuration in `path`.
pub fn load_config(path: &Path) -> Result<SharedConfig, ConfigError> {
    //--------------------------------------------------------------------------
    // Hard fail: IO
    //--------------------------------------------------------------------------
    let src = fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;

    load_config_str(path, &src)
}

/// Same as [`load_config`] for a document already in memory. `path` is only
/// used for error reporting.
pub fn load_config_str(path: &Path, src: &str) -> Result<SharedConfig, ConfigError> {
    //--------------------------------------------------------------------------
    // Hard fail: syntax
    //--------------------------------------------------------------------------
    let body = parse_document(path, src)?;
    let blocks = listener_blocks(path, &body)?;

    //--------------------------------------------------------------------------
    // Semantic validation (aggregate all listener errors)
    //--------------------------------------------------------------------------
    let mut config = SharedConfig::default();
    parse_listeners(&mut config, &blocks)?;

    tracing::info!(
        path = %path.display(),
        listeners = config.listeners().len(),
        "configuration loaded"
    );

    Ok(config)
}
