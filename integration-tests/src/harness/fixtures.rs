use bastion_core::conf::{ConfigError, SharedConfig, load_config};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Absolute path of a file under `integration-tests/fixtures`.
pub fn fixture_path(file: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join(file)
}

pub fn load_fixture(file: &str) -> Result<SharedConfig, ConfigError> {
    load_config(&fixture_path(file))
}

/// Writes `contents` to a fresh `bastion.hcl`. The directory lives as long as
/// the returned guard.
pub fn write_config(contents: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("failed to create temp dir");
    let path = dir.path().join("bastion.hcl");
    fs::write(&path, contents).expect("failed to write config");
    (dir, path)
}
