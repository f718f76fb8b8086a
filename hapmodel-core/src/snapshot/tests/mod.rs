
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Writes `contents` to `name` inside `dir` and returns the full path.
pub fn write_file(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("failed to write test snapshot");
    path
}
