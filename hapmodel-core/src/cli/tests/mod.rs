mod options_tests;

use crate::cli::CompareArgs;
use crate::models::EntityKind;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Writes `contents` to `name` inside `dir` and returns the full path.
pub fn write_file(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("failed to write test file");
    path
}

pub fn args(kind: EntityKind, left: &Path, right: &Path) -> CompareArgs {
    CompareArgs {
        kind,
        left: left.to_path_buf(),
        right: right.to_path_buf(),
        options: None,
        nil_distinct: false,
        keep_volatile: false,
    }
}
