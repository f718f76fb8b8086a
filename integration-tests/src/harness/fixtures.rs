use std::path::PathBuf;

/// Absolute path of a file under `integration-tests/fixtures`.
pub fn fixture(name: &str) -> PathBuf {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join(name);

    assert!(path.is_file(), "missing fixture {}", path.display());
    path
}
