use crate::compare::CompareOptions;
use crate::snapshot::{LoadError, SnapshotFormat};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

/// Reads one entity snapshot, decoding it according to the file extension.
pub fn load_entity<T: DeserializeOwned>(path: &Path) -> Result<T, LoadError> {
    let format = SnapshotFormat::from_path(path)?;
    let s = fs::read_to_string(path).map_err(|e| LoadError::read_file(path, e))?;

    match format {
        SnapshotFormat::Json => serde_json::from_str(&s).map_err(|e| LoadError::json(path, e)),
        SnapshotFormat::Yaml => serde_yaml::from_str(&s).map_err(|e| LoadError::yaml(path, e)),
        SnapshotFormat::Hcl => hcl::from_str(&s).map_err(|e| LoadError::hcl(path, e)),
    }
}

/// Reads comparison options from an HCL file. Missing keys keep their
/// default value, unknown keys are rejected.
///
/// ```text
/// nil_same_as_empty    = false
/// skip_volatile_fields = true
/// ```
pub fn load_options(path: &Path) -> Result<CompareOptions, LoadError> {
    let s = fs::read_to_string(path).map_err(|e| LoadError::read_file(path, e))?;
    let opts: CompareOptions = hcl::from_str(&s).map_err(|e| LoadError::hcl(path, e))?;

    tracing::debug!(
        path = %path.display(),
        nil_same_as_empty = opts.nil_same_as_empty,
        skip_volatile_fields = opts.skip_volatile_fields,
        "loaded comparison options"
    );

    Ok(opts)
}
