use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    //-------------------------------------------------------------------------
    // IO
    //-------------------------------------------------------------------------
    #[error("failed to read snapshot file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    //-------------------------------------------------------------------------
    // Parsing
    //-------------------------------------------------------------------------
    #[error("invalid JSON snapshot: {path}\n\n{source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid YAML snapshot: {path}\n\n{source}")]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("invalid HCL file: {path}\n\n{source}")]
    Hcl {
        path: PathBuf,
        #[source]
        source: hcl::Error,
    },

    //-------------------------------------------------------------------------
    // Dispatch
    //-------------------------------------------------------------------------
    #[error("unsupported snapshot format for {path} (expected .json, .yaml, .yml or .hcl)")]
    UnsupportedFormat { path: PathBuf },

    #[error("unknown entity kind '{kind}'")]
    UnknownKind { kind: String },
}

impl LoadError {
    pub fn read_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadFile {
            path: path.into(),
            source,
        }
    }

    pub fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Json {
            path: path.into(),
            source,
        }
    }

    pub fn yaml(path: impl Into<PathBuf>, source: serde_yaml::Error) -> Self {
        Self::Yaml {
            path: path.into(),
            source,
        }
    }

    pub fn hcl(path: impl Into<PathBuf>, source: hcl::Error) -> Self {
        Self::Hcl {
            path: path.into(),
            source,
        }
    }
}
