//! Error types for vars-context

use std::path::PathBuf;

/// Result type for vars-context operations
pub type Result<T> = std::result::Result<T, Error>;

/// Failures loading settings or command tables from disk
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid {format} in {path}: {message}")]
    ConfigParse {
        path: PathBuf,
        format: String,
        message: String,
    },

    #[error("Unsupported settings format '{extension}' (expected toml, json, yaml or yml)")]
    UnsupportedFormat { extension: String },

    #[error("Invalid settings at {path}: {message}")]
    InvalidConfig { path: PathBuf, message: String },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
