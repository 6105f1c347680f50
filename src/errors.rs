// src/errors.rs

//! Crate-wide error type and result alias.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum HarnessError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Executable not found or not runnable: {path}")]
    ExecutableNotFound {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed command line `{line}`: {reason}")]
    MalformedCommandLine { line: String, reason: String },

    #[error("Failed to spawn '{path}': {source}")]
    SpawnFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl HarnessError {
    /// Classify an OS spawn failure for `path`.
    ///
    /// Missing files and files we may not execute both mean the executable
    /// did not resolve to something runnable.
    pub fn from_spawn(path: impl Into<String>, source: std::io::Error) -> Self {
        use std::io::ErrorKind;

        let path = path.into();
        match source.kind() {
            ErrorKind::NotFound | ErrorKind::PermissionDenied => {
                HarnessError::ExecutableNotFound { path, source }
            }
            _ => HarnessError::SpawnFailed { path, source },
        }
    }
}

pub type Result<T> = std::result::Result<T, HarnessError>;
