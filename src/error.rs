//! Error types for bundlemap
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::FsError;

/// Result type alias for bundlemap operations
pub type BundleResult<T> = Result<T, BundleError>;

/// Main error type for bundlemap operations
#[derive(Error, Debug)]
pub enum BundleError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// File system port error
    #[error("file system error: {0}")]
    Fs(#[from] FsError),

    /// Config file could not be parsed
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Manifest could not be encoded or decoded
    #[error("invalid manifest {path}: {source}")]
    Manifest {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Identifier sidecar exists but is not valid TOML
    #[error("invalid identifier sidecar {path}: {message}")]
    InvalidSidecar { path: PathBuf, message: String },

    /// The bundler collaborator reported a failure
    #[error("bundler failed: {0}")]
    Bundler(String),
}
