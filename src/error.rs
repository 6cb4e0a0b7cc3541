//! Error types for Folio
//!
//! Library code returns `FolioResult`; the CLI wraps these in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Folio operations
pub type FolioResult<T> = Result<T, FolioError>;

/// Main error type for Folio operations
#[derive(Error, Debug)]
pub enum FolioError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Asset root directory does not exist or is not a directory
    #[error("asset directory not found: {path}")]
    AssetRootNotFound { path: PathBuf },

    /// A manifest path does not follow the `<prefix>/<name>.<ext>` or
    /// `<prefix>/<folder>/<file>.<ext>` layout
    #[error("malformed asset path '{path}': {reason}")]
    MalformedAssetPath { path: String, reason: String },

    /// Configuration file could not be parsed
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// `.folioignore` could not be loaded
    #[error("invalid ignore file {file}: {message}")]
    Ignore { file: PathBuf, message: String },

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// File watcher failed to start or stopped unexpectedly
    #[error("watch error: {0}")]
    Watch(String),
}
