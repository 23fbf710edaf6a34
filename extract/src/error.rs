//! Error types for extraction runs.
//!
//! Per-line problems are never errors; they are tallied as
//! [`DropReason`](vocab_extract_core::DropReason)s. Everything here is fatal
//! to the current run.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort an extraction run.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The vocabulary source could not be read.
    #[error("failed to read input '{}': {source}", .path.display())]
    ReadInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The JSON destination could not be written.
    #[error("failed to write output '{}': {source}", .path.display())]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization or parsing failure.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Formatted JSON was not valid UTF-8.
    #[error("JSON output is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// The configuration file could not be read.
    #[error("failed to read config '{}': {source}", .path.display())]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid YAML for [`ExtractConfig`](crate::config::ExtractConfig).
    #[error("invalid config '{}': {source}", .path.display())]
    ParseConfig {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

/// Convenience alias for results with [`ExtractError`].
pub type Result<T> = std::result::Result<T, ExtractError>;
