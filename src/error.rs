//! Error types for goldrun
//!
//! Library code returns `GoldrunResult`; the binary wraps it in `anyhow`.
//! Build and comparison failures are outcomes, not errors (see
//! `PipelineResult`), so they never appear here.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::FsError;

/// Result type alias for goldrun operations
pub type GoldrunResult<T> = Result<T, GoldrunError>;

/// Main error type for goldrun operations
#[derive(Error, Debug)]
pub enum GoldrunError {
    /// A required external tool could not be found
    #[error("required tool '{tool}' is not available (is it installed and on PATH?)")]
    ToolUnavailable { tool: String },

    /// A tool exists but could not be started
    #[error("failed to start '{tool}': {source}")]
    ToolSpawn {
        tool: String,
        #[source]
        source: std::io::Error,
    },

    /// Glob pattern rejected by the matcher
    #[error("invalid pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    /// Configuration file could not be parsed
    #[error("invalid configuration in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// File system port error
    #[error(transparent)]
    Fs(FsError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<FsError> for GoldrunError {
    fn from(err: FsError) -> Self {
        match err {
            FsError::Pattern { pattern, message } => GoldrunError::InvalidPattern { pattern, message },
            other => GoldrunError::Fs(other),
        }
    }
}
