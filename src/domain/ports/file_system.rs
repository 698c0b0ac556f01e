//! FileSystem port - abstraction over enumeration and metadata lookup
//!
//! Everything the core needs from the disk goes through this trait:
//! globbing patterns into file lists, reading modification times, and the
//! existence checks and copies used by the golden-file workflow. Paths are
//! relative to the implementation's project root.

use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Result type for file system operations
pub type FsResult<T> = Result<T, FsError>;

/// File system operation errors
#[derive(Debug)]
pub enum FsError {
    /// File not found
    NotFound(PathBuf),
    /// Permission denied
    PermissionDenied(PathBuf),
    /// Glob pattern could not be compiled
    Pattern { pattern: String, message: String },
    /// I/O error
    Io(std::io::Error),
    /// Other error
    Other(String),
}

impl FsError {
    /// Attach a path to an I/O error, keeping the not-found/permission split.
    pub fn at(path: &Path, err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => FsError::NotFound(path.to_path_buf()),
            std::io::ErrorKind::PermissionDenied => FsError::PermissionDenied(path.to_path_buf()),
            _ => FsError::Io(err),
        }
    }
}

impl From<std::io::Error> for FsError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => FsError::NotFound(PathBuf::new()),
            std::io::ErrorKind::PermissionDenied => FsError::PermissionDenied(PathBuf::new()),
            _ => FsError::Io(err),
        }
    }
}

impl std::fmt::Display for FsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FsError::NotFound(path) => write!(f, "File not found: {}", path.display()),
            FsError::PermissionDenied(path) => {
                write!(f, "Permission denied: {}", path.display())
            }
            FsError::Pattern { pattern, message } => {
                write!(f, "Invalid pattern '{}': {}", pattern, message)
            }
            FsError::Io(err) => write!(f, "I/O error: {}", err),
            FsError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for FsError {}

/// Abstract file system interface
///
/// Implementations:
/// - `LocalFs` - walks the project tree on disk
/// - test doubles - in-memory trees whose timestamps can be edited between polls
pub trait FileSystem {
    /// Expand glob patterns into the sorted, de-duplicated list of matching files.
    fn glob(&self, patterns: &[String]) -> FsResult<Vec<PathBuf>>;

    /// Last modification time of a file
    fn modified(&self, path: &Path) -> FsResult<SystemTime>;

    /// Check if file exists
    fn exists(&self, path: &Path) -> bool;

    /// Create directory and parents
    fn create_dir_all(&self, path: &Path) -> FsResult<()>;

    /// Copy a file, overwriting the destination. Returns bytes copied.
    fn copy(&self, from: &Path, to: &Path) -> FsResult<u64>;
}
