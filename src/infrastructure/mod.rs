//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - File system implementation (project tree on disk)
//! - `process/` - Child processes: runner, build tool, diff tool

pub mod fs;
pub mod process;

// Re-export for convenience
pub use fs::LocalFs;
pub use process::{ExternalDiff, MakeBuilder, ProcessRunner};
