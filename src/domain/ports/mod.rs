//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod builder;
pub mod diff_tool;
pub mod file_system;
pub mod tool_runner;

pub use builder::{BuildTarget, Builder};
pub use diff_tool::{DiffOutcome, DiffTool};
pub use file_system::{FileSystem, FsError, FsResult};
pub use tool_runner::{Invocation, OutputMode, ToolOutput, ToolRunner};
