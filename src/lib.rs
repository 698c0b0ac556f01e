//! goldrun - golden-file test loop for make-based projects
//!
//! goldrun builds a project with its make-like tool, lets the test target
//! write output files, and diffs each output against a checked-in gold file.
//! A polling watcher reruns the whole loop whenever a source file changes.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{
    ChangeWatcher, Comparator, GoldenComparator, PipelineRun, PipelineRunner, UpdateGoldResult,
    UpdateGoldUseCase, WatchEvent, WatchOptions,
};
pub use config::Config;
pub use domain::value_objects::{ComparisonReport, ComparisonResult, PipelineResult};
pub use error::{GoldrunError, GoldrunResult};
