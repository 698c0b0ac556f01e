//! Application Layer
//!
//! Use cases that orchestrate the build/compare loop.
//! This layer:
//! - Depends on Domain layer (value objects, ports)
//! - Does NOT spawn processes or touch the disk directly
//! - Coordinates builders, diff tools and the file system through ports
//!
//! ## Use Cases
//!
//! - `GoldenComparator` - Diff every gold file against its produced output
//! - `PipelineRunner` - Build, then compare; short-circuits on build failure
//! - `UpdateGoldUseCase` - Promote produced test outputs to gold files
//! - `ChangeWatcher` - Poll watched files and rerun an action on change

pub mod compare;
pub mod pipeline;
pub mod update_gold;
pub mod watch;

pub use compare::{Comparator, GoldenComparator};
pub use pipeline::{PipelineRun, PipelineRunner};
pub use update_gold::{GoldUpdate, UpdateGoldOptions, UpdateGoldResult, UpdateGoldUseCase};
pub use watch::{ChangeWatcher, TickOutcome, WatchEvent, WatchOptions, DEFAULT_POLL_INTERVAL_MS};
