//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod comparison;
mod config_warning;
mod gold_file_set;
mod output_mapping;
mod watch_state;

pub use comparison::{Comparison, ComparisonReport, ComparisonResult, PipelineResult};
pub use config_warning::ConfigWarning;
pub use gold_file_set::{GoldFileSet, DEFAULT_GOLD_PATTERN};
pub use output_mapping::{OutputMapping, DEFAULT_BUILD_ROOT, DEFAULT_GOLD_MARKER};
pub use watch_state::{WatchEntry, WatchState};
