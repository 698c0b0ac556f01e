//! Watch event types and options

use std::path::PathBuf;
use std::time::Duration;

/// Poll interval when nothing else is configured
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 500;

/// Watch options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatchOptions {
    /// Globs relative to the project root
    pub patterns: Vec<String>,
    /// Sleep between polls when nothing changed
    pub interval: Duration,
}

impl WatchOptions {
    pub fn new(patterns: Vec<String>) -> Self {
        Self {
            patterns,
            interval: Duration::from_millis(DEFAULT_POLL_INTERVAL_MS),
        }
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }
}

/// Events emitted while watching
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WatchEvent {
    /// Initial snapshot taken, the first run is about to start
    Started { patterns: Vec<String>, files: usize },
    /// The snapshot differs from the previous one; a run is about to start
    Changed { paths: Vec<PathBuf> },
    /// A run finished; a panicking action counts as a failure
    RunFinished { success: bool },
    /// The snapshot could not be taken; treated as "nothing changed"
    PollFailed { message: String },
}

/// What one poll tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Unchanged,
    Ran { success: bool },
}
