//! DiffTool port - compare two files with an external differ

use std::path::Path;

use crate::error::GoldrunResult;

/// Result of one diff invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffOutcome {
    /// Files compared equal
    pub equal: bool,
    /// Human-readable diff text (empty when equal)
    pub text: String,
}

impl DiffOutcome {
    pub fn equal() -> Self {
        Self {
            equal: true,
            text: String::new(),
        }
    }

    pub fn different(text: impl Into<String>) -> Self {
        Self {
            equal: false,
            text: text.into(),
        }
    }
}

/// Compares a gold file against a produced output
pub trait DiffTool {
    /// Diff `gold` against `output`. Both paths are relative to the project root.
    fn diff(&self, gold: &Path, output: &Path) -> GoldrunResult<DiffOutcome>;
}

impl<T: DiffTool + ?Sized> DiffTool for &T {
    fn diff(&self, gold: &Path, output: &Path) -> GoldrunResult<DiffOutcome> {
        (**self).diff(gold, output)
    }
}
