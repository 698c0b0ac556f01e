//! Builder port - the external build step
//!
//! Building sources, building test binaries and running the test binaries
//! is one atomic external step from goldrun's point of view.

use crate::error::GoldrunResult;

use super::tool_runner::ToolOutput;

/// Build targets understood by the builder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuildTarget {
    /// Primary binary, test binaries and test results
    Default,
    /// Build and run the primary binary
    Run,
    /// Build test binaries and produce their output artifacts
    Test,
    /// Remove all build products
    Clean,
}

impl BuildTarget {
    /// Target name passed to the build tool; `None` for its default target.
    pub fn as_arg(&self) -> Option<&'static str> {
        match self {
            BuildTarget::Default => None,
            BuildTarget::Run => Some("run"),
            BuildTarget::Test => Some("test"),
            BuildTarget::Clean => Some("clean"),
        }
    }
}

impl std::fmt::Display for BuildTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_arg().unwrap_or("default"))
    }
}

/// The external build tool
pub trait Builder {
    /// Run the build tool for `target`, blocking until it exits.
    fn build(&self, target: BuildTarget) -> GoldrunResult<ToolOutput>;
}

impl<T: Builder + ?Sized> Builder for &T {
    fn build(&self, target: BuildTarget) -> GoldrunResult<ToolOutput> {
        (**self).build(target)
    }
}
