//! External diff adapter (`diff -B -u` by default)
//!
//! Exit status 0 means equal, 1 means different. Anything else is trouble
//! (unreadable file, bad flag); it is counted as a difference so the run
//! still fails, and the tool's own stderr explains why.

use std::path::Path;

use tracing::warn;

use crate::config::DiffConfig;
use crate::domain::ports::{DiffOutcome, DiffTool, Invocation, ToolRunner};
use crate::error::GoldrunResult;

#[derive(Debug, Clone)]
pub struct ExternalDiff<R> {
    runner: R,
    config: DiffConfig,
}

impl<R: ToolRunner> ExternalDiff<R> {
    pub fn new(runner: R, config: DiffConfig) -> Self {
        Self { runner, config }
    }

    pub fn invocation(&self, gold: &Path, output: &Path) -> Invocation {
        Invocation::new(self.config.command.clone())
            .args(self.config.args.iter().cloned())
            .args([
                gold.to_string_lossy().into_owned(),
                output.to_string_lossy().into_owned(),
            ])
            .capture()
    }
}

impl<R: ToolRunner> DiffTool for ExternalDiff<R> {
    fn diff(&self, gold: &Path, output: &Path) -> GoldrunResult<DiffOutcome> {
        let result = self.runner.run(&self.invocation(gold, output))?;
        match result.code {
            Some(0) => Ok(DiffOutcome::equal()),
            Some(1) => Ok(DiffOutcome::different(result.stdout)),
            code => {
                warn!(
                    tool = %self.config.command,
                    gold = %gold.display(),
                    code = ?code,
                    "diff tool reported trouble"
                );
                Ok(DiffOutcome::different(result.stdout))
            }
        }
    }
}
