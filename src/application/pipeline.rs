//! Test pipeline
//!
//! Build → test-output generation → golden comparison, treated as one unit.
//!
//! ## Flow
//!
//! 1. Run the builder's `test` target (builds binaries and writes outputs)
//! 2. On build failure stop immediately; the comparator is never consulted
//! 3. Compare every gold file and fold the report into a `PipelineResult`

use std::io::Write;

use tracing::{info, warn};

use crate::application::compare::Comparator;
use crate::domain::ports::{BuildTarget, Builder};
use crate::domain::value_objects::{ComparisonReport, PipelineResult};
use crate::error::GoldrunResult;

/// Outcome of one pipeline run, with the report when comparison happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineRun {
    pub result: PipelineResult,
    pub report: Option<ComparisonReport>,
}

impl PipelineRun {
    fn build_failed() -> Self {
        Self {
            result: PipelineResult::BuildFailed,
            report: None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.result.is_success()
    }
}

pub struct PipelineRunner<B, C> {
    builder: B,
    comparator: C,
}

impl<B: Builder, C: Comparator> PipelineRunner<B, C> {
    pub fn new(builder: B, comparator: C) -> Self {
        Self {
            builder,
            comparator,
        }
    }

    /// Run the pipeline, writing comparison progress and diffs to `out`.
    ///
    /// Tool availability problems surface as `Err`; everything else is an
    /// outcome in the returned `PipelineRun`.
    pub fn run(&self, out: &mut dyn Write) -> GoldrunResult<PipelineRun> {
        let build = self.builder.build(BuildTarget::Test)?;
        if !build.success() {
            warn!(code = ?build.code, "build failed, skipping golden comparison");
            return Ok(PipelineRun::build_failed());
        }

        let report = self.comparator.compare(out)?;
        let result = PipelineResult::from_report(&report);
        info!(
            total = report.total(),
            failed = report.failed(),
            "golden comparison finished"
        );

        Ok(PipelineRun {
            result,
            report: Some(report),
        })
    }

    pub fn run_tests(&self, out: &mut dyn Write) -> GoldrunResult<PipelineResult> {
        self.run(out).map(|run| run.result)
    }
}
