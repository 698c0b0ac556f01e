//! Comparison outcomes

use std::path::{Path, PathBuf};

/// Outcome of comparing one gold file with its output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparisonResult {
    Match,
    Mismatch,
    /// The output file was never produced
    OutputMissing,
}

impl ComparisonResult {
    pub fn is_match(&self) -> bool {
        matches!(self, ComparisonResult::Match)
    }
}

/// One evaluated gold/output pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comparison {
    pub gold: PathBuf,
    pub output: PathBuf,
    pub result: ComparisonResult,
}

impl Comparison {
    pub fn new(gold: impl Into<PathBuf>, output: impl Into<PathBuf>, result: ComparisonResult) -> Self {
        Self {
            gold: gold.into(),
            output: output.into(),
            result,
        }
    }
}

/// Every comparison of one run, in evaluation order
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ComparisonReport {
    comparisons: Vec<Comparison>,
}

impl ComparisonReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, comparison: Comparison) {
        self.comparisons.push(comparison);
    }

    pub fn comparisons(&self) -> &[Comparison] {
        &self.comparisons
    }

    pub fn total(&self) -> usize {
        self.comparisons.len()
    }

    /// Mismatches and missing outputs together
    pub fn failed(&self) -> usize {
        self.comparisons
            .iter()
            .filter(|c| !c.result.is_match())
            .count()
    }

    pub fn missing(&self) -> usize {
        self.comparisons
            .iter()
            .filter(|c| c.result == ComparisonResult::OutputMissing)
            .count()
    }

    /// True when every comparison matched (vacuously true for no gold files)
    pub fn all_matched(&self) -> bool {
        self.failed() == 0
    }

    /// Gold paths of failing comparisons
    pub fn failures(&self) -> impl Iterator<Item = &Comparison> {
        self.comparisons.iter().filter(|c| !c.result.is_match())
    }

    pub fn contains_gold(&self, gold: &Path) -> bool {
        self.comparisons.iter().any(|c| c.gold == gold)
    }
}

/// Outcome of one build → test → compare run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineResult {
    /// The builder exited non-zero; nothing was compared
    BuildFailed,
    /// `failed` of `total` comparisons did not match
    ComparisonFailed { failed: usize, total: usize },
    Success,
}

impl PipelineResult {
    pub fn from_report(report: &ComparisonReport) -> Self {
        if report.all_matched() {
            PipelineResult::Success
        } else {
            PipelineResult::ComparisonFailed {
                failed: report.failed(),
                total: report.total(),
            }
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, PipelineResult::Success)
    }

    /// Process exit status for this outcome
    pub fn exit_code(&self) -> i32 {
        if self.is_success() {
            0
        } else {
            1
        }
    }
}
