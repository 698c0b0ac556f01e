//! Golden Comparator
//!
//! Diffs every gold file against the output it maps to and folds the results
//! into one `ComparisonReport`. Every pair is evaluated even after the first
//! failure so a single run lists all broken outputs.

use std::io::Write;

use tracing::{debug, warn};

use crate::domain::ports::{DiffTool, FileSystem};
use crate::domain::value_objects::{
    Comparison, ComparisonReport, ComparisonResult, GoldFileSet, OutputMapping,
};
use crate::error::{GoldrunError, GoldrunResult};

/// Something that produces a comparison report.
///
/// The pipeline depends on this rather than on `GoldenComparator` so that the
/// build short-circuit can be observed with an instrumented stand-in.
pub trait Comparator {
    /// Compare all gold files, writing progress and diff text to `out`.
    fn compare(&self, out: &mut dyn Write) -> GoldrunResult<ComparisonReport>;
}

impl<T: Comparator + ?Sized> Comparator for &T {
    fn compare(&self, out: &mut dyn Write) -> GoldrunResult<ComparisonReport> {
        (**self).compare(out)
    }
}

pub struct GoldenComparator<D, F> {
    diff: D,
    fs: F,
    pattern: String,
    mapping: OutputMapping,
}

impl<D: DiffTool, F: FileSystem> GoldenComparator<D, F> {
    pub fn new(diff: D, fs: F, pattern: impl Into<String>, mapping: OutputMapping) -> Self {
        Self {
            diff,
            fs,
            pattern: pattern.into(),
            mapping,
        }
    }

    pub fn mapping(&self) -> &OutputMapping {
        &self.mapping
    }

    /// Compare an already discovered set of gold files.
    ///
    /// Only an unavailable diff tool aborts the run; any other per-pair
    /// problem is recorded as a mismatch and the loop moves on.
    pub fn compare_set(
        &self,
        set: &GoldFileSet,
        out: &mut dyn Write,
    ) -> GoldrunResult<ComparisonReport> {
        let mut report = ComparisonReport::new();

        for (gold, output) in set.pairs(&self.mapping) {
            writeln!(out, "Checking '{}' against gold file ...", output.display())?;

            let result = if !self.fs.exists(&output) {
                writeln!(out, "Missing output '{}'", output.display())?;
                ComparisonResult::OutputMissing
            } else {
                match self.diff.diff(gold, &output) {
                    Ok(outcome) => {
                        if !outcome.text.is_empty() {
                            out.write_all(outcome.text.as_bytes())?;
                            if !outcome.text.ends_with('\n') {
                                writeln!(out)?;
                            }
                        }
                        if outcome.equal {
                            ComparisonResult::Match
                        } else {
                            ComparisonResult::Mismatch
                        }
                    }
                    Err(err @ GoldrunError::ToolUnavailable { .. }) => return Err(err),
                    Err(err) => {
                        warn!(gold = %gold.display(), error = %err, "comparison failed");
                        writeln!(out, "Could not compare '{}': {}", gold.display(), err)?;
                        ComparisonResult::Mismatch
                    }
                }
            };

            debug!(gold = %gold.display(), result = ?result, "compared");
            report.push(Comparison::new(gold, output, result));
        }

        out.flush()?;
        Ok(report)
    }
}

impl<D: DiffTool, F: FileSystem> Comparator for GoldenComparator<D, F> {
    fn compare(&self, out: &mut dyn Write) -> GoldrunResult<ComparisonReport> {
        let set = GoldFileSet::discover(&self.fs, &self.pattern)?;
        if set.is_empty() {
            warn!(pattern = %self.pattern, "no gold files found");
        }
        self.compare_set(&set, out)
    }
}
