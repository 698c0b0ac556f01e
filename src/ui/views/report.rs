use crossterm::style::Stylize;
use goldrun::application::{PipelineRun, UpdateGoldResult};
use goldrun::domain::value_objects::{ComparisonReport, ComparisonResult};
use goldrun::PipelineResult;

fn ok(label: &str, color: bool) -> String {
    if color {
        label.green().bold().to_string()
    } else {
        label.to_string()
    }
}

fn failed(label: &str, color: bool) -> String {
    if color {
        label.red().bold().to_string()
    } else {
        label.to_string()
    }
}

/// Summary printed after `test`: one headline plus one line per failure.
pub fn render_test_summary(run: &PipelineRun, color: bool) -> String {
    match (&run.result, &run.report) {
        (PipelineResult::BuildFailed, _) => format!(
            "{} build failed, gold files were not compared\n",
            failed("FAILED", color)
        ),
        (PipelineResult::Success, report) => {
            let total = report.as_ref().map_or(0, ComparisonReport::total);
            if total == 0 {
                format!("{} no gold files found\n", ok("OK", color))
            } else {
                format!(
                    "{} {} gold file{} matched\n",
                    ok("OK", color),
                    total,
                    plural(total)
                )
            }
        }
        (PipelineResult::ComparisonFailed { failed: n, total }, report) => {
            let mut out = format!(
                "{} {} of {} gold file{} differ\n",
                failed("FAILED", color),
                n,
                total,
                plural(*total)
            );
            if let Some(report) = report {
                for comparison in report.failures() {
                    let reason = match comparison.result {
                        ComparisonResult::OutputMissing => "missing output",
                        _ => "mismatch",
                    };
                    out.push_str(&format!(
                        "  {} ({})\n",
                        comparison.gold.display(),
                        reason
                    ));
                }
            }
            out
        }
    }
}

pub fn render_update_gold_summary(result: &UpdateGoldResult, color: bool) -> String {
    match result {
        UpdateGoldResult::BuildFailed => format!(
            "{} build failed, gold files were left untouched\n",
            failed("FAILED", color)
        ),
        UpdateGoldResult::Updated(updates) => {
            let mut out = String::new();
            for update in updates {
                out.push_str(&format!(
                    "  {} -> {}\n",
                    update.artifact.display(),
                    update.gold.display()
                ));
            }
            out.push_str(&format!(
                "{} updated {} gold file{}\n",
                ok("OK", color),
                updates.len(),
                plural(updates.len())
            ));
            out
        }
    }
}

fn plural(n: usize) -> &'static str {
    if n == 1 {
        ""
    } else {
        "s"
    }
}
