//! make / run / clean command handlers
//!
//! Thin forwards to the builder; the tool's own output goes straight to the
//! terminal and its exit status becomes ours.

use std::path::Path;

use anyhow::Result;
use tracing::warn;

use goldrun::config::Config;
use goldrun::domain::ports::{BuildTarget, Builder};
use goldrun::presentation::factory;

/// Run one builder target and return the process exit code.
pub fn cmd_build(project: &Path, config: &Config, target: BuildTarget) -> Result<i32> {
    let builder = factory::create_builder(project, config);
    let output = builder.build(target)?;

    if output.success() {
        return Ok(0);
    }

    warn!(target = %target, code = ?output.code, "build tool failed");
    Ok(exit_code(output.code))
}

/// Any non-zero or signal-terminated exit maps to 1.
fn exit_code(code: Option<i32>) -> i32 {
    match code {
        Some(0) => 0,
        _ => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_code_collapses_failures_to_one() {
        assert_eq!(exit_code(Some(0)), 0);
        assert_eq!(exit_code(Some(2)), 1);
        assert_eq!(exit_code(None), 1);
    }
}
