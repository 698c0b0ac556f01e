//! test command handler

use std::io::{self, Write};
use std::path::Path;

use anyhow::Result;

use goldrun::config::Config;
use goldrun::presentation::factory;

use crate::ui::context::UiContext;
use crate::ui::views::report::render_test_summary;

/// Build, compare, print the summary. Returns the process exit code.
pub fn cmd_test(project: &Path, config: &Config, ui: &UiContext) -> Result<i32> {
    let runner = factory::create_pipeline_runner(project, config);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let run = runner.run(&mut out)?;
    write!(out, "{}", render_test_summary(&run, ui.color))?;
    out.flush()?;

    Ok(run.result.exit_code())
}
