//! watch command handler
//!
//! Reruns the `test` pipeline whenever a watched file changes. Never returns;
//! stop it with Ctrl+C.

use std::io;
use std::path::Path;

use anyhow::Result;
use tracing::{debug, error};

use goldrun::config::Config;
use goldrun::presentation::factory;

use crate::ui::context::UiContext;
use crate::ui::views::report::render_test_summary;
use crate::ui::views::watch::WatchPrinter;

pub fn cmd_watch(project: &Path, config: &Config, ui: &UiContext, clear: bool) -> Result<i32> {
    let runner = factory::create_pipeline_runner(project, config);
    let watcher = factory::create_change_watcher(project, config);
    let mut printer = WatchPrinter::new(
        io::stdout(),
        ui.separator_style(),
        clear && ui.caps.is_tty,
    );
    let color = ui.color;

    let action = move || {
        let mut out = io::stdout();
        match runner.run(&mut out) {
            Ok(run) => {
                print!("{}", render_test_summary(&run, color));
                run.is_success()
            }
            Err(err) => {
                error!(error = %err, "pipeline could not run");
                eprintln!("Error: {err}");
                false
            }
        }
    };

    watcher.run(action, move |event| {
        if let Err(err) = printer.handle(&event) {
            debug!(error = %err, "failed to write watch output");
        }
    })
}
