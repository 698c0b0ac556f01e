//! goldrun CLI - golden-file test loop for make-based projects
//!
//! Usage: goldrun [COMMAND]
//!
//! Commands:
//!   make         Build the project
//!   run          Build and run the primary binary
//!   test         Build, run the tests, compare outputs with gold files (default)
//!   update-gold  Build, run the tests, copy outputs over the gold files
//!   clean        Remove build products
//!   watch        Rerun `test` whenever a watched file changes

use std::path::Path;

use anyhow::{ensure, Context, Result};
use clap::Parser;
use tracing::debug;

use goldrun::config::Config;
use goldrun::domain::ports::BuildTarget;
use goldrun::presentation::{Cli, Commands};

mod commands;
mod logging;
mod ui;

use ui::context::UiContext;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let code = run(&cli)?;
    std::process::exit(code);
}

fn run(cli: &Cli) -> Result<i32> {
    let project = cli.project.as_path();
    ensure!(
        project.is_dir(),
        "project directory '{}' does not exist",
        project.display()
    );

    let mut config = load_config(project, cli.config.as_deref())?;
    if let Some(color) = cli.color {
        config.output.color = color.into();
    }

    let command = cli.command();
    debug!(command = ?command, project = %project.display(), "dispatch");

    match command {
        Commands::Make => commands::build::cmd_build(project, &config, BuildTarget::Default),
        Commands::Run => commands::build::cmd_build(project, &config, BuildTarget::Run),
        Commands::Clean => commands::build::cmd_build(project, &config, BuildTarget::Clean),
        Commands::Test => {
            let ui = UiContext::new(cli.color, &config);
            commands::test::cmd_test(project, &config, &ui)
        }
        Commands::UpdateGold => {
            let ui = UiContext::new(cli.color, &config);
            commands::update_gold::cmd_update_gold(project, &config, &ui)
        }
        Commands::Watch {
            patterns,
            interval_ms,
            no_clear,
        } => {
            if !patterns.is_empty() {
                config.watch.patterns = patterns;
            }
            if let Some(ms) = interval_ms {
                config.watch.interval_ms = ms;
            }
            let clear = config.watch.clear && !no_clear;
            let ui = UiContext::new(cli.color, &config);
            commands::watch::cmd_watch(project, &config, &ui, clear)
        }
    }
}

fn load_config(project: &Path, explicit: Option<&Path>) -> Result<Config> {
    let (config, warnings) = Config::resolve(project, explicit).with_context(|| {
        format!(
            "failed to load configuration for '{}'",
            project.display()
        )
    })?;
    for warning in &warnings {
        eprintln!("Warning: {warning}");
    }
    Ok(config)
}
