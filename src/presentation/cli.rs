//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (-C, --config, --color, --verbose) are inherited by all subcommands
//! - Running `goldrun` without a subcommand is the same as `goldrun test`

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::ColorMode;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

impl From<ColorWhen> for ColorMode {
    fn from(value: ColorWhen) -> Self {
        match value {
            ColorWhen::Auto => ColorMode::Auto,
            ColorWhen::Always => ColorMode::Always,
            ColorWhen::Never => ColorMode::Never,
        }
    }
}

/// goldrun - build, run the tests, and diff their outputs against gold files
#[derive(Parser, Debug)]
#[command(name = "goldrun")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Run 'goldrun' without a command to build and check gold files.")]
pub struct Cli {
    /// Project directory (where the Makefile and goldrun.toml live)
    #[arg(short = 'C', long = "project", global = true, default_value = ".")]
    pub project: PathBuf,

    /// Configuration file (defaults to <project>/goldrun.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// The subcommand to run, `test` when none was given
    pub fn command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Test)
    }
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Build the project (default make target)
    Make,

    /// Build and run the primary binary
    Run,

    /// Build, run the tests and compare their outputs with the gold files
    Test,

    /// Build, run the tests and copy every test output over its gold file
    #[command(name = "update-gold")]
    UpdateGold,

    /// Remove all build products
    Clean,

    /// Rerun `test` whenever a watched file changes
    Watch {
        /// Glob to watch, relative to the project (repeatable; replaces the configured list)
        #[arg(short, long = "pattern", value_name = "GLOB")]
        patterns: Vec<String>,

        /// Poll interval in milliseconds
        #[arg(long, value_name = "MS", value_parser = clap::value_parser!(u64).range(1..))]
        interval_ms: Option<u64>,

        /// Do not clear the screen before each run
        #[arg(long)]
        no_clear: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn no_command_means_test() {
        let cli = parse(&["goldrun"]);
        assert!(cli.command.is_none());
        assert_eq!(cli.command(), Commands::Test);
        assert_eq!(cli.project, PathBuf::from("."));
    }

    #[test]
    fn parses_simple_commands() {
        assert_eq!(parse(&["goldrun", "make"]).command(), Commands::Make);
        assert_eq!(parse(&["goldrun", "run"]).command(), Commands::Run);
        assert_eq!(parse(&["goldrun", "clean"]).command(), Commands::Clean);
        assert_eq!(
            parse(&["goldrun", "update-gold"]).command(),
            Commands::UpdateGold
        );
    }

    #[test]
    fn parses_watch_flags() {
        let cli = parse(&[
            "goldrun",
            "watch",
            "-p",
            "src/**/*.c",
            "--pattern",
            "include/*.h",
            "--interval-ms",
            "250",
            "--no-clear",
        ]);
        assert_eq!(
            cli.command(),
            Commands::Watch {
                patterns: vec!["src/**/*.c".to_string(), "include/*.h".to_string()],
                interval_ms: Some(250),
                no_clear: true,
            }
        );
    }

    #[test]
    fn global_flags_work_after_subcommand() {
        let cli = parse(&[
            "goldrun", "test", "-C", "proj", "--color", "never", "-vv",
        ]);
        assert_eq!(cli.project, PathBuf::from("proj"));
        assert_eq!(cli.color, Some(ColorWhen::Never));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn zero_interval_is_rejected() {
        assert!(Cli::try_parse_from(["goldrun", "watch", "--interval-ms", "0"]).is_err());
    }

    #[test]
    fn unknown_command_is_rejected() {
        assert!(Cli::try_parse_from(["goldrun", "publish"]).is_err());
    }

    #[test]
    fn color_when_maps_to_color_mode() {
        assert_eq!(ColorMode::from(ColorWhen::Always), ColorMode::Always);
        assert_eq!(ColorMode::from(ColorWhen::Never), ColorMode::Never);
        assert_eq!(ColorMode::from(ColorWhen::Auto), ColorMode::Auto);
    }
}
