//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating use cases with infrastructure dependencies
//! - The watch-run separator line
//!
//! ## Structure
//!
//! - `cli` - Command line definition
//! - `factory` - Creates use cases with proper dependencies (dependency injection)
//! - `separator` - Full-width pass/fail line printed after each watch run
//!
//! ## Usage
//!
//! ```ignore
//! use goldrun::presentation::factory;
//!
//! let runner = factory::create_pipeline_runner(&project_root, &config);
//! let result = runner.run_tests(&mut std::io::stdout())?;
//! ```

pub mod cli;
pub mod factory;
pub mod separator;

pub use cli::{Cli, ColorWhen, Commands};
pub use separator::{SeparatorStyle, DEFAULT_WIDTH};
