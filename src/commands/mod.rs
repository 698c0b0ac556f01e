//! Command handlers for the CLI
//!
//! Each handler resolves its use case through the factory, renders through
//! `ui`, and returns the exit code for `main` to apply.

pub mod build;
pub mod test;
pub mod update_gold;
pub mod watch;
