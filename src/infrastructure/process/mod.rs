//! External process adapters

mod builder;
mod diff;
mod runner;

pub use builder::MakeBuilder;
pub use diff::ExternalDiff;
pub use runner::ProcessRunner;
