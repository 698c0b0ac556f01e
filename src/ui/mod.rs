//! Terminal rendering for the CLI

pub mod context;
pub mod terminal;
pub mod views;
