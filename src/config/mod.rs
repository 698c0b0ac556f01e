//! Configuration module for goldrun
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority, applied by the binary)
//! 2. Environment variables (GOLDRUN_*)
//! 3. Explicit `--config` file, else project config (`goldrun.toml`)
//! 4. User config (`$XDG_CONFIG_HOME/goldrun/config.toml`)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use crate::domain::value_objects::ConfigWarning;

pub use types::{
    BuildConfig, ColorMode, Config, DiffConfig, GoldConfig, GoldLayout, OutputConfig, WatchConfig,
    MIN_INTERVAL_MS,
};
