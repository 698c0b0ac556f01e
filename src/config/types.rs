//! Configuration type definitions

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::domain::value_objects::{
    ConfigWarning, OutputMapping, DEFAULT_BUILD_ROOT, DEFAULT_GOLD_MARKER, DEFAULT_GOLD_PATTERN,
};
use crate::error::GoldrunResult;

use super::loader;

/// Build tool configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BuildConfig {
    #[serde(default = "default_build_command")]
    pub command: String,

    #[serde(default)]
    pub args: Vec<String>,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            command: default_build_command(),
            args: Vec::new(),
        }
    }
}

fn default_build_command() -> String {
    "make".to_string()
}

/// Diff tool configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DiffConfig {
    #[serde(default = "default_diff_command")]
    pub command: String,

    #[serde(default = "default_diff_args")]
    pub args: Vec<String>,
}

impl Default for DiffConfig {
    fn default() -> Self {
        Self {
            command: default_diff_command(),
            args: default_diff_args(),
        }
    }
}

fn default_diff_command() -> String {
    "diff".to_string()
}

fn default_diff_args() -> Vec<String> {
    vec!["-B".to_string(), "-u".to_string()]
}

/// Where `update-gold` writes refreshed gold files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum GoldLayout {
    /// Every artifact lands directly in `gold.dir`
    #[default]
    Flat,
    /// Each artifact lands at the gold path that maps back to it
    Mirror,
}

/// Gold file layout configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GoldConfig {
    /// Pattern locating gold files
    #[serde(default = "default_gold_pattern")]
    pub pattern: String,

    /// Segment replaced by `/` when mapping gold paths to outputs
    #[serde(default = "default_gold_marker")]
    pub marker: String,

    /// Root of the build output tree
    #[serde(default = "default_build_root")]
    pub build_root: String,

    /// Pattern locating test-runner artifacts for `update-gold`
    #[serde(default = "default_artifacts")]
    pub artifacts: String,

    /// Destination of `update-gold` in flat layout
    #[serde(default = "default_gold_dir")]
    pub dir: String,

    #[serde(default)]
    pub layout: GoldLayout,
}

impl Default for GoldConfig {
    fn default() -> Self {
        Self {
            pattern: default_gold_pattern(),
            marker: default_gold_marker(),
            build_root: default_build_root(),
            artifacts: default_artifacts(),
            dir: default_gold_dir(),
            layout: GoldLayout::default(),
        }
    }
}

impl GoldConfig {
    pub fn mapping(&self) -> OutputMapping {
        OutputMapping::new(self.build_root.clone(), self.marker.clone())
    }
}

fn default_gold_pattern() -> String {
    DEFAULT_GOLD_PATTERN.to_string()
}

fn default_gold_marker() -> String {
    DEFAULT_GOLD_MARKER.to_string()
}

fn default_build_root() -> String {
    DEFAULT_BUILD_ROOT.to_string()
}

fn default_artifacts() -> String {
    "build/test/**/*.test.output".to_string()
}

fn default_gold_dir() -> String {
    "test/gold".to_string()
}

/// Watch loop configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WatchConfig {
    #[serde(default = "default_watch_patterns")]
    pub patterns: Vec<String>,

    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,

    /// Clear the terminal before each run
    #[serde(default = "default_true")]
    pub clear: bool,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            patterns: default_watch_patterns(),
            interval_ms: default_interval_ms(),
            clear: true,
        }
    }
}

/// Shortest poll interval; anything lower is raised to this.
pub const MIN_INTERVAL_MS: u64 = 10;

impl WatchConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms.max(MIN_INTERVAL_MS))
    }
}

fn default_watch_patterns() -> Vec<String> {
    vec![
        "**/*.{c,cc,cpp,h,hh,hpp,gold}".to_string(),
        DEFAULT_GOLD_PATTERN.to_string(),
    ]
}

fn default_interval_ms() -> u64 {
    500
}

fn default_true() -> bool {
    true
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub color: ColorMode,
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub build: BuildConfig,

    #[serde(default)]
    pub diff: DiffConfig,

    #[serde(default)]
    pub gold: GoldConfig,

    #[serde(default)]
    pub watch: WatchConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Project configuration file name
    pub const FILE_NAME: &'static str = "goldrun.toml";

    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> GoldrunResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> GoldrunResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Resolve the configuration for a project: explicit file, project file,
    /// user file or defaults, then environment overrides.
    pub fn resolve(
        project_root: &Path,
        explicit: Option<&Path>,
    ) -> GoldrunResult<(Self, Vec<ConfigWarning>)> {
        loader::resolve(project_root, explicit)
    }

    /// Apply environment variable overrides (GOLDRUN_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }
}
