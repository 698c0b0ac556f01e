//! Test environment builder for isolated goldrun testing.
//!
//! Provides `TestEnv` - a temp project directory wired to a shell-script
//! "build tool", plus helpers to run the goldrun binary against it.

use std::path::{Path, PathBuf};
use std::process::{Child, Command, Output, Stdio};
use tempfile::TempDir;

use super::fixtures::{SH_BUILD_CONFIG, TEST_BUILD_SCRIPT};

/// Result of running a goldrun CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Isolated test environment with temp directories.
///
/// - Project directory (cwd of every invocation)
/// - Home directory, so no user config leaks in
/// - `GOLDRUN_*` variables from the outer environment are removed
pub struct TestEnv {
    pub project_root: TempDir,
    pub home_dir: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    /// Empty project, no config and no build script
    pub fn bare() -> Self {
        Self {
            project_root: TempDir::new().expect("Failed to create project dir"),
            home_dir: TempDir::new().expect("Failed to create home dir"),
            bin: PathBuf::from(env!("CARGO_BIN_EXE_goldrun")),
        }
    }

    /// Project whose build tool is `sh build.sh <target>`, with the default
    /// test script that copies `src/*.output` into `build/test/a/`.
    pub fn new() -> Self {
        Self::with_build_script(TEST_BUILD_SCRIPT)
    }

    pub fn with_build_script(script: &str) -> Self {
        let env = Self::bare();
        env.write_project_file("goldrun.toml", SH_BUILD_CONFIG);
        env.write_project_file("build.sh", script);
        env
    }

    /// Get path relative to project root
    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    /// Run goldrun in the project directory
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    /// Run goldrun with extra env vars
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = self.command(args);
        for (key, value) in env_vars {
            cmd.env(key, value);
        }
        let output = cmd.output().expect("Failed to execute goldrun");
        output_to_result(output)
    }

    /// Start goldrun without waiting (for `watch`)
    pub fn spawn(&self, args: &[&str]) -> Child {
        self.command(args)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .expect("Failed to start goldrun")
    }

    fn command(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(self.project_root.path())
            .args(args)
            .env("HOME", self.home_dir.path())
            .env("XDG_CONFIG_HOME", self.home_dir.path().join(".config"))
            .env("NO_COLOR", "1");
        for key in [
            "GOLDRUN_BUILD_COMMAND",
            "GOLDRUN_DIFF_COMMAND",
            "GOLDRUN_WATCH_INTERVAL_MS",
            "GOLDRUN_WATCH_PATTERNS",
            "GOLDRUN_COLOR",
            "GOLDRUN_LOG",
        ] {
            cmd.env_remove(key);
        }
        cmd
    }

    /// Write a file to the project directory
    pub fn write_project_file(&self, relative_path: &str, content: &str) {
        write_file(&self.project_path(relative_path), content);
    }

    /// Write a file to the home directory
    pub fn write_home_file(&self, relative_path: &str, content: &str) {
        write_file(&self.home_dir.path().join(relative_path), content);
    }

    pub fn read_project_file(&self, relative_path: &str) -> String {
        std::fs::read_to_string(self.project_path(relative_path))
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", relative_path, e))
    }

    pub fn project_file_exists(&self, relative_path: &str) -> bool {
        self.project_path(relative_path).exists()
    }
}

fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create directories");
    }
    std::fs::write(path, content).expect("Failed to write file");
}

/// Convert Command output to TestResult
fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}
