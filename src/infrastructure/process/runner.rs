//! Child process runner
//!
//! Implements the ToolRunner port with `std::process::Command`. Every call
//! blocks until the child exits; there is no timeout.

use std::path::PathBuf;
use std::process::{Command, Stdio};

use tracing::debug;

use crate::domain::ports::{Invocation, OutputMode, ToolOutput, ToolRunner};
use crate::error::{GoldrunError, GoldrunResult};

/// Runs external programs from the project root
#[derive(Debug, Clone)]
pub struct ProcessRunner {
    cwd: PathBuf,
}

impl ProcessRunner {
    pub fn new(cwd: impl Into<PathBuf>) -> Self {
        Self { cwd: cwd.into() }
    }

    fn command(&self, invocation: &Invocation) -> Command {
        let mut cmd = Command::new(&invocation.program);
        cmd.args(&invocation.args)
            .current_dir(&self.cwd)
            .stdin(Stdio::null());
        cmd
    }
}

impl ToolRunner for ProcessRunner {
    fn run(&self, invocation: &Invocation) -> GoldrunResult<ToolOutput> {
        debug!(command = %invocation.display(), cwd = %self.cwd.display(), "spawning");
        let mut cmd = self.command(invocation);

        let output = match invocation.output {
            OutputMode::Inherit => {
                let status = cmd
                    .stdout(Stdio::inherit())
                    .stderr(Stdio::inherit())
                    .status()
                    .map_err(|e| spawn_error(&invocation.program, e))?;
                ToolOutput {
                    code: status.code(),
                    stdout: String::new(),
                }
            }
            OutputMode::Capture => {
                let out = cmd
                    .stdout(Stdio::piped())
                    .stderr(Stdio::inherit())
                    .output()
                    .map_err(|e| spawn_error(&invocation.program, e))?;
                ToolOutput {
                    code: out.status.code(),
                    stdout: String::from_utf8_lossy(&out.stdout).into_owned(),
                }
            }
        };

        debug!(command = %invocation.program, code = ?output.code, "exited");
        Ok(output)
    }
}

fn spawn_error(program: &str, err: std::io::Error) -> GoldrunError {
    if err.kind() == std::io::ErrorKind::NotFound {
        GoldrunError::ToolUnavailable {
            tool: program.to_string(),
        }
    } else {
        GoldrunError::ToolSpawn {
            tool: program.to_string(),
            source: err,
        }
    }
}
