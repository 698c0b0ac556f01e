//! ToolRunner port - run an external program and report how it exited
//!
//! Builder, Test Runner and Diff Tool are all opaque processes. This trait is
//! the single capability they are reached through, so the pipeline can be
//! exercised against fakes without spawning anything.

use crate::error::GoldrunResult;

/// How the child's standard output is handled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Child writes straight to our terminal (builder)
    #[default]
    Inherit,
    /// Child output is collected into `ToolOutput::stdout` (diff)
    Capture,
}

/// A single external program invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
    pub output: OutputMode,
}

impl Invocation {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            output: OutputMode::Inherit,
        }
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn capture(mut self) -> Self {
        self.output = OutputMode::Capture;
        self
    }

    /// Shell-like rendering for log lines
    pub fn display(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Exit status and captured output of a finished process
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ToolOutput {
    /// Exit code; `None` when the process was killed by a signal
    pub code: Option<i32>,
    /// Captured stdout (empty in `OutputMode::Inherit`)
    pub stdout: String,
}

impl ToolOutput {
    pub fn exited(code: i32) -> Self {
        Self {
            code: Some(code),
            stdout: String::new(),
        }
    }

    pub fn with_stdout(mut self, stdout: impl Into<String>) -> Self {
        self.stdout = stdout.into();
        self
    }

    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Runs external programs, blocking until they exit.
pub trait ToolRunner {
    /// Run the invocation to completion.
    ///
    /// A non-zero exit is *not* an error; it is reported in `ToolOutput::code`.
    /// Errors are reserved for programs that cannot be started.
    fn run(&self, invocation: &Invocation) -> GoldrunResult<ToolOutput>;
}

impl<T: ToolRunner + ?Sized> ToolRunner for &T {
    fn run(&self, invocation: &Invocation) -> GoldrunResult<ToolOutput> {
        (**self).run(invocation)
    }
}
