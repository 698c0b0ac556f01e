//! External build tool adapter (`make` by default)

use tracing::info;

use crate::config::BuildConfig;
use crate::domain::ports::{BuildTarget, Builder, Invocation, ToolOutput, ToolRunner};
use crate::error::GoldrunResult;

/// Builder backed by a make-like program: `<command> <args..> [target]`
#[derive(Debug, Clone)]
pub struct MakeBuilder<R> {
    runner: R,
    config: BuildConfig,
}

impl<R: ToolRunner> MakeBuilder<R> {
    pub fn new(runner: R, config: BuildConfig) -> Self {
        Self { runner, config }
    }

    pub fn invocation(&self, target: BuildTarget) -> Invocation {
        Invocation::new(self.config.command.clone())
            .args(self.config.args.iter().cloned())
            .args(target.as_arg())
    }
}

impl<R: ToolRunner> Builder for MakeBuilder<R> {
    fn build(&self, target: BuildTarget) -> GoldrunResult<ToolOutput> {
        let invocation = self.invocation(target);
        info!(target = %target, command = %invocation.display(), "build");
        self.runner.run(&invocation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingRunner {
        calls: RefCell<Vec<Invocation>>,
    }

    impl ToolRunner for RecordingRunner {
        fn run(&self, invocation: &Invocation) -> GoldrunResult<ToolOutput> {
            self.calls.borrow_mut().push(invocation.clone());
            Ok(ToolOutput::exited(0))
        }
    }

    #[test]
    fn default_target_passes_no_argument() {
        let runner = RecordingRunner::default();
        let builder = MakeBuilder::new(&runner, BuildConfig::default());
        builder.build(BuildTarget::Default).unwrap();
        assert_eq!(runner.calls.borrow()[0].display(), "make");
    }

    #[test]
    fn configured_args_precede_target() {
        let runner = RecordingRunner::default();
        let config = BuildConfig {
            command: "gmake".to_string(),
            args: vec!["-j4".to_string()],
        };
        let builder = MakeBuilder::new(&runner, config);
        builder.build(BuildTarget::Test).unwrap();
        builder.build(BuildTarget::Clean).unwrap();

        let calls = runner.calls.borrow();
        assert_eq!(calls[0].display(), "gmake -j4 test");
        assert_eq!(calls[1].display(), "gmake -j4 clean");
    }
}
