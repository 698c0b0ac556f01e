//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use std::path::Path;

use crate::application::{
    ChangeWatcher, GoldenComparator, PipelineRunner, UpdateGoldOptions, UpdateGoldUseCase,
    WatchOptions,
};
use crate::config::Config;
use crate::infrastructure::{ExternalDiff, LocalFs, MakeBuilder, ProcessRunner};

/// Builder running the configured make-like tool in the project root
pub type ConcreteBuilder = MakeBuilder<ProcessRunner>;

pub type ConcreteComparator = GoldenComparator<ExternalDiff<ProcessRunner>, LocalFs>;

pub type ConcretePipelineRunner = PipelineRunner<ConcreteBuilder, ConcreteComparator>;

pub type ConcreteUpdateGoldUseCase = UpdateGoldUseCase<ConcreteBuilder, LocalFs>;

pub type ConcreteChangeWatcher = ChangeWatcher<LocalFs>;

pub fn create_builder(project_root: &Path, config: &Config) -> ConcreteBuilder {
    MakeBuilder::new(ProcessRunner::new(project_root), config.build.clone())
}

pub fn create_comparator(project_root: &Path, config: &Config) -> ConcreteComparator {
    GoldenComparator::new(
        ExternalDiff::new(ProcessRunner::new(project_root), config.diff.clone()),
        LocalFs::new(project_root),
        config.gold.pattern.clone(),
        config.gold.mapping(),
    )
}

/// Create the build → compare pipeline with all dependencies wired up
pub fn create_pipeline_runner(project_root: &Path, config: &Config) -> ConcretePipelineRunner {
    PipelineRunner::new(
        create_builder(project_root, config),
        create_comparator(project_root, config),
    )
}

pub fn create_update_gold_use_case(
    project_root: &Path,
    config: &Config,
) -> ConcreteUpdateGoldUseCase {
    let options = UpdateGoldOptions {
        artifacts: config.gold.artifacts.clone(),
        gold_dir: config.gold.dir.clone().into(),
        layout: config.gold.layout,
        mapping: config.gold.mapping(),
    };
    UpdateGoldUseCase::new(
        create_builder(project_root, config),
        LocalFs::new(project_root),
        options,
    )
}

/// Create a watcher over the configured patterns
pub fn create_change_watcher(project_root: &Path, config: &Config) -> ConcreteChangeWatcher {
    let options =
        WatchOptions::new(config.watch.patterns.clone()).with_interval(config.watch.interval());
    ChangeWatcher::new(LocalFs::new(project_root), options)
}
