//! Update Gold Use Case
//!
//! Rebuilds and reruns the tests, then promotes every produced test-output
//! artifact to a gold file, overwriting whatever gold was there before.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::config::GoldLayout;
use crate::domain::ports::{BuildTarget, Builder, FileSystem};
use crate::domain::value_objects::OutputMapping;
use crate::error::GoldrunResult;

/// Where artifacts come from and where gold files go
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateGoldOptions {
    /// Glob selecting comparable test outputs (e.g. `build/test/**/*.test.output`)
    pub artifacts: String,
    /// Gold directory for the flat layout
    pub gold_dir: PathBuf,
    pub layout: GoldLayout,
    /// Used by the mirror layout to place each artifact next to its test
    pub mapping: OutputMapping,
}

/// One promoted artifact
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoldUpdate {
    pub artifact: PathBuf,
    pub gold: PathBuf,
    pub bytes: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateGoldResult {
    /// The build failed; no gold file was touched
    BuildFailed,
    Updated(Vec<GoldUpdate>),
}

impl UpdateGoldResult {
    pub fn is_success(&self) -> bool {
        matches!(self, UpdateGoldResult::Updated(_))
    }
}

pub struct UpdateGoldUseCase<B, F> {
    builder: B,
    fs: F,
    options: UpdateGoldOptions,
}

impl<B: Builder, F: FileSystem> UpdateGoldUseCase<B, F> {
    pub fn new(builder: B, fs: F, options: UpdateGoldOptions) -> Self {
        Self {
            builder,
            fs,
            options,
        }
    }

    pub fn execute(&self) -> GoldrunResult<UpdateGoldResult> {
        let build = self.builder.build(BuildTarget::Test)?;
        if !build.success() {
            warn!(code = ?build.code, "build failed, gold files left untouched");
            return Ok(UpdateGoldResult::BuildFailed);
        }

        let artifacts = self.fs.glob(std::slice::from_ref(&self.options.artifacts))?;
        if artifacts.is_empty() {
            warn!(pattern = %self.options.artifacts, "no test outputs to promote");
        }

        let mut updates = Vec::with_capacity(artifacts.len());
        // flat layout: later artifacts with the same file name win
        let mut claimed: BTreeMap<PathBuf, PathBuf> = BTreeMap::new();

        for artifact in artifacts {
            let Some(gold) = self.destination(&artifact) else {
                continue;
            };

            if let Some(previous) = claimed.insert(gold.clone(), artifact.clone()) {
                warn!(
                    gold = %gold.display(),
                    previous = %previous.display(),
                    artifact = %artifact.display(),
                    "two artifacts share a gold file name; the later one wins"
                );
            }

            if let Some(parent) = gold.parent().filter(|p| !p.as_os_str().is_empty()) {
                self.fs.create_dir_all(parent)?;
            }
            let bytes = self.fs.copy(&artifact, &gold)?;
            debug!(from = %artifact.display(), to = %gold.display(), bytes, "gold updated");
            updates.push(GoldUpdate {
                artifact,
                gold,
                bytes,
            });
        }

        info!(count = updates.len(), "gold files updated");
        Ok(UpdateGoldResult::Updated(updates))
    }

    fn destination(&self, artifact: &Path) -> Option<PathBuf> {
        match self.options.layout {
            GoldLayout::Flat => self.flat_destination(artifact),
            GoldLayout::Mirror => self.options.mapping.gold_for(artifact).or_else(|| {
                warn!(
                    artifact = %artifact.display(),
                    "artifact is outside the build root, using the flat gold directory"
                );
                self.flat_destination(artifact)
            }),
        }
    }

    fn flat_destination(&self, artifact: &Path) -> Option<PathBuf> {
        match artifact.file_name() {
            Some(name) => Some(self.options.gold_dir.join(name)),
            None => {
                warn!(artifact = %artifact.display(), "artifact has no file name, skipped");
                None
            }
        }
    }
}
