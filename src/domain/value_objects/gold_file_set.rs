//! Gold file set value object

use std::path::{Path, PathBuf};

use crate::domain::ports::{FileSystem, FsResult};

use super::OutputMapping;

/// Default pattern locating gold files
pub const DEFAULT_GOLD_PATTERN: &str = "test/**/gold/*";

/// Ordered set of gold files discovered under the project root.
///
/// Entries are kept sorted so that reports are reproducible between runs.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GoldFileSet {
    files: Vec<PathBuf>,
}

impl GoldFileSet {
    pub fn new(files: impl IntoIterator<Item = PathBuf>) -> Self {
        let mut files: Vec<PathBuf> = files.into_iter().collect();
        files.sort();
        files.dedup();
        Self { files }
    }

    /// Enumerate gold files matching `pattern`.
    pub fn discover<F: FileSystem + ?Sized>(fs: &F, pattern: &str) -> FsResult<Self> {
        fs.glob(&[pattern.to_string()]).map(Self::new)
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.files.iter().map(PathBuf::as_path)
    }

    /// Each gold file paired with its output path.
    pub fn pairs<'a>(
        &'a self,
        mapping: &'a OutputMapping,
    ) -> impl Iterator<Item = (&'a Path, PathBuf)> + 'a {
        self.iter().map(move |gold| (gold, mapping.output_for(gold)))
    }
}
