//! Local File System Implementation
//!
//! Implements the FileSystem port for a project directory on disk. Globbing
//! walks the tree with the `ignore` crate and matches each file against
//! gitignore-style override globs, so `test/**/gold/*` and
//! `**/*.{c,h}` behave the way shell globs with `**` do.

use std::path::{Path, PathBuf};
use std::time::SystemTime;

use ignore::overrides::{Override, OverrideBuilder};
use ignore::WalkBuilder;
use tracing::{debug, trace};

use crate::domain::ports::file_system::{FileSystem, FsError, FsResult};

/// Local file system rooted at a project directory
///
/// Relative paths handed to the port are resolved against `root`; paths
/// returned by `glob` are relative to it.
#[derive(Debug, Clone)]
pub struct LocalFs {
    root: PathBuf,
}

impl LocalFs {
    /// Create a LocalFs for the given project root
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        self.root.join(path)
    }

    fn matcher(&self, patterns: &[String]) -> FsResult<Override> {
        let mut builder = OverrideBuilder::new(&self.root);
        for pattern in patterns {
            builder.add(pattern).map_err(|e| FsError::Pattern {
                pattern: pattern.clone(),
                message: e.to_string(),
            })?;
        }
        builder.build().map_err(|e| FsError::Pattern {
            pattern: patterns.join(", "),
            message: e.to_string(),
        })
    }
}

impl FileSystem for LocalFs {
    fn glob(&self, patterns: &[String]) -> FsResult<Vec<PathBuf>> {
        if patterns.is_empty() {
            return Ok(Vec::new());
        }
        let matcher = self.matcher(patterns)?;

        // Hidden entries (.git, editor swap files) are skipped like shell globs do;
        // .gitignore is deliberately not honoured, build/ is usually listed there.
        let walker = WalkBuilder::new(&self.root)
            .standard_filters(false)
            .hidden(true)
            .follow_links(false)
            .build();

        let mut files = Vec::new();
        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    debug!(error = %err, "skipping unreadable entry");
                    continue;
                }
            };
            if !entry.file_type().is_some_and(|t| t.is_file()) {
                continue;
            }
            let Ok(relative) = entry.path().strip_prefix(&self.root) else {
                continue;
            };
            if matcher.matched(relative, false).is_whitelist() {
                files.push(relative.to_path_buf());
            }
        }

        files.sort();
        files.dedup();
        trace!(count = files.len(), patterns = ?patterns, "glob complete");
        Ok(files)
    }

    fn modified(&self, path: &Path) -> FsResult<SystemTime> {
        std::fs::metadata(self.resolve(path))
            .and_then(|m| m.modified())
            .map_err(|e| FsError::at(path, e))
    }

    fn exists(&self, path: &Path) -> bool {
        self.resolve(path).is_file()
    }

    fn create_dir_all(&self, path: &Path) -> FsResult<()> {
        std::fs::create_dir_all(self.resolve(path)).map_err(|e| FsError::at(path, e))
    }

    fn copy(&self, from: &Path, to: &Path) -> FsResult<u64> {
        let source = self.resolve(from);
        if !source.is_file() {
            return Err(FsError::NotFound(from.to_path_buf()));
        }
        std::fs::copy(source, self.resolve(to)).map_err(|e| FsError::at(to, e))
    }
}
