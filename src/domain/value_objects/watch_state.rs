//! Watch state snapshot
//!
//! A snapshot is the set of `(path, mtime)` pairs matching the watched
//! patterns at one poll tick. Two snapshots are compared as sets: a file
//! swapped for another between polls changes the set even though the count
//! stays the same.

use std::collections::BTreeSet;
use std::path::PathBuf;
use std::time::SystemTime;

use crate::domain::ports::{FileSystem, FsError, FsResult};

/// One watched file and its last modification time
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WatchEntry {
    pub path: PathBuf,
    pub modified: SystemTime,
}

impl WatchEntry {
    pub fn new(path: impl Into<PathBuf>, modified: SystemTime) -> Self {
        Self {
            path: path.into(),
            modified,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WatchState {
    entries: BTreeSet<WatchEntry>,
}

impl WatchState {
    pub fn from_entries(entries: impl IntoIterator<Item = WatchEntry>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// Snapshot every file matching `patterns`.
    ///
    /// Files deleted between enumeration and the metadata lookup are left out
    /// of the snapshot; the next tick sees the deletion anyway.
    pub fn capture<F: FileSystem + ?Sized>(fs: &F, patterns: &[String]) -> FsResult<Self> {
        let mut entries = BTreeSet::new();
        for path in fs.glob(patterns)? {
            match fs.modified(&path) {
                Ok(modified) => {
                    entries.insert(WatchEntry { path, modified });
                }
                Err(FsError::NotFound(_)) => continue,
                Err(e) => return Err(e),
            }
        }
        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Paths whose entry differs between the two snapshots
    /// (added, removed or touched), sorted and de-duplicated.
    pub fn changed_paths(&self, previous: &WatchState) -> Vec<PathBuf> {
        let mut paths: Vec<PathBuf> = self
            .entries
            .symmetric_difference(&previous.entries)
            .map(|e| e.path.clone())
            .collect();
        paths.sort();
        paths.dedup();
        paths
    }
}
