//! Gold path → output path rewrite
//!
//! A gold file at `test/a/gold/x.output` corresponds to the produced file
//! `build/test/a/x.output`: root the gold path under the build directory,
//! then replace the first occurrence of the gold marker (`/gold/`) with `/`.
//! This is a single textual substitution, not path algebra.

use std::path::{Component, Path, PathBuf};

/// Default build-output root
pub const DEFAULT_BUILD_ROOT: &str = "build";
/// Default gold directory marker
pub const DEFAULT_GOLD_MARKER: &str = "/gold/";

/// Maps gold file paths to the build outputs they are compared against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputMapping {
    build_root: String,
    marker: String,
}

impl Default for OutputMapping {
    fn default() -> Self {
        Self::new(DEFAULT_BUILD_ROOT, DEFAULT_GOLD_MARKER)
    }
}

impl OutputMapping {
    pub fn new(build_root: impl Into<String>, marker: impl Into<String>) -> Self {
        let build_root = build_root.into();
        Self {
            build_root: build_root.trim_end_matches('/').to_string(),
            marker: marker.into(),
        }
    }

    pub fn build_root(&self) -> &str {
        &self.build_root
    }

    pub fn marker(&self) -> &str {
        &self.marker
    }

    /// Output path for a gold file.
    ///
    /// Only the first marker occurrence is replaced. A path without the marker
    /// is simply rooted under the build directory.
    pub fn output_for(&self, gold: &Path) -> PathBuf {
        let rooted = self.rooted(&to_slash(gold));
        PathBuf::from(rooted.replacen(&self.marker, "/", 1))
    }

    /// Gold path whose rewrite is exactly `output`.
    ///
    /// The marker directory is inserted right above the file name. Returns
    /// `None` when `output` is not under the build root, when it already
    /// contains the marker (the forward rewrite would hit that occurrence
    /// first), or when the marker is not a `/name/` segment.
    pub fn gold_for(&self, output: &Path) -> Option<PathBuf> {
        let dir_name = self.marker_dir()?;
        let output = to_slash(output);
        if output.contains(&self.marker) {
            return None;
        }

        let relative = if self.build_root.is_empty() {
            output.as_str()
        } else {
            output.strip_prefix(&self.build_root)?.strip_prefix('/')?
        };

        let gold = match relative.rsplit_once('/') {
            Some((parent, file)) => format!("{}/{}/{}", parent, dir_name, file),
            None => format!("{}/{}", dir_name, relative),
        };
        Some(PathBuf::from(gold))
    }

    fn rooted(&self, relative: &str) -> String {
        if self.build_root.is_empty() {
            relative.to_string()
        } else {
            format!("{}/{}", self.build_root, relative)
        }
    }

    fn marker_dir(&self) -> Option<&str> {
        let inner = self.marker.strip_prefix('/')?.strip_suffix('/')?;
        if inner.is_empty() || inner.contains('/') {
            None
        } else {
            Some(inner)
        }
    }
}

/// Join path components with `/` regardless of platform.
fn to_slash(path: &Path) -> String {
    path.components()
        .filter_map(|c| match c {
            Component::CurDir => None,
            other => Some(other.as_os_str().to_string_lossy().into_owned()),
        })
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rewrites_nested_gold_dir() {
        let mapping = OutputMapping::default();
        assert_eq!(
            mapping.output_for(Path::new("test/a/gold/x.output")),
            PathBuf::from("build/test/a/x.output")
        );
    }

    #[test]
    fn rewrites_top_level_gold_dir() {
        let mapping = OutputMapping::default();
        assert_eq!(
            mapping.output_for(Path::new("test/gold/y.test.output")),
            PathBuf::from("build/test/y.test.output")
        );
    }

    #[test]
    fn replaces_only_first_marker() {
        let mapping = OutputMapping::default();
        assert_eq!(
            mapping.output_for(Path::new("test/gold/sub/gold/z.output")),
            PathBuf::from("build/test/sub/gold/z.output")
        );
    }

    #[test]
    fn leading_curdir_is_ignored() {
        let mapping = OutputMapping::default();
        assert_eq!(
            mapping.output_for(Path::new("./test/a/gold/x.output")),
            PathBuf::from("build/test/a/x.output")
        );
    }

    #[test]
    fn trailing_slash_on_build_root_is_trimmed() {
        let mapping = OutputMapping::new("out/", "/gold/");
        assert_eq!(mapping.build_root(), "out");
        assert_eq!(
            mapping.output_for(Path::new("test/gold/a")),
            PathBuf::from("out/test/a")
        );
    }

    #[test]
    fn gold_for_inverts_output_for() {
        let mapping = OutputMapping::default();
        let gold = mapping
            .gold_for(Path::new("build/test/b/y.test.output"))
            .unwrap();
        assert_eq!(gold, PathBuf::from("test/b/gold/y.test.output"));
        assert_eq!(
            mapping.output_for(&gold),
            PathBuf::from("build/test/b/y.test.output")
        );
    }

    #[test]
    fn gold_for_rejects_paths_outside_build_root() {
        let mapping = OutputMapping::default();
        assert_eq!(mapping.gold_for(Path::new("dist/test/y.output")), None);
        assert_eq!(mapping.gold_for(Path::new("buildx/test/y.output")), None);
    }

    #[test]
    fn gold_for_rejects_outputs_containing_marker() {
        let mapping = OutputMapping::default();
        assert_eq!(mapping.gold_for(Path::new("build/test/gold/y.output")), None);
    }

    #[test]
    fn gold_for_needs_segment_marker() {
        let mapping = OutputMapping::new("build", "-gold-");
        assert_eq!(mapping.gold_for(Path::new("build/test/y.output")), None);
    }
}
