//! Configuration types for the tree walker

use std::path::PathBuf;

pub const DEFAULT_ROOT: &str = "./docs";
pub const DEFAULT_EXCLUDE_SUBSTRING: &str = "d_";
pub const DEFAULT_INDEX_FILENAME: &str = "index.md";
pub const DEFAULT_MARKDOWN_MARKER: &str = ".md";

/// Traversal policy for building a tree of contents.
///
/// The defaults reproduce the conventional docs layout: walk `./docs`,
/// treat anything with `d_` in its path as a draft, require `index.md`
/// for a directory to be listed, and list files whose name contains `.md`.
#[derive(Debug, Clone)]
pub struct TocConfig {
    pub root_path: PathBuf,
    /// Draft marker. Matched as a substring of the full traversal path for
    /// directories (so `old_design/` is excluded too) and as a name prefix
    /// for files.
    pub exclude_substring: String,
    /// File that must exist directly inside a directory for it to be listed.
    pub index_filename: String,
    /// Substring a file name must contain to be listed.
    pub markdown_marker: String,
    /// Entry names (exact or glob) to skip entirely.
    pub ignore_patterns: Vec<String>,
    /// Deepest directory depth to visit; `None` means unlimited.
    pub max_depth: Option<usize>,
}

impl TocConfig {
    /// Default policy rooted at `root`.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root_path: root.into(),
            ..Default::default()
        }
    }
}

impl Default for TocConfig {
    fn default() -> Self {
        Self {
            root_path: PathBuf::from(DEFAULT_ROOT),
            exclude_substring: DEFAULT_EXCLUDE_SUBSTRING.to_string(),
            index_filename: DEFAULT_INDEX_FILENAME.to_string(),
            markdown_marker: DEFAULT_MARKDOWN_MARKER.to_string(),
            ignore_patterns: Vec::new(),
            max_depth: None,
        }
    }
}
