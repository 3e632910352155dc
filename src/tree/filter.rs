//! Entry filtering for tree walking

use std::path::Path;

use super::config::TocConfig;
use super::utils::glob_match;

/// Predicates deciding which directories and files make it into the tree.
pub struct EntryFilter<'a> {
    config: &'a TocConfig,
}

impl<'a> EntryFilter<'a> {
    pub fn new(config: &'a TocConfig) -> Self {
        Self { config }
    }

    /// True when the full traversal path contains the draft marker.
    ///
    /// This inspects the whole path string, root included, not just the
    /// directory's own name: `docs/old_design` is a draft as far as this
    /// check is concerned.
    pub fn is_draft_path(&self, path: &Path) -> bool {
        !self.config.exclude_substring.is_empty()
            && path
                .to_string_lossy()
                .contains(self.config.exclude_substring.as_str())
    }

    /// True when `dir` has its index file directly inside it.
    pub fn has_index(&self, dir: &Path) -> bool {
        dir.join(&self.config.index_filename).exists()
    }

    /// True when a file named `name` should get its own list item.
    pub fn is_listed_file(&self, name: &str) -> bool {
        let marker = self.config.exclude_substring.as_str();
        if !marker.is_empty() && name.starts_with(marker) {
            return false;
        }
        if name.contains(self.config.index_filename.as_str()) {
            return false;
        }
        name.contains(self.config.markdown_marker.as_str())
    }

    /// True when `name` matches one of the ignore patterns.
    pub fn is_ignored(&self, name: &str) -> bool {
        self.config
            .ignore_patterns
            .iter()
            .any(|pattern| name == pattern || glob_match(pattern, name))
    }
}
