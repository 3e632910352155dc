//! TocWalker - depth-first traversal producing tree-of-contents entries

use std::collections::VecDeque;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, trace, warn};

use crate::error::{Result, TocError};

use super::config::TocConfig;
use super::entry::TocEntry;
use super::filter::EntryFilter;
use super::utils::{depth_of, get_name, link_path};

/// Walks a docs root and yields the entries of its tree of contents.
///
/// The walker itself holds no traversal state; every call to
/// [`TocWalker::entries`] starts a fresh pass over the filesystem.
pub struct TocWalker {
    config: TocConfig,
}

impl TocWalker {
    pub fn new(config: TocConfig) -> Self {
        Self { config }
    }

    /// Lazily walk the tree. Directories are read one per step.
    pub fn entries(&self) -> Entries<'_> {
        Entries {
            config: &self.config,
            filter: EntryFilter::new(&self.config),
            stack: vec![PathBuf::new()],
            ready: VecDeque::new(),
            failed: false,
        }
    }

    /// Collect every entry, stopping at the first filesystem error.
    pub fn collect(&self) -> Result<Vec<TocEntry>> {
        self.entries().collect()
    }
}

/// Iterator over tree-of-contents entries in output order.
///
/// Each directory's own item comes first, then its listed files, then its
/// subdirectories depth-first, siblings in byte order of their names.
/// After an error the iterator is exhausted.
pub struct Entries<'a> {
    config: &'a TocConfig,
    filter: EntryFilter<'a>,
    /// Root-relative directories still to visit; the top is visited next.
    stack: Vec<PathBuf>,
    ready: VecDeque<TocEntry>,
    failed: bool,
}

impl Iterator for Entries<'_> {
    type Item = Result<TocEntry>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(entry) = self.ready.pop_front() {
                return Some(Ok(entry));
            }
            if self.failed {
                return None;
            }
            let rel = self.stack.pop()?;
            if let Err(e) = self.visit(&rel) {
                self.failed = true;
                self.stack.clear();
                return Some(Err(e));
            }
        }
    }
}

impl std::iter::FusedIterator for Entries<'_> {}

impl Entries<'_> {
    fn visit(&mut self, rel: &Path) -> Result<()> {
        let depth = depth_of(rel);
        let path = self.config.root_path.join(rel);

        if depth == 0 {
            if !path.is_dir() {
                warn!(root = %path.display(), "docs root is missing or not a directory");
                return Ok(());
            }
        } else if self.filter.is_draft_path(&path) {
            // Every descendant path contains the marker as well
            debug!(path = %path.display(), "skipping draft directory");
            return Ok(());
        }

        let children = read_sorted(&path).map_err(|e| TocError::read_dir(&path, e))?;

        let mut files = Vec::new();
        let mut subdirs = Vec::new();
        let descend = self.config.max_depth.is_none_or(|max| depth < max);

        for child in children {
            let name = child.file_name();
            let name_str = name.to_string_lossy();
            if self.filter.is_ignored(&name_str) {
                debug!(path = %child.path().display(), "skipping ignored entry");
                continue;
            }

            let child_path = child.path();
            if child_path.is_dir() {
                if descend && !child_path.is_symlink() {
                    subdirs.push(rel.join(&name));
                }
            } else {
                files.push(name_str.into_owned());
            }
        }

        if depth > 0 {
            self.emit(rel, &path, depth, &files);
        }

        // Reversed so the first sibling is popped first
        self.stack.extend(subdirs.into_iter().rev());
        Ok(())
    }

    fn emit(&mut self, rel: &Path, path: &Path, depth: usize, files: &[String]) {
        if !self.filter.has_index(path) {
            debug!(
                path = %path.display(),
                index = %self.config.index_filename,
                "skipping directory without index file"
            );
            return;
        }

        let link = link_path(rel);
        let entry = TocEntry::dir(get_name(rel), &link, &self.config.index_filename, depth);
        trace!(link = %entry.link, "directory entry");
        self.ready.push_back(entry);

        for name in files {
            if !self.filter.is_listed_file(name) {
                continue;
            }
            let entry = TocEntry::file(name.as_str(), &link, depth);
            trace!(link = %entry.link, "file entry");
            self.ready.push_back(entry);
        }
    }
}

/// Read a directory's entries sorted by file name.
fn read_sorted(path: &Path) -> io::Result<Vec<fs::DirEntry>> {
    let mut entries = fs::read_dir(path)?.collect::<io::Result<Vec<_>>>()?;
    entries.sort_by_key(|e| e.file_name());
    Ok(entries)
}
