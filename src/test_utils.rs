//! Test utilities for creating temporary docs trees.
//!
//! This module is only compiled for tests and benchmarks.

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// A temporary directory holding a `docs/` tree.
///
/// Paths passed to the builder methods are relative to the docs root.
/// Everything is removed when dropped.
pub struct DocsTree {
    dir: TempDir,
}

impl DocsTree {
    /// Create an empty `docs/` directory inside a fresh temp dir.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        fs::create_dir(dir.path().join("docs")).expect("Failed to create docs dir");
        Self { dir }
    }

    /// The docs root itself.
    pub fn root(&self) -> PathBuf {
        self.dir.path().join("docs")
    }

    /// Write a page, creating parent directories as needed.
    pub fn page(&self, rel: &str) -> PathBuf {
        self.write(rel, "# page\n")
    }

    /// Write a file with the given content, creating parent directories as needed.
    pub fn write(&self, rel: &str, content: &str) -> PathBuf {
        let full_path = self.root().join(rel);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    /// Create an empty directory.
    pub fn dir(&self, rel: &str) -> PathBuf {
        let full_path = self.root().join(rel);
        fs::create_dir_all(&full_path).expect("Failed to create dir");
        full_path
    }

    /// Build a section with an index, `pages` pages and `children` nested
    /// sections, `depth` levels deep. Used by benchmarks.
    pub fn populate(&self, prefix: &str, depth: usize, children: usize, pages: usize) {
        self.page(&format!("{}/index.md", prefix));
        for p in 0..pages {
            self.page(&format!("{}/page_{:03}.md", prefix, p));
        }
        if depth > 1 {
            for c in 0..children {
                self.populate(&format!("{}/section{}", prefix, c), depth - 1, children, pages);
            }
        }
    }
}

impl Default for DocsTree {
    fn default() -> Self {
        Self::new()
    }
}
