//! List items produced by the tree walker

use serde::Serialize;

/// Whether a list item points at a directory's index file or a plain page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Dir,
    File,
}

/// One item of the tree of contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TocEntry {
    #[serde(rename = "type")]
    pub kind: EntryKind,
    /// Link text: directory base name or file name.
    pub name: String,
    /// Root-relative link target, `/`-separated.
    pub link: String,
    /// Nesting level in the markdown list (two spaces per level).
    pub level: usize,
}

impl TocEntry {
    /// Item for a directory at `depth`, linking to its index file.
    pub fn dir(name: impl Into<String>, rel: &str, index_filename: &str, depth: usize) -> Self {
        Self {
            kind: EntryKind::Dir,
            name: name.into(),
            link: format!("{}/{}", rel, index_filename),
            level: depth.saturating_sub(1),
        }
    }

    /// Item for a file inside the directory `rel` at `depth`.
    pub fn file(name: impl Into<String>, rel: &str, depth: usize) -> Self {
        let name = name.into();
        Self {
            kind: EntryKind::File,
            link: format!("{}/{}", rel, name),
            name,
            level: depth,
        }
    }

    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dir_entry_level_and_link() {
        let entry = TocEntry::dir("advanced", "guide/advanced", "index.md", 2);
        assert!(entry.is_dir());
        assert_eq!(entry.level, 1);
        assert_eq!(entry.link, "guide/advanced/index.md");
    }

    #[test]
    fn test_file_entry_sits_one_level_below_its_dir() {
        let entry = TocEntry::file("setup.md", "guide", 1);
        assert!(!entry.is_dir());
        assert_eq!(entry.level, 1);
        assert_eq!(entry.link, "guide/setup.md");
    }

    #[test]
    fn test_serializes_kind_as_type() {
        let entry = TocEntry::file("setup.md", "guide", 1);
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["type"], "file");
        assert_eq!(json["name"], "setup.md");
        assert_eq!(json["link"], "guide/setup.md");
        assert_eq!(json["level"], 1);
    }
}
