//! Markdown output formatting
//!
//! This module provides `MarkdownFormatter` which writes the tree of contents
//! as a nested markdown list, two spaces of indentation per level. Every item
//! line ends with a single trailing space.

use std::io::{self, Write};

use crate::error::Result;
use crate::tree::{TocConfig, TocEntry, TocOutput, TocWalker};

use super::config::OutputConfig;

/// Format one entry as a markdown list line (without newline).
pub fn format_entry(entry: &TocEntry) -> String {
    format!(
        "{}- [{}]({}) ",
        "  ".repeat(entry.level),
        entry.name,
        entry.link
    )
}

/// Lazily produce every output line: header lines first, then one per entry.
///
/// The sequence is restartable; call again for a fresh pass.
pub fn markdown_lines<'a>(
    walker: &'a TocWalker,
    config: &OutputConfig,
) -> impl Iterator<Item = Result<String>> + 'a {
    config
        .header_lines()
        .into_iter()
        .map(Ok)
        .chain(walker.entries().map(|entry| entry.map(|e| format_entry(&e))))
}

/// Render the whole tree of contents to a string.
pub fn render_markdown(toc: &TocConfig, config: &OutputConfig) -> Result<String> {
    let walker = TocWalker::new(toc.clone());
    let mut formatter = MarkdownFormatter::new(config.clone(), Vec::new());
    walker.walk_streaming(&mut formatter)?;
    // Only ever written from &str
    Ok(String::from_utf8_lossy(&formatter.into_inner()).into_owned())
}

/// Markdown output formatter - writes each line as soon as it is produced.
/// Implements the TocOutput trait for use with TocWalker::walk_streaming.
pub struct MarkdownFormatter<W: Write> {
    config: OutputConfig,
    out: W,
}

impl<W: Write> MarkdownFormatter<W> {
    pub fn new(config: OutputConfig, out: W) -> Self {
        Self { config, out }
    }

    /// Take back the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl MarkdownFormatter<io::StdoutLock<'static>> {
    /// Formatter writing to locked stdout.
    pub fn stdout(config: OutputConfig) -> Self {
        Self::new(config, io::stdout().lock())
    }
}

impl<W: Write> TocOutput for MarkdownFormatter<W> {
    fn start(&mut self) -> Result<()> {
        for line in self.config.header_lines() {
            writeln!(self.out, "{}", line)?;
        }
        Ok(())
    }

    fn output_entry(&mut self, entry: &TocEntry) -> Result<()> {
        writeln!(self.out, "{}", format_entry(entry))?;
        Ok(())
    }

    fn finish(&mut self, _dir_count: usize, _file_count: usize) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn touch(root: &Path, rel: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "").unwrap();
    }

    #[test]
    fn test_format_dir_entry() {
        let entry = TocEntry::dir("guide", "guide", "index.md", 1);
        assert_eq!(format_entry(&entry), "- [guide](guide/index.md) ");
    }

    #[test]
    fn test_format_nested_entries() {
        let dir = TocEntry::dir("ops", "guide/ops", "index.md", 2);
        assert_eq!(format_entry(&dir), "  - [ops](guide/ops/index.md) ");
        let file = TocEntry::file("deploy.md", "guide/ops", 2);
        assert_eq!(format_entry(&file), "    - [deploy.md](guide/ops/deploy.md) ");
    }

    #[test]
    fn test_render_reference_layout() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "guide/index.md");
        touch(tmp.path(), "guide/setup.md");
        touch(tmp.path(), "d_draft/index.md");
        fs::create_dir(tmp.path().join("empty")).unwrap();

        let out = render_markdown(&TocConfig::with_root(tmp.path()), &OutputConfig::default())
            .unwrap();
        assert_eq!(
            out,
            "- [Introduction](introduction.md)\n\
             \n\
             - [guide](guide/index.md) \n  \
             - [setup.md](guide/setup.md) \n"
        );
    }

    #[test]
    fn test_render_missing_root_prints_header_only() {
        let tmp = TempDir::new().unwrap();
        let toc = TocConfig::with_root(tmp.path().join("docs"));
        let out = render_markdown(&toc, &OutputConfig::default()).unwrap();
        assert_eq!(out, "- [Introduction](introduction.md)\n\n");
    }

    #[test]
    fn test_render_without_header() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "guide/index.md");
        let out = render_markdown(
            &TocConfig::with_root(tmp.path()),
            &OutputConfig { header: None },
        )
        .unwrap();
        assert_eq!(out, "- [guide](guide/index.md) \n");
    }

    #[test]
    fn test_lines_match_rendered_output() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "guide/index.md");
        touch(tmp.path(), "guide/setup.md");
        touch(tmp.path(), "guide/ops/index.md");

        let toc = TocConfig::with_root(tmp.path());
        let config = OutputConfig::default();
        let walker = TocWalker::new(toc.clone());

        let lines: Vec<String> = markdown_lines(&walker, &config)
            .collect::<Result<_>>()
            .unwrap();
        let mut joined = lines.join("\n");
        joined.push('\n');
        assert_eq!(joined, render_markdown(&toc, &config).unwrap());

        // Restartable
        let again: Vec<String> = markdown_lines(&walker, &config)
            .collect::<Result<_>>()
            .unwrap();
        assert_eq!(lines, again);
    }
}
