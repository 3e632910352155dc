//! Doctree - a nested markdown tree of contents for a docs directory

pub mod error;
pub mod output;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::{Result, TocError};
pub use output::{
    JsonFormatter, MarkdownFormatter, OutputConfig, markdown_lines, print_json, render_markdown,
};
pub use tree::{EntryKind, TocConfig, TocEntry, TocOutput, TocWalker};
