//! Directory tree walking logic
//!
//! This module turns a docs directory into an ordered list of entries:
//!
//! - `TocWalker::entries`: lazy, restartable iterator, one directory read per step
//! - `TocWalker::walk_streaming`: drives a `TocOutput` sink and counts entries

mod config;
mod entry;
mod filter;
mod streaming;
mod utils;
mod walker;

// Re-export public types
pub use config::{
    DEFAULT_EXCLUDE_SUBSTRING, DEFAULT_INDEX_FILENAME, DEFAULT_MARKDOWN_MARKER, DEFAULT_ROOT,
    TocConfig,
};
pub use entry::{EntryKind, TocEntry};
pub use filter::EntryFilter;
pub use streaming::TocOutput;
pub use walker::{Entries, TocWalker};
