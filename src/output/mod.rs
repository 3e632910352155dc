//! Tree-of-contents formatting
//!
//! - `config` - Output configuration (header line)
//! - `markdown` - Nested markdown list, written line by line
//! - `json` - JSON document of the same entries

mod config;
mod json;
mod markdown;

// Re-export public types and functions
pub use config::{DEFAULT_HEADER, OutputConfig};
pub use json::{JsonFormatter, print_json};
pub use markdown::{MarkdownFormatter, format_entry, markdown_lines, render_markdown};
