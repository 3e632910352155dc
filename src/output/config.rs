//! Output configuration types

pub const DEFAULT_HEADER: &str = "- [Introduction](introduction.md)";

/// Configuration for output formatting.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Line printed before the tree, followed by a blank line.
    /// `None` omits both.
    pub header: Option<String>,
}

impl OutputConfig {
    /// Lines that precede the first entry.
    pub fn header_lines(&self) -> Vec<String> {
        match &self.header {
            Some(header) => vec![header.clone(), String::new()],
            None => Vec::new(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            header: Some(DEFAULT_HEADER.to_string()),
        }
    }
}
