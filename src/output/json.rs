//! JSON output formatting

use std::io::{self, Write};

use serde::Serialize;

use crate::error::Result;
use crate::tree::{TocEntry, TocOutput};

use super::config::OutputConfig;

/// Serialized form of a whole tree of contents.
#[derive(Debug, Serialize)]
struct TocDocument<'a> {
    header: Option<&'a str>,
    entries: &'a [TocEntry],
    directories: usize,
    files: usize,
}

/// Collects entries so they can be serialized as a single document.
pub struct JsonFormatter {
    config: OutputConfig,
    entries: Vec<TocEntry>,
    totals: (usize, usize),
}

impl JsonFormatter {
    pub fn new(config: OutputConfig) -> Self {
        Self {
            config,
            entries: Vec::new(),
            totals: (0, 0),
        }
    }

    pub fn entries(&self) -> &[TocEntry] {
        &self.entries
    }

    /// Pretty-printed JSON document.
    pub fn to_json_string(&self) -> Result<String> {
        let doc = TocDocument {
            header: self.config.header.as_deref(),
            entries: &self.entries,
            directories: self.totals.0,
            files: self.totals.1,
        };
        Ok(serde_json::to_string_pretty(&doc)?)
    }
}

impl TocOutput for JsonFormatter {
    fn output_entry(&mut self, entry: &TocEntry) -> Result<()> {
        self.entries.push(entry.clone());
        Ok(())
    }

    fn finish(&mut self, dir_count: usize, file_count: usize) -> Result<()> {
        self.totals = (dir_count, file_count);
        Ok(())
    }
}

/// Print the collected document as pretty-printed JSON to stdout.
pub fn print_json(formatter: &JsonFormatter) -> Result<()> {
    let json = formatter.to_json_string()?;
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", json)?;
    Ok(())
}
