//! Streaming a walk into an output sink

use crate::error::Result;

use super::entry::TocEntry;
use super::walker::TocWalker;

/// Callback for streaming output - receives entries in display order.
pub trait TocOutput {
    /// Called once before any entry.
    fn start(&mut self) -> Result<()> {
        Ok(())
    }

    fn output_entry(&mut self, entry: &TocEntry) -> Result<()>;

    fn finish(&mut self, dir_count: usize, file_count: usize) -> Result<()>;
}

impl TocWalker {
    /// Walk and stream output - returns (dir_count, file_count)
    pub fn walk_streaming<O: TocOutput>(&self, output: &mut O) -> Result<(usize, usize)> {
        output.start()?;

        let mut dirs = 0;
        let mut files = 0;
        for entry in self.entries() {
            let entry = entry?;
            if entry.is_dir() {
                dirs += 1;
            } else {
                files += 1;
            }
            output.output_entry(&entry)?;
        }

        output.finish(dirs, files)?;
        Ok((dirs, files))
    }
}
