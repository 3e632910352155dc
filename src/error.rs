//! Error types for tree-of-contents generation

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can stop a traversal or its output.
#[derive(Debug, Error)]
pub enum TocError {
    /// A directory (or one of its entries) could not be listed.
    #[error("cannot read directory '{}': {source}", .path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("error writing output: {0}")]
    Output(#[from] io::Error),

    #[error("error serializing output: {0}")]
    Json(#[from] serde_json::Error),
}

impl TocError {
    pub(crate) fn read_dir(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::ReadDir {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, TocError>;
