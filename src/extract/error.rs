//! Custom error types for the wikicc crate.

use std::path::PathBuf;
use thiserror::Error;

/// The primary error type for all operations in this crate.
///
/// Most anomalies in the batch pipeline (malformed input lines, missing
/// optional filter files) are logged and skipped rather than raised; the
/// variants here cover the failures a run cannot continue past.
#[derive(Debug, Error)]
pub enum WikiccError {
    /// An error originating from I/O operations.
    #[error("I/O error: {0:?}")]
    Io(#[from] std::io::Error),

    /// The path given as an input folder does not name a directory.
    #[error("Not a directory: {0}")]
    NotADirectory(PathBuf),

    /// A chunk count of zero was requested from the splitter.
    #[error("Invalid chunk count: {0}. At least 1 output file is required.")]
    InvalidChunkCount(usize),
}

/// A convenience `Result` type alias using the crate's `WikiccError` type.
pub type Result<T> = std::result::Result<T, WikiccError>;
