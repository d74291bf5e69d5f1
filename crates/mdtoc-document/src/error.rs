//! Error types for table of contents generation.

use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors that can occur while updating a document's table of contents.
#[derive(Debug, Error)]
pub enum TocError {
    /// Failed to read the document.
    #[error("failed to read file {path}: {source}")]
    ReadFile {
        /// Path to the file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Failed to write the rewritten document.
    #[error("failed to write file {path}: {source}")]
    WriteFile {
        /// Path to the file that could not be written.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// A region marker was empty.
    #[error("region marker must not be empty")]
    EmptyMarker,

    /// A region marker pattern failed to compile.
    #[error("invalid marker pattern '{pattern}': {source}")]
    InvalidPattern {
        /// The pattern source text.
        pattern: String,
        /// Underlying regex error.
        source: regex::Error,
    },
}
