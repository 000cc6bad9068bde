//! Error types for the unhtml library.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for unhtml operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during HTML-to-text conversion.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Failed to read an input file.
    #[error("failed to read {}: {}", path.display(), source)]
    Read {
        /// Input file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Failed to write an output file.
    #[error("failed to write {}: {}", path.display(), source)]
    Write {
        /// Output file that could not be written.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Input file contents are not valid UTF-8 text.
    #[error("{} is not valid UTF-8", path.display())]
    NonUtf8 {
        /// Offending input file.
        path: PathBuf,
    },

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}
