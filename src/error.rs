use std::path::PathBuf;

use thiserror::Error;

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, SimilarityError>;

/// Errors raised while comparing two documents
#[derive(Error, Debug)]
pub enum SimilarityError {
    /// Wrong command line usage. The pipeline is never started.
    #[error("{0}")]
    Usage(String),

    /// A source file could not be read or the output file could not be written
    #[error("I/O error on {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Both documents are empty after tokenization, so the angle between
    /// their vectors is undefined.
    #[error("both documents are empty after tokenization; similarity is undefined")]
    DegenerateVector,
}

impl SimilarityError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SimilarityError::Io { path: path.into(), source }
    }
}
