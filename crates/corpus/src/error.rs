//! Error types for corpus ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for corpus reading.
#[derive(Error, Debug)]
pub enum CorpusError {
    /// I/O error with file context
    #[error("I/O error for {path}: {err}")]
    Io {
        path: PathBuf,
        #[source]
        err: std::io::Error,
    },

    /// Tagged-corpus line without a token/tag separator
    #[error("malformed tagged line {line} in {path}: {content:?}")]
    MalformedLine {
        path: PathBuf,
        line: usize,
        content: String,
    },
}

/// Result type alias for corpus operations.
pub type Result<T> = std::result::Result<T, CorpusError>;
