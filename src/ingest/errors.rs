//! Ingestion error types.

use thiserror::Error;

/// Result type for ingestion
pub type IngestResult<T> = Result<T, IngestError>;

/// Errors raised while loading the bootstrap CSV.
///
/// All of these are fatal at startup; the server never starts over a
/// partially loaded book.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Source file could not be read
    #[error("cannot read source file: {0}")]
    Io(#[from] std::io::Error),

    /// File is empty, there is no header row to skip
    #[error("source file has no header row")]
    MissingHeader,

    /// Data row has the wrong number of columns
    #[error("row {line}: expected {expected} fields, got {got}")]
    FieldCount {
        line: usize,
        expected: usize,
        got: usize,
    },

    /// A quoted field was still open at end of input
    #[error("row {line}: unterminated quoted field")]
    UnterminatedQuote { line: usize },
}
