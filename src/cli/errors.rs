//! CLI error types.

use thiserror::Error;

use crate::ingest::IngestError;

/// Result type for CLI commands
pub type CliResult<T> = Result<T, CliError>;

/// Errors surfaced at the binary boundary.
///
/// Bootstrap failures are fatal by design: the process exits non-zero
/// before the server starts.
#[derive(Debug, Error)]
pub enum CliError {
    /// Bootstrap CSV could not be loaded
    #[error("bootstrap failed: {0}")]
    Ingest(#[from] IngestError),

    /// Record could not be encoded for printing
    #[error("encode failed: {0}")]
    Encode(#[from] serde_json::Error),

    /// Runtime or listener failure
    #[error("server failed: {0}")]
    Server(#[from] std::io::Error),
}
