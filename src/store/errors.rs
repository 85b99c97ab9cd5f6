//! Store error types.

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors reported by [`RecordBook`](super::RecordBook) operations.
///
/// A lookup of a tombstoned slot reports `NotFound`, the same as an
/// out-of-range identifier. Callers never need to distinguish "deleted"
/// from "never existed".
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Identifier is out of range or its slot was deleted
    #[error("entry not found: {id}")]
    NotFound { id: u64 },
}
