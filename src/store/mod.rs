//! # Record Store
//!
//! In-memory store for crime-incident records.
//!
//! The store is an ordered sequence of slots indexed by identifier.
//! Identifiers are assigned at append time, equal the slot index, and are
//! never reused. Deleting a record tombstones its slot instead of
//! compacting, so identifiers of the remaining records stay stable.

mod book;
mod errors;
mod field;
mod record;

pub use book::RecordBook;
pub use errors::{StoreError, StoreResult};
pub use field::FilterField;
pub use record::{Record, FIELDS_PER_ROW};
