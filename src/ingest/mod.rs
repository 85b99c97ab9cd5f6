//! # Bootstrap Ingestion
//!
//! Loads the source CSV into a [`RecordBook`](crate::store::RecordBook)
//! before the server starts taking requests. There is no partial-load
//! recovery: any malformed row fails the whole bootstrap.

mod csv;
mod errors;

pub use csv::{load_book, parse_rows};
pub use errors::{IngestError, IngestResult};
