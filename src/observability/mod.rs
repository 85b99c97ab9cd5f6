//! # Observability
//!
//! Structured logging for the crimebook server: one JSON line per event,
//! written synchronously with deterministic key ordering.

mod logger;

pub use logger::{Logger, Severity};
