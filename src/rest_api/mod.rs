//! # REST API
//!
//! Axum-based HTTP surface over the record store. One resource path,
//! `/crimebook`, carries the whole contract: list, single-field filter,
//! fetch-by-id, create, delete-by-id, and delete-all.

mod config;
mod errors;
mod response;
mod routes;
mod server;

pub use config::HttpServerConfig;
pub use errors::{ErrorResponse, RestError, RestResult};
pub use response::MessageResponse;
pub use routes::{crimebook_routes, health_routes, CrimebookState};
pub use server::HttpServer;
