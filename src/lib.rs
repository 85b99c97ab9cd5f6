//! crimebook - an in-memory crime-incident record store with a REST API

pub mod cli;
pub mod ingest;
pub mod observability;
pub mod rest_api;
pub mod store;
