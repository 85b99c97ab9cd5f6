//! # REST API Errors
//!
//! Error taxonomy for the dispatch layer, with the HTTP status mapping the
//! contract requires. Two quirks are part of the contract: a non-numeric
//! identifier on GET is a 404 (only DELETE reports it as a 400), and a
//! request with more than one query parameter is a 500, not a 400.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::store::StoreError;

/// Result type for REST operations
pub type RestResult<T> = Result<T, RestError>;

/// REST API errors
#[derive(Debug, Clone, Error)]
pub enum RestError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// Non-numeric identifier in a DELETE path
    #[error("invalid entry id")]
    InvalidIdentifier,

    /// Identifier out of range, tombstoned, or non-numeric on GET
    #[error("entry not found")]
    EntryNotFound,

    /// Create body is not valid JSON
    #[error("invalid JSON data")]
    MalformedPayload,

    /// Single query parameter names a non-filterable field
    #[error("unknown filter field: {0}")]
    UnknownFilterField(String),

    /// Update-by-id is not part of the contract
    #[error("method not allowed")]
    MethodNotAllowed,

    // ==================
    // Server Errors (5xx)
    // ==================
    /// More than one query parameter on the collection path
    #[error("unsupported query: expected one parameter, got {0}")]
    UnsupportedQuery(usize),

    /// Response body could not be encoded
    #[error("internal error")]
    Serialization(String),

    /// Anything else that should never happen during a request
    #[error("internal error")]
    Internal(String),
}

impl RestError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            RestError::InvalidIdentifier => StatusCode::BAD_REQUEST,
            RestError::MalformedPayload => StatusCode::BAD_REQUEST,
            RestError::UnknownFilterField(_) => StatusCode::BAD_REQUEST,

            RestError::EntryNotFound => StatusCode::NOT_FOUND,

            RestError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,

            RestError::UnsupportedQuery(_) => StatusCode::INTERNAL_SERVER_ERROR,
            RestError::Serialization(_) => StatusCode::INTERNAL_SERVER_ERROR,
            RestError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<StoreError> for RestError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { .. } => RestError::EntryNotFound,
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl From<&RestError> for ErrorResponse {
    fn from(err: &RestError) -> Self {
        Self {
            error: err.to_string(),
            code: err.status_code().as_u16(),
        }
    }
}

impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse::from(&self));
        (status, body).into_response()
    }
}
