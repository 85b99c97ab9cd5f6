//! Crimebook HTTP routes.
//!
//! The whole contract lives on one resource path. GET on the collection
//! doubles as the filter query: zero parameters lists everything, exactly
//! one parameter naming a filterable field runs an equality match, and
//! anything else is rejected. POST to `/crimebook/:id` exists only to
//! answer 405, since there is no update-by-id operation.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use axum::{
    extract::{Path, Query, State},
    http::header,
    response::{IntoResponse, Response},
    routing::{delete, get, post},
    Json, Router,
};
use serde::Serialize;
use serde_json::json;

use crate::observability::{Logger, Severity};
use crate::store::{FilterField, Record, RecordBook};

use super::errors::{RestError, RestResult};
use super::response::MessageResponse;

// ==================
// Shared State
// ==================

/// Record book shared across handlers.
///
/// One mutex serializes every store operation, reads included. Handlers
/// never await while holding the guard.
pub struct CrimebookState {
    book: Mutex<RecordBook>,
}

impl CrimebookState {
    pub fn new(book: RecordBook) -> Self {
        Self {
            book: Mutex::new(book),
        }
    }

    fn lock(&self) -> RestResult<MutexGuard<'_, RecordBook>> {
        self.book
            .lock()
            .map_err(|_| RestError::Internal("record book lock poisoned".to_string()))
    }
}

impl Default for CrimebookState {
    fn default() -> Self {
        Self::new(RecordBook::new())
    }
}

// ==================
// Routes
// ==================

/// Create the crimebook routes
pub fn crimebook_routes(state: Arc<CrimebookState>) -> Router {
    Router::new()
        .route("/crimebook", get(list_entries_handler))
        .route("/crimebook", post(create_entry_handler))
        .route("/crimebook", delete(delete_collection_handler))
        .route("/crimebook/:id", get(get_entry_handler))
        .route("/crimebook/:id", post(update_rejected_handler))
        .route("/crimebook/:id", delete(delete_entry_handler))
        .with_state(state)
}

/// Health check routes
pub fn health_routes() -> Router {
    Router::new().route("/health", get(health_handler))
}

async fn health_handler() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

// ==================
// Helper Functions
// ==================

/// Serialize a response body, surfacing encode failures as a 500
fn json_response<T: Serialize>(value: &T) -> RestResult<Response> {
    let body = serde_json::to_string(value)
        .map_err(|e| RestError::Serialization(e.to_string()))?;
    Ok(([(header::CONTENT_TYPE, "application/json")], body).into_response())
}

// ==================
// Collection Handlers
// ==================

async fn list_entries_handler(
    State(state): State<Arc<CrimebookState>>,
    Query(params): Query<HashMap<String, String>>,
) -> RestResult<Response> {
    let book = state.lock()?;

    let records: Vec<&Record> = match params.len() {
        0 => book.records(),
        1 => {
            let (name, value) = params
                .iter()
                .next()
                .ok_or_else(|| RestError::Internal("empty parameter map".to_string()))?;
            let field = FilterField::from_param(name)
                .ok_or_else(|| RestError::UnknownFilterField(name.clone()))?;
            book.matching(field, value)
        }
        n => {
            Logger::log_stderr(
                Severity::Error,
                "unsupported_query",
                &[("params", &n.to_string())],
            );
            return Err(RestError::UnsupportedQuery(n));
        }
    };

    json_response(&records)
}

async fn create_entry_handler(
    State(state): State<Arc<CrimebookState>>,
    body: String,
) -> RestResult<Json<MessageResponse>> {
    let record: Record =
        serde_json::from_str(&body).map_err(|_| RestError::MalformedPayload)?;

    let mut book = state.lock()?;
    let id = book.append(record);
    Logger::log(Severity::Info, "entry_created", &[("id", &id.to_string())]);

    Ok(Json(MessageResponse::new("new entry created")))
}

async fn delete_collection_handler(
    State(state): State<Arc<CrimebookState>>,
) -> RestResult<Json<MessageResponse>> {
    let mut book = state.lock()?;
    let dropped = book.slot_count();
    book.clear();
    Logger::log(
        Severity::Info,
        "collection_cleared",
        &[("slots", &dropped.to_string())],
    );

    Ok(Json(MessageResponse::new("collection deleted")))
}

// ==================
// Entry Handlers
// ==================

async fn get_entry_handler(
    State(state): State<Arc<CrimebookState>>,
    Path(id): Path<String>,
) -> RestResult<Response> {
    // Contract quirk: a non-numeric id on GET reads as "no such entry"
    let id: u64 = id.parse().map_err(|_| RestError::EntryNotFound)?;

    let book = state.lock()?;
    let record = book.record(id)?;
    json_response(record)
}

async fn update_rejected_handler() -> RestError {
    RestError::MethodNotAllowed
}

async fn delete_entry_handler(
    State(state): State<Arc<CrimebookState>>,
    Path(id): Path<String>,
) -> RestResult<Json<MessageResponse>> {
    let id: u64 = id.parse().map_err(|_| RestError::InvalidIdentifier)?;

    let mut book = state.lock()?;
    book.remove(id)?;
    Logger::log(Severity::Info, "entry_deleted", &[("id", &id.to_string())]);

    Ok(Json(MessageResponse::new("entry deleted")))
}
