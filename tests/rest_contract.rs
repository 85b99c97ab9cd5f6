//! REST Contract Tests
//!
//! Exercises the dispatch contract over the in-process router:
//! status codes, body shapes, and the store semantics visible through them.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use crimebook::rest_api::{crimebook_routes, CrimebookState};
use crimebook::store::{Record, RecordBook};

// =============================================================================
// Helper Functions
// =============================================================================

fn record(incident: &str, district: &str) -> Record {
    Record {
        incident_number: incident.to_string(),
        district: district.to_string(),
        ..Default::default()
    }
}

/// Router over a book holding `n` records; district "A1" on rows 2 and 7
fn seeded_router(n: usize) -> Router {
    let mut book = RecordBook::new();
    for i in 0..n {
        let district = if i == 2 || i == 7 { "A1" } else { "B3" };
        book.append(record(&format!("I-{:04}", i), district));
    }
    crimebook_routes(Arc::new(CrimebookState::new(book)))
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn post(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

// =============================================================================
// GET /crimebook
// =============================================================================

#[tokio::test]
async fn list_returns_every_record_in_order() {
    let router = seeded_router(4);
    let response = router.oneshot(get("/crimebook")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let records = body.as_array().unwrap();
    assert_eq!(records.len(), 4);
    for (i, r) in records.iter().enumerate() {
        assert_eq!(r["ID"], i as u64);
        assert_eq!(r["IncidentNumber"], format!("I-{:04}", i));
    }
}

#[tokio::test]
async fn list_on_empty_book_is_an_empty_array() {
    let router = crimebook_routes(Arc::new(CrimebookState::default()));
    let response = router.oneshot(get("/crimebook")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, serde_json::json!([]));
}

// =============================================================================
// GET /crimebook with filter
// =============================================================================

#[tokio::test]
async fn filter_by_district_returns_matching_rows() {
    let router = seeded_router(10);
    let response = router.oneshot(get("/crimebook?District=A1")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let records = body.as_array().unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["ID"], 2);
    assert_eq!(records[1]["ID"], 7);
}

#[tokio::test]
async fn filter_with_no_match_is_an_empty_array() {
    let router = seeded_router(5);
    let response = router
        .oneshot(get("/crimebook?OffenseCode=9999"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, serde_json::json!([]));
}

#[tokio::test]
async fn filter_on_unknown_field_is_rejected() {
    let router = seeded_router(5);
    let response = router.oneshot(get("/crimebook?Street=MAIN")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn two_query_parameters_are_unsupported() {
    let router = seeded_router(5);
    let response = router
        .oneshot(get("/crimebook?District=A1&OffenseCode=3115"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

// =============================================================================
// GET /crimebook/:id
// =============================================================================

#[tokio::test]
async fn get_by_id_returns_the_record() {
    let router = seeded_router(3);
    let response = router.oneshot(get("/crimebook/1")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["ID"], 1);
    assert_eq!(body["IncidentNumber"], "I-0001");
}

#[tokio::test]
async fn get_non_numeric_id_is_not_found() {
    let router = seeded_router(3);
    let response = router.oneshot(get("/crimebook/abc")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["error"], "entry not found");
}

#[tokio::test]
async fn get_out_of_range_id_is_not_found() {
    let router = seeded_router(3);
    let response = router.oneshot(get("/crimebook/3")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn get_deleted_id_is_not_found() {
    let router = seeded_router(5);

    let response = router.clone().oneshot(delete("/crimebook/3")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = router.oneshot(get("/crimebook/3")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// =============================================================================
// POST /crimebook
// =============================================================================

#[tokio::test]
async fn create_appends_with_store_assigned_id() {
    let router = seeded_router(2);

    let response = router
        .clone()
        .oneshot(post(
            "/crimebook",
            r#"{"ID": 999, "IncidentNumber": "I-NEW", "District": "E13"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["message"], "new entry created");

    // Client-supplied ID is overridden; the new record lands at slot 2
    let response = router.oneshot(get("/crimebook/2")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["ID"], 2);
    assert_eq!(body["IncidentNumber"], "I-NEW");
    assert_eq!(body["District"], "E13");
}

#[tokio::test]
async fn create_with_invalid_json_is_rejected() {
    let router = seeded_router(1);
    let response = router
        .oneshot(post("/crimebook", "{not json"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "invalid JSON data");
}

#[tokio::test]
async fn create_with_partial_payload_defaults_missing_fields() {
    let router = crimebook_routes(Arc::new(CrimebookState::default()));

    let response = router
        .clone()
        .oneshot(post("/crimebook", r#"{"District": "A1"}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = router.oneshot(get("/crimebook/0")).await.unwrap();
    let body = body_json(response).await;
    assert_eq!(body["District"], "A1");
    assert_eq!(body["IncidentNumber"], "");
}

#[tokio::test]
async fn update_by_id_is_method_not_allowed() {
    let router = seeded_router(3);
    let response = router
        .oneshot(post("/crimebook/1", r#"{"District": "A1"}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body_json(response).await["error"], "method not allowed");
}

// =============================================================================
// DELETE /crimebook and /crimebook/:id
// =============================================================================

#[tokio::test]
async fn delete_entry_hides_it_without_renumbering() {
    let router = seeded_router(4);

    let response = router.clone().oneshot(delete("/crimebook/1")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["message"], "entry deleted");

    let response = router.oneshot(get("/crimebook")).await.unwrap();
    let body = body_json(response).await;
    let ids: Vec<u64> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["ID"].as_u64().unwrap())
        .collect();
    assert_eq!(ids, vec![0, 2, 3]);
}

#[tokio::test]
async fn delete_non_numeric_id_is_a_bad_request() {
    let router = seeded_router(2);
    let response = router.oneshot(delete("/crimebook/abc")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "invalid entry id");
}

#[tokio::test]
async fn delete_out_of_range_id_is_not_found() {
    let router = seeded_router(2);
    let response = router.oneshot(delete("/crimebook/2")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_collection_restarts_identifiers() {
    let router = seeded_router(6);

    let response = router.clone().oneshot(delete("/crimebook")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["message"], "collection deleted");

    let response = router.clone().oneshot(get("/crimebook")).await.unwrap();
    assert_eq!(body_json(response).await, serde_json::json!([]));

    // Next create starts over at identifier 0
    let response = router
        .clone()
        .oneshot(post("/crimebook", r#"{"IncidentNumber": "I-FIRST"}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = router.oneshot(get("/crimebook/0")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["IncidentNumber"], "I-FIRST");
}
