//! Shared test helpers for API integration tests.
#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use haversack_event_store::InMemoryEventRepository;
use haversack_inventory::application::observers::InventoryObservers;
use haversack_inventory::domain::config::InventoryConfig;
use haversack_test_support::{FixedClock, fixed_now, sample_catalog};
use serde_json::json;
use tower::ServiceExt;

use haversack_api::routes;
use haversack_api::state::AppState;

/// Build the full app router over a fresh in-memory event store with a
/// fixed clock and the fixture catalog.
pub fn build_test_app() -> Router {
    let app_state = AppState::new(
        Arc::new(FixedClock(fixed_now())),
        Arc::new(InMemoryEventRepository::new()),
        sample_catalog(),
        InventoryObservers::new(),
        InventoryConfig::default(),
    );
    routes::app(app_state)
}

/// Send a POST request with a JSON body and return the response.
pub async fn post_json(
    app: Router,
    uri: &str,
    body: &serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

/// Send a GET request and return the response.
pub async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

/// Create an inventory with the given grid and action bar, returning its ID.
pub async fn create_inventory(app: &Router, rows: u16, columns: u16, action_bar: u16) -> String {
    let (status, json) = post_json(
        app.clone(),
        "/api/v1/inventory/create",
        &json!({ "rows": rows, "columns": columns, "action_bar_slots": action_bar }),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "create failed: {json}");
    json["aggregate_id"].as_str().unwrap().to_owned()
}

/// Add items through the API, asserting success.
pub async fn add_item(app: &Router, inventory_id: &str, item_key: &str, quantity: u32) {
    let (status, json) = post_json(
        app.clone(),
        "/api/v1/inventory/add-item",
        &json!({ "inventory_id": inventory_id, "item_key": item_key, "quantity": quantity }),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "add-item failed: {json}");
}
