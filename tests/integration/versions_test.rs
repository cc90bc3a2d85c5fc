//! Integration tests for the versions listing endpoint.

use http::StatusCode;
use uuid::Uuid;

use crate::helpers::{TestApp, make_service, make_version};

/// A service with twelve versions whose string order matches their
/// numeric order (single-digit components only).
fn seeded_app() -> (TestApp, Uuid) {
    let service = make_service(0, 12);
    let id = service.id;
    let versions = [
        "0.1.0", "0.2.0", "0.3.0", "0.4.0", "0.5.0", "0.6.0", "0.7.0", "0.8.0", "0.9.0", "1.0.0",
        "1.1.0", "1.2.0",
    ]
    .iter()
    .map(|v| make_version(id, v))
    .collect();

    (TestApp::new(vec![service], versions), id)
}

#[tokio::test]
async fn versions_are_ordered_by_version_string_descending() {
    let (app, id) = seeded_app();

    let response = app.get(&format!("/services/{id}/versions")).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["meta"]["total"], 12);

    let data = response.body["data"].as_array().unwrap();
    assert_eq!(data[0]["version"], "1.2.0");
    assert_eq!(data[11]["version"], "0.1.0");
}

#[tokio::test]
async fn second_window_returns_rows_six_through_ten() {
    let (app, id) = seeded_app();

    let response = app
        .get(&format!("/services/{id}/versions?limit=5&page=2"))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["meta"]["total"], 12);
    assert_eq!(response.body["meta"]["page"], 2);
    assert_eq!(response.body["meta"]["page_size"], 5);
    assert_eq!(response.body["meta"]["last_page"], 3);

    let data = response.body["data"].as_array().unwrap();
    let versions: Vec<&str> = data.iter().map(|v| v["version"].as_str().unwrap()).collect();
    assert_eq!(versions, vec!["0.7.0", "0.6.0", "0.5.0", "0.4.0", "0.3.0"]);
}

#[tokio::test]
async fn version_projection_strips_internal_fields() {
    let (app, id) = seeded_app();

    let response = app.get(&format!("/services/{id}/versions?limit=1")).await;

    let item = &response.body["data"][0];
    let mut keys: Vec<&str> = item.as_object().unwrap().keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(keys, vec!["description", "id", "url", "version"]);
}

#[tokio::test]
async fn unknown_parent_service_is_a_404() {
    let (app, _) = seeded_app();
    let unknown = Uuid::new_v4();

    let response = app.get(&format!("/services/{unknown}/versions")).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["statusCode"], 404);
    assert_eq!(
        response.body["message"],
        serde_json::json!([format!("Service with ID {unknown} not found")])
    );
}

#[tokio::test]
async fn malformed_parent_id_is_a_404() {
    let (app, _) = seeded_app();

    let response = app.get("/services/definitely-not-a-uuid/versions").await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn service_without_versions_lists_an_empty_page() {
    let service = make_service(0, 0);
    let id = service.id;
    let app = TestApp::new(vec![service], vec![]);

    let response = app.get(&format!("/services/{id}/versions")).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["meta"]["total"], 0);
    assert_eq!(response.body["meta"]["last_page"], 1);
    assert_eq!(response.body["data"].as_array().unwrap().len(), 0);
}
