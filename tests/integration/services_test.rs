//! Integration tests for the services listing and lookup endpoints.

use http::StatusCode;
use uuid::Uuid;

use crate::helpers::{TestApp, make_service, make_version, seed_fifty_services};

#[tokio::test]
async fn listing_defaults_cover_the_whole_seed() {
    let app = TestApp::new(seed_fifty_services(), vec![]);

    let response = app.get("/services").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["meta"]["total"], 50);
    assert_eq!(response.body["meta"]["page"], 1);
    assert_eq!(response.body["meta"]["page_size"], 50);
    assert_eq!(response.body["meta"]["last_page"], 1);
    assert_eq!(response.body["data"].as_array().unwrap().len(), 50);
}

#[tokio::test]
async fn listing_windows_and_meta_agree() {
    let app = TestApp::new(seed_fifty_services(), vec![]);

    let response = app.get("/services?limit=5&page=2").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["meta"]["total"], 50);
    assert_eq!(response.body["meta"]["page"], 2);
    assert_eq!(response.body["meta"]["page_size"], 5);
    assert_eq!(response.body["meta"]["last_page"], 10);

    let data = response.body["data"].as_array().unwrap();
    assert_eq!(data.len(), 5);
    // Creation order, second window: services 05..09.
    assert_eq!(data[0]["name"], "Service 05");
    assert_eq!(data[4]["name"], "Service 09");
}

#[tokio::test]
async fn search_filters_on_name_or_description() {
    let mut services = seed_fifty_services();
    services[7].name = "Geo Lookup".to_string();
    services[12].description = "geo-fenced invoicing".to_string();
    let app = TestApp::new(services, vec![]);

    let response = app.get("/services?search=GEO").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["meta"]["total"], 2);
    assert_eq!(response.body["data"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn search_miss_is_an_empty_page_not_an_error() {
    let app = TestApp::new(seed_fifty_services(), vec![]);

    let response = app.get("/services?search=zzz-not-there").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["meta"]["total"], 0);
    assert_eq!(response.body["meta"]["last_page"], 1);
    assert_eq!(response.body["data"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn listing_projects_only_public_fields() {
    let app = TestApp::new(vec![make_service(0, 3)], vec![]);

    let response = app.get("/services").await;

    let item = &response.body["data"][0];
    let mut keys: Vec<&str> = item.as_object().unwrap().keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(
        keys,
        vec!["description", "id", "name", "url", "version_count"]
    );
    assert_eq!(item["version_count"], 3);
}

#[tokio::test]
async fn single_item_has_empty_meta() {
    let service = make_service(0, 2);
    let id = service.id;
    let versions = vec![make_version(id, "1.0.0"), make_version(id, "1.1.0")];
    let app = TestApp::new(vec![service], versions);

    let response = app.get(&format!("/services/{id}")).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["id"], id.to_string());
    assert_eq!(response.body["data"]["version_count"], 2);
    assert_eq!(response.body["meta"], serde_json::json!({}));
}

#[tokio::test]
async fn unknown_id_is_a_404_with_the_standard_error_body() {
    let app = TestApp::new(seed_fifty_services(), vec![]);
    let id = Uuid::new_v4();

    let response = app.get(&format!("/services/{id}")).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["statusCode"], 404);
    assert_eq!(response.body["error"], "Not Found");
    assert_eq!(
        response.body["message"],
        serde_json::json!([format!("Service with ID {id} not found")])
    );
}

#[tokio::test]
async fn malformed_id_reads_as_absent() {
    let app = TestApp::new(seed_fifty_services(), vec![]);

    let response = app.get("/services/not-a-uuid").await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["statusCode"], 404);
}
