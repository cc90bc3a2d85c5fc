//! Integration tests for pagination parameter validation.

use http::StatusCode;
use serde_json::Value;

use crate::helpers::{TestApp, make_service, seed_fifty_services};

fn messages(body: &Value) -> Vec<String> {
    body["message"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m.as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn limit_above_the_maximum_is_rejected() {
    let app = TestApp::new(seed_fifty_services(), vec![]);

    let response = app.get("/services?limit=999").await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["statusCode"], 400);
    assert_eq!(response.body["error"], "Bad Request");
    assert_eq!(
        messages(&response.body),
        vec!["limit must not be greater than 100"]
    );
}

#[tokio::test]
async fn negative_limit_is_rejected() {
    let app = TestApp::new(seed_fifty_services(), vec![]);

    let response = app.get("/services?limit=-1").await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        messages(&response.body),
        vec!["limit must not be less than 1"]
    );
}

#[tokio::test]
async fn non_integer_limit_reports_every_violated_rule() {
    let app = TestApp::new(seed_fifty_services(), vec![]);

    let response = app.get("/services?limit=bad").await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        messages(&response.body),
        vec![
            "limit must be an integer number",
            "limit must not be less than 1",
            "limit must not be greater than 100",
        ]
    );
}

#[tokio::test]
async fn fractional_limit_fails_only_the_integer_rule() {
    let app = TestApp::new(seed_fifty_services(), vec![]);

    let response = app.get("/services?limit=2.5").await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        messages(&response.body),
        vec!["limit must be an integer number"]
    );
}

#[tokio::test]
async fn zero_page_is_rejected() {
    let app = TestApp::new(seed_fifty_services(), vec![]);

    let response = app.get("/services?page=0").await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(messages(&response.body), vec!["page must not be less than 1"]);
}

#[tokio::test]
async fn violations_accumulate_across_parameters() {
    let app = TestApp::new(seed_fifty_services(), vec![]);

    let response = app.get("/services?page=0&limit=101").await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        messages(&response.body),
        vec![
            "page must not be less than 1",
            "limit must not be greater than 100",
        ]
    );
}

#[tokio::test]
async fn boundary_limits_are_accepted() {
    let app = TestApp::new(seed_fifty_services(), vec![]);

    assert_eq!(app.get("/services?limit=1").await.status, StatusCode::OK);
    assert_eq!(app.get("/services?limit=100").await.status, StatusCode::OK);
    assert_eq!(app.get("/services?page=1").await.status, StatusCode::OK);
}

#[tokio::test]
async fn page_near_the_integer_maximum_returns_an_empty_window() {
    let app = TestApp::new(seed_fifty_services(), vec![]);

    let response = app
        .get("/services?page=9223372036854775807&limit=100")
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"].as_array().unwrap().len(), 0);
    assert_eq!(response.body["meta"]["total"], 50);
}

#[tokio::test]
async fn versions_endpoint_applies_the_same_rules() {
    let service = make_service(0, 0);
    let id = service.id;
    let app = TestApp::new(vec![service], vec![]);

    let response = app.get(&format!("/services/{id}/versions?limit=999")).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        messages(&response.body),
        vec!["limit must not be greater than 100"]
    );

    let response = app.get(&format!("/services/{id}/versions?page=abc")).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        messages(&response.body),
        vec![
            "page must be an integer number",
            "page must not be less than 1",
        ]
    );
}
