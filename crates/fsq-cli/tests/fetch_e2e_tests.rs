//! End-to-end tests for `fsq fetch`
//!
//! These tests run the binary against a mock API and check:
//! - The taxonomy cache written to disk
//! - Query parameters sent to the API
//! - Error reporting for API failures and missing credentials

mod common;

use common::{categories_response, fsq, fsq_with_server};
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;
use wiremock::{
    matchers::{method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

#[tokio::test(flavor = "multi_thread")]
async fn test_fetch_writes_cache() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();

    Mock::given(method("GET"))
        .and(path("/v2/venues/categories"))
        .and(query_param("client_id", "test-id"))
        .and(query_param("client_secret", "test-secret"))
        .and(query_param("v", "20140806"))
        .respond_with(ResponseTemplate::new(200).set_body_json(categories_response()))
        .expect(1)
        .mount(&server)
        .await;

    fsq_with_server(dir.path(), &server.uri())
        .arg("fetch")
        .assert()
        .success()
        .stdout(predicate::str::contains("3 top-level"));

    let content = fs::read_to_string(dir.path().join("categories.json")).unwrap();
    assert!(content.starts_with("{\n    \"categories\""));

    let cached: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(cached["categories"].as_array().unwrap().len(), 3);
    assert_eq!(cached["categories"][0]["name"], "Food");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_fetch_honors_categories_file_flag() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();

    Mock::given(method("GET"))
        .and(path("/v2/venues/categories"))
        .respond_with(ResponseTemplate::new(200).set_body_json(categories_response()))
        .mount(&server)
        .await;

    fsq_with_server(dir.path(), &server.uri())
        .args(["fetch", "--categories-file", "cache/taxonomy.json"])
        .assert()
        .success();

    assert!(dir.path().join("cache/taxonomy.json").exists());
    assert!(!dir.path().join("categories.json").exists());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_fetch_reports_api_error() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();

    Mock::given(method("GET"))
        .and(path("/v2/venues/categories"))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "meta": {
                "code": 401,
                "errorType": "invalid_auth",
                "errorDetail": "Missing access credentials."
            },
            "response": {}
        })))
        .mount(&server)
        .await;

    fsq_with_server(dir.path(), &server.uri())
        .arg("fetch")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid_auth"));

    assert!(!dir.path().join("categories.json").exists());
}

#[test]
fn test_fetch_without_credentials() {
    let dir = TempDir::new().unwrap();

    fsq(dir.path())
        .arg("fetch")
        .assert()
        .failure()
        .stderr(predicate::str::contains("FSQ_CLIENT_ID"));
}
