use std::sync::Arc;

use axum_test::TestServer;
use http::StatusCode;
use serde_json::{Value, json};

use firmdex::core::CompanyRegistry;
use firmdex::storage::InMemoryCompanyStore;
use firmdex_server::config::ServerConfig;
use firmdex_server::{AppState, create_router};

/// Helper function to create a test server over a fresh in-memory store
fn create_test_server() -> TestServer {
    let store = Arc::new(InMemoryCompanyStore::new());
    let registry = CompanyRegistry::new(store);
    let state = Arc::new(AppState::new(registry, ServerConfig::default()));

    TestServer::new(create_router(state)).expect("Failed to create test server")
}

async fn create_company(server: &TestServer, name: &str, website_url: &str) -> Value {
    let response = server
        .post("/api/companies")
        .json(&json!({
            "companyName": name,
            "websiteUrl": website_url,
        }))
        .await;

    response.assert_status(StatusCode::CREATED);
    response.json()
}

#[tokio::test]
async fn health_check() {
    let server = create_test_server();

    let response = server.get("/api/health").await;

    response.assert_status_ok();
    let json: Value = response.json();
    assert_eq!(json["status"], "OK");
}

#[tokio::test]
async fn post_valid_request_returns_201_created() {
    let server = create_test_server();

    let response = server
        .post("/api/companies")
        .json(&json!({
            "companyName": "Example",
            "websiteUrl": "https://example.com",
        }))
        .await;

    response.assert_status(StatusCode::CREATED);

    let created: Value = response.json();
    assert_eq!(created["companyName"], "Example");
    assert_eq!(created["websiteDomain"], "example.com");
    assert!(created["id"].is_string());
    assert!(created["createdAt"].is_string());
}

#[tokio::test]
async fn get_all_after_create_contains_created_record() {
    let server = create_test_server();

    let created = create_company(&server, "Example", "https://example.com").await;

    let response = server.get("/api/companies").await;
    response.assert_status_ok();

    let results: Value = response.json();
    let results = results.as_array().expect("array response");
    assert!(
        results
            .iter()
            .any(|result| result["company"]["id"] == created["id"])
    );
}

#[tokio::test]
async fn get_by_id_after_create_returns_200_ok() {
    let server = create_test_server();

    let created = create_company(&server, "Example", "https://example.com").await;
    let id = created["id"].as_str().unwrap();

    let response = server.get(&format!("/api/companies/{id}")).await;
    response.assert_status_ok();

    let fetched: Value = response.json();
    assert_eq!(fetched["id"], created["id"]);
    assert_eq!(fetched["companyName"], "Example");
}

#[tokio::test]
async fn get_by_id_with_missing_id_returns_404_not_found() {
    let server = create_test_server();

    let response = server
        .get("/api/companies/00000000-0000-0000-0000-000000000000")
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn post_invalid_dto_returns_400_with_validation_shape() {
    let server = create_test_server();

    let response = server
        .post("/api/companies")
        .json(&json!({
            "companyName": "",
            "websiteUrl": "not-a-url",
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);

    let payload: Value = response.json();
    assert_eq!(payload["message"], "Validation failed.");

    let errors = payload["errors"].as_object().expect("errors object");
    assert!(!errors.is_empty());
    assert!(errors.contains_key("companyName"));
    assert!(errors.contains_key("websiteUrl"));
}

#[tokio::test]
async fn post_name_not_relevant_returns_400_with_business_validation_shape() {
    let server = create_test_server();

    let response = server
        .post("/api/companies")
        .json(&json!({
            "companyName": "Blue Ocean",
            "websiteUrl": "https://example.com",
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);

    let payload: Value = response.json();
    assert_eq!(payload["message"], "Validation failed.");

    let company_errors = payload["errors"]["company"].as_array().expect("company errors");
    assert!(
        company_errors
            .iter()
            .any(|error| error.as_str().unwrap().to_lowercase().contains("not relevant"))
    );
}

#[tokio::test]
async fn get_with_q_returns_results_ordered_by_relevance_with_metadata() {
    let server = create_test_server();

    create_company(&server, "Ace Payments", "https://www.acepayments.com").await;
    create_company(&server, "Ace Logistics", "https://www.acelogistics.com").await;
    create_company(&server, "Global Shipping", "https://www.globalshipping.com").await;

    let response = server.get("/api/companies?q=ace%20payments").await;
    response.assert_status_ok();

    let results: Value = response.json();
    let results = results.as_array().expect("array response");
    assert!(!results.is_empty());

    // Global Shipping scores zero for the query and must not appear.
    assert!(
        !results
            .iter()
            .any(|result| result["company"]["companyName"] == "Global Shipping")
    );

    assert_eq!(results[0]["company"]["companyName"], "Ace Payments");
    assert!(!results[0]["scoreReasons"].as_array().unwrap().is_empty());

    for pair in results.windows(2) {
        assert!(
            pair[0]["relevanceScore"].as_f64().unwrap()
                >= pair[1]["relevanceScore"].as_f64().unwrap()
        );
    }
}

#[tokio::test]
async fn get_without_q_returns_unscored_results_with_default_reason() {
    let server = create_test_server();

    create_company(&server, "Example", "https://example.com").await;

    let response = server.get("/api/companies").await;
    response.assert_status_ok();

    let results: Value = response.json();
    let results = results.as_array().expect("array response");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["relevanceScore"], 0.0);
    assert_eq!(
        results[0]["scoreReasons"][0],
        "No free-text query supplied; returning filtered results."
    );
}

#[tokio::test]
async fn get_with_punctuation_only_q_returns_empty_list() {
    let server = create_test_server();

    create_company(&server, "Example", "https://example.com").await;

    let response = server.get("/api/companies?q=%21%3F%2E").await;
    response.assert_status_ok();

    let results: Value = response.json();
    assert_eq!(results.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn get_with_domain_filter_matches_exact_domain() {
    let server = create_test_server();

    create_company(&server, "Ace Payments", "https://www.acepayments.com").await;
    create_company(&server, "Ace Logistics", "https://www.acelogistics.com").await;

    let response = server.get("/api/companies?domain=acepayments.com").await;
    response.assert_status_ok();

    let results: Value = response.json();
    let results = results.as_array().unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["company"]["companyName"], "Ace Payments");
}

#[tokio::test]
async fn get_with_name_filter_matches_substring() {
    let server = create_test_server();

    create_company(&server, "Ace Payments", "https://www.acepayments.com").await;
    create_company(&server, "Global Shipping", "https://www.globalshipping.com").await;

    let response = server.get("/api/companies?name=payments").await;
    response.assert_status_ok();

    let results: Value = response.json();
    let results = results.as_array().unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["company"]["companyName"], "Ace Payments");
}
