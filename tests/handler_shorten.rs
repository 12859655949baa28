mod common;

use serde_json::json;
use std::sync::Arc;

#[tokio::test]
async fn test_shorten_success() {
    let server = common::create_test_server(common::create_test_state());

    let response = server
        .post("/api/shorten")
        .json(&json!({ "url": "https://example.com" }))
        .await;

    response.assert_status(axum::http::StatusCode::CREATED);

    let json = response.json::<serde_json::Value>();
    let id = json["id"].as_str().unwrap();
    assert_eq!(id.len(), 6);
    assert!(id.chars().all(|c| c.is_ascii_alphanumeric()));
    assert_eq!(json["url"], "https://example.com/");
    assert_eq!(
        json["short_url"],
        format!("{}/{}", common::BASE_URL, id)
    );
}

#[tokio::test]
async fn test_shorten_adds_scheme() {
    let server = common::create_test_server(common::create_test_state());

    let response = server
        .post("/api/shorten")
        .json(&json!({ "url": "example.com/path?x=1" }))
        .await;

    response.assert_status(axum::http::StatusCode::CREATED);
    assert_eq!(
        response.json::<serde_json::Value>()["url"],
        "https://example.com/path?x=1"
    );
}

#[tokio::test]
async fn test_shorten_same_url_twice() {
    let server = common::create_test_server(common::create_test_state());

    let first = server
        .post("/api/shorten")
        .json(&json!({ "url": "https://dup.com" }))
        .await
        .json::<serde_json::Value>();
    let second = server
        .post("/api/shorten")
        .json(&json!({ "url": "https://dup.com" }))
        .await
        .json::<serde_json::Value>();

    assert_ne!(first["id"], second["id"]);
}

#[tokio::test]
async fn test_shorten_invalid_url() {
    let server = common::create_test_server(common::create_test_state());

    let response = server
        .post("/api/shorten")
        .json(&json!({ "url": "ex-a-mple" }))
        .await;

    response.assert_status_bad_request();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
    assert_eq!(json["error"]["message"], "Invalid URL");
}

#[tokio::test]
async fn test_shorten_empty_url() {
    let server = common::create_test_server(common::create_test_state());

    let response = server
        .post("/api/shorten")
        .json(&json!({ "url": "" }))
        .await;

    response.assert_status_bad_request();
    assert_eq!(
        response.json::<serde_json::Value>()["error"]["code"],
        "validation_error"
    );
}

#[tokio::test]
async fn test_shorten_persistence_failure() {
    let state = common::create_test_state_with(Arc::new(common::BrokenRepository));
    let server = common::create_test_server(state.clone());

    let response = server
        .post("/api/shorten")
        .json(&json!({ "url": "https://example.com" }))
        .await;

    response.assert_status_internal_server_error();
    assert_eq!(
        response.json::<serde_json::Value>()["error"]["code"],
        "internal_error"
    );
    assert!(state.link_service.store().is_empty().await);
}

#[tokio::test]
async fn test_many_shortens_get_distinct_ids() {
    let state = common::create_test_state();
    let server = common::create_test_server(state.clone());

    let mut ids = std::collections::HashSet::new();
    for i in 0..25 {
        let json = server
            .post("/api/shorten")
            .json(&json!({ "url": format!("https://example.com/{i}") }))
            .await
            .json::<serde_json::Value>();

        let id = json["id"].as_str().unwrap().to_string();
        let link = state.link_service.resolve(&id).await.unwrap();
        assert_eq!(json["url"], link.url);
        assert!(ids.insert(id));
    }

    assert_eq!(state.link_service.store().len().await, 25);
}
