mod common;

use std::sync::Arc;

#[tokio::test]
async fn test_index_renders_form() {
    let server = common::create_test_server(common::create_test_state());

    let response = server.get("/").await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains(r#"action="/submit""#));
    assert!(html.contains(r#"name="url""#));
}

#[tokio::test]
async fn test_submit_success_renders_short_link() {
    let state = common::create_test_state();
    let server = common::create_test_server(state.clone());

    let response = server
        .post("/submit")
        .form(&[("url", "http://example.com")])
        .await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("Your shortened URL"));
    assert!(html.contains(common::BASE_URL));
    assert!(html.contains("http://example.com/"));

    assert_eq!(state.link_service.store().len().await, 1);
}

#[tokio::test]
async fn test_submit_short_link_resolves() {
    let state = common::create_test_state();
    let server = common::create_test_server(state.clone());

    let html = server
        .post("/submit")
        .form(&[("url", "rust-lang.org")])
        .await
        .text();

    let prefix = format!("{}/", common::BASE_URL);
    let start = html.find(&prefix).unwrap() + prefix.len();
    let id = &html[start..start + 6];

    let link = state.link_service.resolve(id).await.unwrap();
    assert_eq!(link.url, "https://rust-lang.org/");
}

#[tokio::test]
async fn test_submit_empty_field() {
    let state = common::create_test_state();
    let server = common::create_test_server(state.clone());

    let response = server.post("/submit").form(&[("url", "")]).await;

    response.assert_status_bad_request();
    assert!(response.text().contains("Error field is empty"));
    assert!(state.link_service.store().is_empty().await);
}

#[tokio::test]
async fn test_submit_missing_field() {
    let server = common::create_test_server(common::create_test_state());

    let response = server.post("/submit").form(&[("other", "x")]).await;

    response.assert_status_bad_request();
    assert!(response.text().contains("Error field is empty"));
}

#[tokio::test]
async fn test_submit_invalid_url() {
    let state = common::create_test_state();
    let server = common::create_test_server(state.clone());

    let response = server.post("/submit").form(&[("url", "ex-a-mple")]).await;

    response.assert_status_bad_request();
    assert!(response.text().contains("Invalid URL"));
    assert!(state.link_service.store().is_empty().await);
}

#[tokio::test]
async fn test_submit_persistence_failure() {
    let state = common::create_test_state_with(Arc::new(common::BrokenRepository));
    let server = common::create_test_server(state.clone());

    let response = server
        .post("/submit")
        .form(&[("url", "https://example.com")])
        .await;

    response.assert_status_internal_server_error();
    assert!(response.text().contains("Could not create the short link"));
    assert!(state.link_service.store().is_empty().await);
}

#[tokio::test]
async fn test_submit_result_page_escapes_long_url() {
    let state = common::create_test_state();
    let server = common::create_test_server(state.clone());

    let response = server
        .post("/submit")
        .form(&[("url", "https://example.com/it's")])
        .await;

    response.assert_status_ok();
    let html = response.text();
    assert!(!html.contains("/it's"));
    assert!(html.contains("/it&#"));

    let stored = state.link_service.store().len().await;
    assert_eq!(stored, 1);
}

#[tokio::test]
async fn test_submit_url_with_port() {
    let state = common::create_test_state();
    let server = common::create_test_server(state.clone());

    let response = server
        .post("/submit")
        .form(&[("url", "http://example.com:8080/path")])
        .await;

    response.assert_status_bad_request();
    assert!(response.text().contains("Invalid URL"));
    assert!(state.link_service.store().is_empty().await);
}
