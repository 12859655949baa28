mod common;

#[tokio::test]
async fn test_redirect_success() {
    let state = common::create_test_state();
    common::create_test_link(&state, "redir1", "https://example.com/target").await;

    let server = common::create_test_server(state);

    let response = server.get("/redir1").await;

    assert_eq!(response.status_code(), 301);
    assert_eq!(response.header("location"), "https://example.com/target");
}

#[tokio::test]
async fn test_redirect_not_found() {
    let server = common::create_test_server(common::create_test_state());

    let response = server.get("/nothere").await;

    response.assert_status_not_found();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "not_found");
    assert_eq!(json["error"]["message"], "Link not found");
}

#[tokio::test]
async fn test_redirect_is_case_sensitive() {
    let state = common::create_test_state();
    common::create_test_link(&state, "AbCdEf", "https://example.com/").await;

    let server = common::create_test_server(state);

    assert_eq!(server.get("/AbCdEf").await.status_code(), 301);
    server.get("/abcdef").await.assert_status_not_found();
}

#[tokio::test]
async fn test_redirect_after_submit() {
    let state = common::create_test_state();
    let server = common::create_test_server(state.clone());

    let response = server
        .post("/api/shorten")
        .json(&serde_json::json!({ "url": "example.com/landing" }))
        .await;
    let id = response.json::<serde_json::Value>()["id"]
        .as_str()
        .unwrap()
        .to_string();

    let redirect = server.get(&format!("/{id}")).await;

    assert_eq!(redirect.status_code(), 301);
    assert_eq!(redirect.header("location"), "https://example.com/landing");
}

#[tokio::test]
async fn test_responses_carry_security_headers() {
    let state = common::create_test_state();
    common::create_test_link(&state, "secure", "https://example.com/").await;

    let server = common::create_test_server(state);
    let response = server.get("/secure").await;

    assert_eq!(response.header("x-content-type-options"), "nosniff");
    assert_eq!(response.header("x-frame-options"), "SAMEORIGIN");
    assert_eq!(response.header("x-xss-protection"), "1; mode=block");
}
