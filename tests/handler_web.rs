mod common;

use counter_shortener::domain::repositories::UrlStore;

#[tokio::test]
async fn test_index_renders_form() {
    let (state, _store) = common::create_test_state();
    let server = common::test_server(state);

    let response = server.get("/").await;

    response.assert_status_ok();
    let body = response.text();
    assert!(body.contains(r#"name="base-url""#));
    assert!(body.contains("example.com/"));
}

#[tokio::test]
async fn test_form_shorten_renders_pair() {
    let (state, store) = common::create_test_state();
    let server = common::test_server(state);

    let response = server
        .post("/shorten")
        .add_header("HX-Request", "true")
        .form(&[("base-url", "google.com")])
        .await;

    response.assert_status_ok();
    let body = response.text();
    assert!(body.contains("google.com"));
    assert!(body.contains("example.com/0000085"));
    assert!(!body.contains("<html"));

    assert_eq!(
        store.load("0000085").await.unwrap(),
        Some("google.com".to_string())
    );
}

#[tokio::test]
async fn test_form_shorten_invalid_input_renders_error() {
    let (state, store) = common::create_test_state();
    let server = common::test_server(state);

    let response = server
        .post("/shorten")
        .form(&[("base-url", "google")])
        .await;

    response.assert_status_ok();
    let body = response.text();
    assert!(body.contains("without a domain"));
    assert!(body.contains("google"));
    assert!(store.is_empty());
}

#[tokio::test]
async fn test_redirect_by_suffix() {
    let (state, store) = common::create_test_state();
    store.save("0000085", "google.com").await.unwrap();
    let server = common::test_server(state);

    let response = server.get("/0000085").await;

    assert_eq!(response.status_code(), 307);
    assert_eq!(response.header("location"), "https://google.com");
}

#[tokio::test]
async fn test_redirect_via_expand_route_keeps_scheme() {
    let (state, store) = common::create_test_state();
    store
        .save("000000A", "http://example.com/docs")
        .await
        .unwrap();
    let server = common::test_server(state);

    let response = server.get("/expand/000000A").await;

    assert_eq!(response.status_code(), 307);
    assert_eq!(response.header("location"), "http://example.com/docs");
}

#[tokio::test]
async fn test_htmx_expand_sets_hx_redirect() {
    let (state, store) = common::create_test_state();
    store.save("0000085", "google.com").await.unwrap();
    let server = common::test_server(state);

    let response = server
        .get("/expand/0000085")
        .add_header("HX-Request", "true")
        .await;

    response.assert_status_ok();
    assert_eq!(response.header("hx-redirect"), "https://google.com");
}

#[tokio::test]
async fn test_redirect_unknown_suffix() {
    let (state, _store) = common::create_test_state();
    let server = common::test_server(state);

    let response = server.get("/doesnotexist").await;

    response.assert_status_not_found();
    assert!(response.text().contains("404"));
}

#[tokio::test]
async fn test_redirect_store_down_is_not_found() {
    let server = common::test_server(common::create_down_state());

    let response = server.get("/0000085").await;

    response.assert_status_not_found();
    assert!(response.text().contains("404"));
}
