mod common;

use counter_shortener::domain::repositories::UrlStore;
use serde_json::json;

#[tokio::test]
async fn test_expand_known_suffix() {
    let (state, store) = common::create_test_state();
    store.save("0000001", "google.com").await.unwrap();
    store.save("0000002", "github.com").await.unwrap();

    let server = common::test_server(state);

    let response = server.get("/api/v1/expand/0000001").await;
    response.assert_status_ok();
    assert_eq!(
        response.json::<serde_json::Value>(),
        json!({
            "shortSuffix": "0000001",
            "baseURL": "google.com",
            "domain": "example.com/"
        })
    );

    let response = server.get("/api/v1/expand/0000002").await;
    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>()["baseURL"], "github.com");
}

#[tokio::test]
async fn test_expand_unknown_suffix() {
    let (state, _store) = common::create_test_state();
    let server = common::test_server(state);

    let response = server.get("/api/v1/expand/1000000").await;

    response.assert_status_not_found();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "not_found");
    assert_eq!(json["error"]["details"]["suffix"], "1000000");
}

#[tokio::test]
async fn test_shorten_then_expand() {
    let (state, _store) = common::create_test_state();
    let server = common::test_server(state);

    let created = server
        .post("/api/v1/shorten")
        .json(&json!({ "baseURL": "google.com" }))
        .await
        .json::<serde_json::Value>();
    let suffix = created["shortSuffix"].as_str().unwrap();

    let response = server.get(&format!("/api/v1/expand/{suffix}")).await;
    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>(), created);
}

#[tokio::test]
async fn test_expand_store_down_is_not_found() {
    let server = common::test_server(common::create_down_state());

    let response = server.get("/api/v1/expand/0000085").await;

    response.assert_status_not_found();
    assert_eq!(
        response.json::<serde_json::Value>()["error"]["code"],
        "not_found"
    );
}
