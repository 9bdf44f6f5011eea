//! Webhook gateway integration tests
//!
//! Drives the real router with in-memory requests; no network calls are
//! made because every exercised payload stops before delivery work starts.

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use tower::ServiceExt;

use clipgram::Config;
use clipgram::api::ApiServer;

const SECRET: &str = "test-secret";

/// Build a test router with a known webhook secret
fn test_router() -> axum::Router {
    ApiServer::new(Config {
        port: 0,
        webhook_secret: SECRET.to_string(),
        delete_original: true,
    })
    .router()
}

/// Convenience for a webhook POST with standard headers
fn webhook_request(content_type: &str, secret: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/123456:ABCDEF/tt_bot")
        .header(header::CONTENT_TYPE, content_type)
        .header("x-telegram-bot-api-secret-token", secret)
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn health_endpoint_responds() {
    let response = test_router()
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn non_post_method_rejected() {
    let response = test_router()
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/123456:ABCDEF/tt_bot")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn missing_content_type_rejected() {
    let response = test_router()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/123456:ABCDEF/tt_bot")
                .header("x-telegram-bot-api-secret-token", SECRET)
                .body(Body::from("{}"))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn wrong_content_type_rejected() {
    let response = test_router()
        .oneshot(webhook_request("text/plain", SECRET, "{}"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn wrong_secret_rejected() {
    let response = test_router()
        .oneshot(webhook_request("application/json", "not-the-secret", "{}"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn unparsable_payload_rejected() {
    let response = test_router()
        .oneshot(webhook_request("application/json", SECRET, "not json"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn update_without_message_acknowledged() {
    let response = test_router()
        .oneshot(webhook_request("application/json", SECRET, r#"{"update_id":1}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn message_without_text_acknowledged() {
    let body = r#"{"message":{"message_id":5,"chat":{"id":-100},"from":{"id":7,"first_name":"Alice"}}}"#;
    let response = test_router()
        .oneshot(webhook_request("application/json", SECRET, body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn message_without_links_acknowledged() {
    let body = r#"{"message":{"message_id":5,"chat":{"id":-100},"from":{"id":7,"first_name":"Alice"},"text":"just chatting"}}"#;
    let response = test_router()
        .oneshot(webhook_request("application/json", SECRET, body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn caption_only_message_acknowledged() {
    let body = r#"{"message":{"message_id":5,"chat":{"id":-100},"from":{"id":7,"first_name":"Alice"},"caption":"a photo album"}}"#;
    let response = test_router()
        .oneshot(webhook_request("application/json", SECRET, body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn charset_suffix_in_content_type_accepted() {
    let response = test_router()
        .oneshot(webhook_request(
            "application/json; charset=utf-8",
            SECRET,
            r#"{"update_id":1}"#,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
