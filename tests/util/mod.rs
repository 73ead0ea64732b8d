//! Helpers for driving the full application router in integration tests.

use axum::{
    body::{to_bytes, Body},
    http::{Method, Request, StatusCode},
    Router,
};
use holonet::server::{model::app::AppState, startup::build_app};
use holonet_test_utils::TestContext;
use tower::ServiceExt;

/// Extension trait for TestContext to build the application under test
pub trait TestContextExt {
    fn into_app(&self) -> Router;
}

impl TestContextExt for TestContext {
    fn into_app(&self) -> Router {
        build_app(self.to_app_state::<AppState>())
    }
}

/// Sends a request without a body and returns the status with the raw response body
pub async fn send(app: &Router, method: Method, uri: &str) -> (StatusCode, Vec<u8>) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let resp = app.clone().oneshot(request).await.unwrap();
    let status = resp.status();
    let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();

    (status, body.to_vec())
}

/// Sends a request and parses the response body as JSON
pub async fn send_json(app: &Router, method: Method, uri: &str) -> (StatusCode, serde_json::Value) {
    let (status, body) = send(app, method, uri).await;

    (status, serde_json::from_slice(&body).unwrap())
}
