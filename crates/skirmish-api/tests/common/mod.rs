//! Shared helpers for driving the API router in integration tests.
#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

/// The production router, without transport layers.
pub fn build_test_app() -> Router {
    skirmish_api::app()
}

/// Sends one request through `app` and decodes the JSON response body.
/// Non-JSON bodies (e.g. extractor rejections) decode as `Value::Null`.
async fn send(
    app: Router,
    method: Method,
    uri: &str,
    body: Option<&Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let payload = match body {
        Some(json) => {
            builder = builder.header("content-type", "application/json");
            Body::from(serde_json::to_vec(json).unwrap())
        }
        None => Body::empty(),
    };
    let request = builder.body(payload).unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();

    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}

pub async fn post_json(app: Router, uri: &str, body: &Value) -> (StatusCode, Value) {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri, None).await
}

/// Posts `{ selection, owner }` to `uri` (`/api/v1/directives` or
/// `/api/v1/resolutions`).
pub async fn post_binding(
    uri: &str,
    selection: &Value,
    owner: impl serde::Serialize,
) -> (StatusCode, Value) {
    let body = serde_json::json!({ "selection": selection, "owner": owner });
    post_json(build_test_app(), uri, &body).await
}
