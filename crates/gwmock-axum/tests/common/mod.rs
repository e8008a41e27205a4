//! Shared helpers for router integration tests.

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{HeaderMap, Method, Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use gwmock_axum::bootstrap::{CorsConfig, ServerConfig, bootstrap};
use gwmock_axum::routes::create_router;

/// Fresh router over empty in-memory stores.
pub fn test_app() -> Router {
    let ctx = bootstrap(&ServerConfig::with_defaults()).unwrap();
    create_router(ctx, &CorsConfig::AllowAll)
}

/// A collected response.
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl TestResponse {
    /// Parse the body as JSON.
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).unwrap_or_else(|e| {
            panic!(
                "expected JSON body, got {:?}: {e}",
                String::from_utf8_lossy(&self.body)
            )
        })
    }

    /// Body as UTF-8 text.
    pub fn text(&self) -> String {
        String::from_utf8(self.body.clone()).unwrap()
    }
}

/// Send a request through a clone of `app` (state is shared between clones).
pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> TestResponse {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header("content-type", "application/json");
            Body::from(serde_json::to_vec(&json).unwrap())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let headers = response.headers().clone();
    let body = response.into_body().collect().await.unwrap().to_bytes().to_vec();
    TestResponse {
        status,
        headers,
        body,
    }
}

/// Send a raw (possibly invalid) body.
pub async fn send_raw(app: &Router, method: Method, uri: &str, raw: &'static str) -> TestResponse {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(raw))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();

    let status = response.status();
    let headers = response.headers().clone();
    let body = response.into_body().collect().await.unwrap().to_bytes().to_vec();
    TestResponse {
        status,
        headers,
        body,
    }
}

/// Create a gateway and return its JSON.
pub async fn create_gateway(app: &Router, name: &str) -> Value {
    let res = send(
        app,
        Method::POST,
        "/gateways",
        Some(serde_json::json!({ "name": name, "url": format!("http://{name}.internal") })),
    )
    .await;
    assert_eq!(res.status, StatusCode::OK, "create gateway: {}", res.text());
    res.json()
}

/// Create a server (wrapped envelope) and return its JSON.
pub async fn create_server(app: &Router, body: Value) -> Value {
    let res = send(
        app,
        Method::POST,
        "/servers",
        Some(serde_json::json!({ "server": body })),
    )
    .await;
    assert_eq!(res.status, StatusCode::OK, "create server: {}", res.text());
    res.json()
}

/// Identifiers in a JSON array response.
pub fn ids(list: &Value) -> Vec<String> {
    list.as_array()
        .unwrap()
        .iter()
        .map(|item| item["id"].as_str().unwrap().to_string())
        .collect()
}
