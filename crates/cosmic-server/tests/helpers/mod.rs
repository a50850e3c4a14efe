//! Test helpers for Cosmic Crew server integration tests
//!
//! Each test receives a fresh, migrated SQLite pool from `#[sqlx::test]`;
//! these helpers wrap it in the full application router and drive requests
//! through it without binding a socket.

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use cosmic_server::{api, config::Config};
use serde_json::{json, Value};
use sqlx::SqlitePool;
use tower::ServiceExt; // for `oneshot`

/// Build the application router on top of `pool` with default configuration
pub fn setup_test_app(pool: SqlitePool) -> Router {
    api::create_router(pool, &Config::default())
}

/// Status, headers and decoded body of a response
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: axum::http::HeaderMap,
    pub raw: Vec<u8>,
    pub json: Value,
}

/// Send a request through the router; an empty body decodes to `Value::Null`
pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> TestResponse {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    send_request(app, request).await
}

/// Send a prepared request through the router
pub async fn send_request(app: &Router, request: Request<Body>) -> TestResponse {
    let response = app.clone().oneshot(request).await.unwrap();

    let status = response.status();
    let headers = response.headers().clone();
    let raw = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec();
    let json = if raw.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&raw).unwrap()
    };

    TestResponse {
        status,
        headers,
        raw,
        json,
    }
}

pub async fn get(app: &Router, uri: &str) -> TestResponse {
    send(app, Method::GET, uri, None).await
}

pub async fn post(app: &Router, uri: &str, body: Value) -> TestResponse {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn patch(app: &Router, uri: &str, body: Value) -> TestResponse {
    send(app, Method::PATCH, uri, Some(body)).await
}

pub async fn delete(app: &Router, uri: &str) -> TestResponse {
    send(app, Method::DELETE, uri, None).await
}

/// Create a scientist through the API and return its id
pub async fn create_scientist(app: &Router, name: &str, field_of_study: &str) -> i64 {
    let response = post(
        app,
        "/scientists",
        json!({"name": name, "field_of_study": field_of_study, "avatar": null}),
    )
    .await;
    assert_eq!(response.status, StatusCode::CREATED, "{}", response.json);
    response.json["id"].as_i64().unwrap()
}

/// Create a planet through the API and return its id
pub async fn create_planet(app: &Router, name: &str) -> i64 {
    let response = post(
        app,
        "/planets",
        json!({"name": name, "distance_from_earth": null, "nearest_star": null, "image": null}),
    )
    .await;
    assert_eq!(response.status, StatusCode::CREATED, "{}", response.json);
    response.json["id"].as_i64().unwrap()
}

/// Create a mission through the API and return its id
pub async fn create_mission(app: &Router, name: &str, scientist_id: i64, planet_id: i64) -> i64 {
    let response = post(
        app,
        "/missions",
        json!({"name": name, "scientist_id": scientist_id, "planet_id": planet_id}),
    )
    .await;
    assert_eq!(response.status, StatusCode::CREATED, "{}", response.json);
    response.json["id"].as_i64().unwrap()
}

/// Assert the standard `{"error": "<message>"}` body
pub fn assert_error_body(response: &TestResponse) {
    let message = response.json["error"].as_str();
    assert!(
        message.is_some_and(|m| !m.is_empty()),
        "expected an error body, got {}",
        response.json
    );
}
