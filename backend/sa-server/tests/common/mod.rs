#![allow(dead_code)]

//! Test infrastructure for sa-server API tests

use sa_config::{AuthConfig, Config, RateLimitConfig};
use sa_core::InMemoryIdentityStore;
use sa_server::{AppState, build_router};

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, Response, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

pub const TEST_SECRET: &str = "integration-test-secret-32-chars-min";

/// Config with a valid secret and a rate limit high enough not to interfere
pub fn test_config() -> Config {
    Config {
        auth: AuthConfig {
            jwt_secret: Some(TEST_SECRET.to_string()),
            ..Default::default()
        },
        rate_limit: RateLimitConfig {
            max_requests: 10_000,
            window_secs: 60,
        },
        ..Default::default()
    }
}

pub fn create_test_app_state_with(config: &Config) -> AppState {
    AppState::from_config(config, Arc::new(InMemoryIdentityStore::new()))
        .expect("Failed to build test state")
}

pub fn create_test_app_state() -> AppState {
    create_test_app_state_with(&test_config())
}

pub fn create_test_app() -> Router {
    build_router(create_test_app_state())
}

pub fn json_request(method: &str, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn get_request(uri: &str, authorization: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(value) = authorization {
        builder = builder.header("Authorization", value);
    }
    builder.body(Body::empty()).unwrap()
}

pub async fn send(app: &Router, request: Request<Body>) -> Response<Body> {
    app.clone().oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(body.to_vec()).unwrap()
}

/// Register a user and return the response body
pub async fn register(app: &Router, username: &str, password: &str, email: &str) -> Value {
    let response = send(
        app,
        json_request(
            "POST",
            "/api/users",
            &json!({ "username": username, "password": password, "email": email }),
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}

/// Log in and return the bearer token
pub async fn login(app: &Router, username: &str, password: &str) -> String {
    let response = send(
        app,
        json_request(
            "POST",
            "/api/login",
            &json!({ "username": username, "password": password }),
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await["token"]
        .as_str()
        .unwrap()
        .to_string()
}
