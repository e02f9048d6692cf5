#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::SqlitePool;
use tower::ServiceExt;

use cinedex_api::app::build_app;
use cinedex_api::state::AppState;

/// Build the full application router with all middleware layers, using the
/// given database pool.
pub fn build_test_app(pool: SqlitePool) -> Router {
    build_app(AppState { pool })
}

/// Send a request with an empty body.
pub async fn send(app: Router, method: Method, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a request with a raw body and `Content-Type: application/json`.
pub async fn send_raw_json(app: Router, method: Method, uri: &str, body: &str) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send_raw_json(app, Method::POST, uri, &body.to_string()).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send_raw_json(app, Method::PUT, uri, &body.to_string()).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// The canonical record used across the API tests.
pub fn inception() -> serde_json::Value {
    serde_json::json!({
        "title": "Inception",
        "director": "Nolan",
        "release_year": 2010,
        "genre": "Sci-Fi"
    })
}

/// Create a movie through the API and return its id.
pub async fn create_movie(pool: &SqlitePool, body: serde_json::Value) -> i64 {
    let response = post_json(build_test_app(pool.clone()), "/movie/create", body).await;
    assert_eq!(response.status(), axum::http::StatusCode::CREATED);
    body_json(response).await["id"].as_i64().unwrap()
}
