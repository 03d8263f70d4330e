#![allow(dead_code)]

use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use konoha_api::config::{ServerConfig, DEFAULT_DATABASE_URL};
use konoha_api::router::build_app_router;
use konoha_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
///
/// Accepts any origin (the production default) with a 30-second timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        database_url: DEFAULT_DATABASE_URL.to_string(),
        db_max_connections: 5,
        cors_origins: vec!["*".to_string()],
        request_timeout_secs: 30,
    }
}

/// Build the full application router on top of the given pool, with the
/// same middleware stack the binary uses.
pub fn build_test_app(pool: PgPool) -> Router {
    build_app_router(AppState { pool }, &test_config())
}

async fn send(app: Router, request: Request<Body>) -> Response<axum::body::Body> {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, json_request(Method::POST, uri, body)).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, json_request(Method::PUT, uri, body)).await
}

/// PUT without a body, as used by `/asignaciones/{id}/completar`.
pub async fn put_empty(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::PUT)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

fn json_request(method: Method, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Create a ninja through the API and return its id.
pub async fn create_ninja(pool: &PgPool, name: &str, rank: &str) -> i64 {
    let response = post_json(
        build_test_app(pool.clone()),
        "/api/ninjas",
        serde_json::json!({"nombre": name, "rango": rank}),
    )
    .await;
    body_json(response).await["id"].as_i64().unwrap()
}

/// Create a mission through the API and return its id.
pub async fn create_mission(pool: &PgPool, name: &str, rank: &str) -> i64 {
    let response = post_json(
        build_test_app(pool.clone()),
        "/api/misiones",
        serde_json::json!({"nombre": name, "rango": rank, "recompensa": 1000}),
    )
    .await;
    body_json(response).await["id"].as_i64().unwrap()
}

/// Assign a mission through the API and return the raw response.
pub async fn assign(pool: &PgPool, ninja_id: i64, mission_id: i64) -> Response<Body> {
    post_json(
        build_test_app(pool.clone()),
        "/api/asignaciones",
        serde_json::json!({"ninja_id": ninja_id, "mision_id": mission_id}),
    )
    .await
}
