#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use rwa_api::config::{LogFormat, ServerConfig};
use rwa_api::router::build_app_router;
use rwa_api::state::AppState;
use rwa_core::holders::PlaceholderHolders;
use sqlx::SqlitePool;
use tower::ServiceExt;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as the only CORS origin and a 30-second
/// request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        database_url: "sqlite::memory:".to_string(),
        db_max_connections: 1,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        log_format: LogFormat::Pretty,
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
pub fn build_test_app(pool: SqlitePool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        holders: Arc::new(PlaceholderHolders),
    };
    build_app_router(state, &config)
}

/// Send a request with an optional JSON body through the router.
pub async fn send(
    app: Router,
    method: Method,
    uri: &str,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn patch_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::PATCH, uri, Some(body)).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// A valid mint payload with string-encoded numbers.
pub fn mint_payload(name: &str, total_supply: &str) -> serde_json::Value {
    serde_json::json!({
        "name": name,
        "symbol": "HBT",
        "institutionName": "Acme Bank",
        "institutionAddress": "1 Harbor Way",
        "description": "Class A office tower",
        "totalSupply": total_supply,
        "expectedYield": "8.5",
    })
}

/// Mint an asset through the API and return its id.
pub async fn mint(app: Router, payload: serde_json::Value) -> String {
    let response = post_json(app, "/api/assets/mint", payload).await;
    let json = body_json(response).await;
    json["data"]["id"]
        .as_str()
        .expect("mint response should carry an id")
        .to_string()
}
