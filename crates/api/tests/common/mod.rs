#![allow(dead_code)]

use std::net::{IpAddr, Ipv4Addr};
use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{HeaderValue, Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use stockroom_api::config::{ServerConfig, StoreBackend};
use stockroom_api::router::build_app_router;
use stockroom_api::state::AppState;
use stockroom_core::types::ItemId;
use stockroom_db::models::item::{Item, ItemPatch, NewItem};
use stockroom_db::{ItemStore, MemoryItemStore, StoreError};
use tower::ServiceExt;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: IpAddr::V4(Ipv4Addr::LOCALHOST),
        port: 0,
        database_url: "postgres://localhost:5432/unused".to_string(),
        store_backend: StoreBackend::Memory,
        db_max_connections: 1,
        cors_origins: vec![HeaderValue::from_static("http://localhost:5173")],
        request_timeout_secs: 30,
    }
}

/// Build the full application router around the given store, with the same
/// middleware stack production uses.
pub fn build_test_app(store: Arc<dyn ItemStore>) -> Router {
    build_app_router(AppState::new(store), &test_config())
}

/// Router backed by a fresh in-memory store.
pub fn memory_app() -> Router {
    build_test_app(Arc::new(MemoryItemStore::new()))
}

/// Router whose store fails every call, as if the database were down.
pub fn failing_app() -> Router {
    build_test_app(Arc::new(FailingStore))
}

pub struct FailingStore;

fn unavailable() -> StoreError {
    StoreError::Unavailable("connection refused".to_string())
}

#[async_trait]
impl ItemStore for FailingStore {
    async fn create(&self, _input: &NewItem) -> Result<Item, StoreError> {
        Err(unavailable())
    }

    async fn list(&self) -> Result<Vec<Item>, StoreError> {
        Err(unavailable())
    }

    async fn update_by_id(
        &self,
        _id: ItemId,
        _patch: &ItemPatch,
    ) -> Result<Option<Item>, StoreError> {
        Err(unavailable())
    }

    async fn delete_by_id(&self, _id: ItemId) -> Result<Option<Item>, StoreError> {
        Err(unavailable())
    }
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(app: Router, method: Method, uri: &str, body: Body) -> Response {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(body)
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    send(app, Method::GET, uri, Body::empty()).await
}

pub async fn delete(app: Router, uri: &str) -> Response {
    send(app, Method::DELETE, uri, Body::empty()).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send(app, Method::POST, uri, Body::from(body.to_string())).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send(app, Method::PUT, uri, Body::from(body.to_string())).await
}

pub async fn post_raw(app: Router, uri: &str, body: &'static str) -> Response {
    send(app, Method::POST, uri, Body::from(body)).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
