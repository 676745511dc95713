//! Handlers that never touch the store.

use axum::extract::Query;
use axum::Json;
use serde::Deserialize;

use crate::response::{MessageResponse, StatusResponse};

/// Query parameters for `GET /greet`.
#[derive(Debug, Deserialize)]
pub struct GreetParams {
    pub name: Option<String>,
}

/// GET /status
///
/// Static liveness payload, independent of database connectivity.
pub async fn status() -> Json<StatusResponse> {
    Json(StatusResponse { status: "Running" })
}

/// GET /greet?name=
///
/// Greets `name`, or `World` when it is missing or empty.
pub async fn greet(Query(params): Query<GreetParams>) -> Json<MessageResponse> {
    let name = params
        .name
        .filter(|n| !n.is_empty())
        .unwrap_or_else(|| "World".to_string());

    Json(MessageResponse {
        message: format!("Hello, {name}!"),
    })
}
