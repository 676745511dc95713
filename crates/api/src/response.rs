//! Response bodies shared by the handlers.

use serde::Serialize;

/// `{ "message": ..., "item": ... }` envelope returned by item mutations.
#[derive(Debug, Serialize)]
pub struct ItemResponse<T: Serialize> {
    pub message: &'static str,
    pub item: T,
}

/// `{ "message": ... }` body.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Liveness payload for `GET /status`.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    #[serde(rename = "Status")]
    pub status: &'static str,
}
