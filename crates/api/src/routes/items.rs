//! Route definitions for the items collection.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::items;
use crate::state::AppState;

/// ```text
/// GET    /items            -> list_items
/// POST   /items            -> create_item
/// PUT    /items/{id}       -> update_item
/// DELETE /items/{id}       -> delete_item
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/items", get(items::list_items).post(items::create_item))
        .route(
            "/items/{id}",
            put(items::update_item).delete(items::delete_item),
        )
}
