pub mod items;
pub mod status;

use axum::Router;

use crate::state::AppState;

/// Build the route tree.
///
/// ```text
/// GET    /status           liveness
/// GET    /greet            greeting
/// GET    /items            list
/// POST   /items            create
/// PUT    /items/{id}       partial update
/// DELETE /items/{id}       delete
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .merge(status::router())
        .merge(items::router())
}
