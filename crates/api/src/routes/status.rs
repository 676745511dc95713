use axum::routing::get;
use axum::Router;

use crate::handlers::status;
use crate::state::AppState;

/// Liveness and greeting routes.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/status", get(status::status))
        .route("/greet", get(status::greet))
}
