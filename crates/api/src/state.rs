use std::sync::Arc;

use stockroom_db::ItemStore;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheap to clone: the store sits behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Item persistence. PostgreSQL in production, in-memory in tests.
    pub store: Arc<dyn ItemStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn ItemStore>) -> Self {
        Self { store }
    }
}
