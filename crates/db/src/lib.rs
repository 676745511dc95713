//! Persistence for the items collection.
//!
//! [`ItemStore`] is the handle the HTTP layer is given. [`PgItemStore`]
//! backs it with PostgreSQL through [`ItemRepo`]; [`MemoryItemStore`] keeps
//! everything in process for tests and local runs.
//!
//! [`ItemRepo`]: repositories::ItemRepo

use std::time::Duration;

use sqlx::postgres::PgPoolOptions;

pub mod models;
pub mod repositories;
pub mod store;

pub use store::{ItemStore, MemoryItemStore, PgItemStore, StoreError};

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a database URL.
///
/// Connections are opened on first use, so an unreachable server does not
/// fail here; only a malformed URL does.
pub fn create_pool(database_url: &str, max_connections: u32) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(Duration::from_secs(5))
        .connect_lazy(database_url)
}

/// Apply the embedded migrations in `crates/db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
