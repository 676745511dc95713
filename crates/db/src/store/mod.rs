//! The item store: the persistence handle injected into the HTTP layer.

use async_trait::async_trait;
use stockroom_core::types::ItemId;

use crate::models::item::{Item, ItemPatch, NewItem};

pub mod memory;
pub mod postgres;

pub use memory::MemoryItemStore;
pub use postgres::PgItemStore;

/// Failure reaching or using the underlying store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("{0}")]
    Database(#[from] sqlx::Error),

    #[error("{0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),

    #[error("Item store unavailable: {0}")]
    Unavailable(String),
}

/// CRUD access to the items collection.
///
/// Lookups by id return `Ok(None)` when the item does not exist; the caller
/// decides what "not found" means. Inputs are already validated.
#[async_trait]
pub trait ItemStore: Send + Sync {
    /// Persist a new item, assigning its id.
    async fn create(&self, input: &NewItem) -> Result<Item, StoreError>;

    /// All stored items in store-defined order.
    async fn list(&self) -> Result<Vec<Item>, StoreError>;

    /// Merge `patch` into the item with `id` and return the updated record.
    async fn update_by_id(
        &self,
        id: ItemId,
        patch: &ItemPatch,
    ) -> Result<Option<Item>, StoreError>;

    /// Remove the item with `id` and return it.
    async fn delete_by_id(&self, id: ItemId) -> Result<Option<Item>, StoreError>;
}
