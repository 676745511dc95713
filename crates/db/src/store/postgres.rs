//! PostgreSQL-backed item store.

use async_trait::async_trait;
use stockroom_core::types::{new_item_id, ItemId};
use tokio::sync::OnceCell;

use super::{ItemStore, StoreError};
use crate::models::item::{Item, ItemPatch, NewItem};
use crate::repositories::ItemRepo;
use crate::DbPool;

/// Item store over a lazily-connected pool.
///
/// The schema is migrated on first successful contact with the server. If
/// the server is down at startup the attempt is repeated on the next call,
/// so the service recovers once the database comes up.
pub struct PgItemStore {
    pool: DbPool,
    schema_ready: OnceCell<()>,
}

impl PgItemStore {
    pub fn new(pool: DbPool) -> Self {
        Self {
            pool,
            schema_ready: OnceCell::new(),
        }
    }

    /// Run migrations unless a previous call already succeeded.
    pub async fn ensure_schema(&self) -> Result<(), StoreError> {
        self.schema_ready
            .get_or_try_init(|| async {
                crate::run_migrations(&self.pool).await?;
                tracing::info!("Item schema migrations applied");
                Ok::<(), StoreError>(())
            })
            .await?;
        Ok(())
    }
}

#[async_trait]
impl ItemStore for PgItemStore {
    async fn create(&self, input: &NewItem) -> Result<Item, StoreError> {
        self.ensure_schema().await?;
        Ok(ItemRepo::create(&self.pool, new_item_id(), input).await?)
    }

    async fn list(&self) -> Result<Vec<Item>, StoreError> {
        self.ensure_schema().await?;
        Ok(ItemRepo::list(&self.pool).await?)
    }

    async fn update_by_id(
        &self,
        id: ItemId,
        patch: &ItemPatch,
    ) -> Result<Option<Item>, StoreError> {
        self.ensure_schema().await?;
        Ok(ItemRepo::update(&self.pool, id, patch).await?)
    }

    async fn delete_by_id(&self, id: ItemId) -> Result<Option<Item>, StoreError> {
        self.ensure_schema().await?;
        Ok(ItemRepo::delete(&self.pool, id).await?)
    }
}
