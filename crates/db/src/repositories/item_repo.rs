//! Repository for the `items` table.

use sqlx::PgPool;
use stockroom_core::types::ItemId;

use crate::models::item::{Item, ItemPatch, NewItem};

/// Column list for `items` queries.
const COLUMNS: &str = "id, name, quantity";

/// Provides CRUD operations for items.
pub struct ItemRepo;

impl ItemRepo {
    /// Insert a new item under the given id, returning the stored row.
    pub async fn create(pool: &PgPool, id: ItemId, input: &NewItem) -> Result<Item, sqlx::Error> {
        let query = format!(
            "INSERT INTO items (id, name, quantity) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Item>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(input.quantity)
            .fetch_one(pool)
            .await
    }

    /// List every item, oldest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Item>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM items ORDER BY id");
        sqlx::query_as::<_, Item>(&query).fetch_all(pool).await
    }

    /// Partially update an item.
    ///
    /// Uses `COALESCE` so only provided fields are changed. Returns `None`
    /// if no item has the given id.
    pub async fn update(
        pool: &PgPool,
        id: ItemId,
        patch: &ItemPatch,
    ) -> Result<Option<Item>, sqlx::Error> {
        let query = format!(
            "UPDATE items SET \
                 name = COALESCE($2, name), \
                 quantity = COALESCE($3, quantity), \
                 updated_at = now() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Item>(&query)
            .bind(id)
            .bind(&patch.name)
            .bind(patch.quantity)
            .fetch_optional(pool)
            .await
    }

    /// Delete an item, returning the removed row, or `None` if it did not exist.
    pub async fn delete(pool: &PgPool, id: ItemId) -> Result<Option<Item>, sqlx::Error> {
        let query = format!("DELETE FROM items WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Item>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
