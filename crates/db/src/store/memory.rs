//! In-process item store.

use async_trait::async_trait;
use stockroom_core::types::{new_item_id, ItemId};
use tokio::sync::RwLock;

use super::{ItemStore, StoreError};
use crate::models::item::{Item, ItemPatch, NewItem};

/// Items held in a vector, in insertion order.
///
/// Intended for tests and local runs. Linear lookups; not for large data.
#[derive(Debug, Default)]
pub struct MemoryItemStore {
    items: RwLock<Vec<Item>>,
}

impl MemoryItemStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ItemStore for MemoryItemStore {
    async fn create(&self, input: &NewItem) -> Result<Item, StoreError> {
        let item = Item {
            id: new_item_id(),
            name: input.name.clone(),
            quantity: input.quantity,
        };
        self.items.write().await.push(item.clone());
        Ok(item)
    }

    async fn list(&self) -> Result<Vec<Item>, StoreError> {
        Ok(self.items.read().await.clone())
    }

    async fn update_by_id(
        &self,
        id: ItemId,
        patch: &ItemPatch,
    ) -> Result<Option<Item>, StoreError> {
        let mut items = self.items.write().await;
        let Some(item) = items.iter_mut().find(|item| item.id == id) else {
            return Ok(None);
        };
        patch.apply_to(&mut item.name, &mut item.quantity);
        Ok(Some(item.clone()))
    }

    async fn delete_by_id(&self, id: ItemId) -> Result<Option<Item>, StoreError> {
        let mut items = self.items.write().await;
        let position = items.iter().position(|item| item.id == id);
        Ok(position.map(|index| items.remove(index)))
    }
}
