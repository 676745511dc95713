//! Item model and DTOs.

use serde::Serialize;
use sqlx::FromRow;
use stockroom_core::item::serialize_quantity;
use stockroom_core::types::ItemId;

pub use stockroom_core::item::{ItemPatch, NewItem};

/// A row from the `items` table, and the JSON shape clients see.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    #[serde(serialize_with = "serialize_quantity")]
    pub quantity: f64,
}
