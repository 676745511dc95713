use uuid::Uuid;

/// Item identifiers are UUID v7, so sorting by id follows insertion order.
pub type ItemId = Uuid;

/// Allocate a fresh item identifier.
pub fn new_item_id() -> ItemId {
    Uuid::now_v7()
}
