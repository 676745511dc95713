//! Repository layer: one struct per table, static async methods taking a pool.

pub mod item_repo;

pub use item_repo::ItemRepo;
