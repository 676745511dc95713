//! Request handlers.
//!
//! - [`status`] -- liveness and greeting endpoints; no store access.
//! - [`items`] -- create, list, update, delete against the injected
//!   [`ItemStore`](stockroom_db::ItemStore), mapping failures via
//!   [`AppError`](crate::error::AppError).

pub mod items;
pub mod status;
