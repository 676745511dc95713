//! Domain types shared by the stockroom crates.
//!
//! No I/O lives here: item field validation, the id type, and the error
//! enum that handlers map to HTTP responses.

pub mod error;
pub mod item;
pub mod types;
