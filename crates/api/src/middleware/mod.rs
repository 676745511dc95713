//! Request middleware.
//!
//! - [`request_log::log_request`] -- Logs method and path before dispatch.

pub mod request_log;
