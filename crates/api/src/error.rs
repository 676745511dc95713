use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use stockroom_core::error::CoreError;
use stockroom_core::item::ITEM_ENTITY;
use stockroom_core::types::ItemId;
use stockroom_db::StoreError;

/// Whether a failed store call was reading or writing.
///
/// Read failures surface as 500, write failures as 400.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreAccess {
    Read,
    Write,
}

/// Application-level error type for HTTP handlers.
///
/// Implements [`IntoResponse`]; the match in `into_response` is the one
/// place status codes are chosen.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `stockroom_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The item store failed.
    #[error("Store error during {access:?}: {source}")]
    Store {
        access: StoreAccess,
        #[source]
        source: StoreError,
    },

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// The request body could not be read; carries axum's status.
    #[error("Request rejected ({status}): {message}")]
    Rejected { status: StatusCode, message: String },
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Wrap a store failure from a read path (`GET /items`).
    pub fn read(source: StoreError) -> Self {
        AppError::Store {
            access: StoreAccess::Read,
            source,
        }
    }

    /// Wrap a store failure from a write path (create, update, delete).
    pub fn write(source: StoreError) -> Self {
        AppError::Store {
            access: StoreAccess::Write,
            source,
        }
    }

    pub fn item_not_found(id: ItemId) -> Self {
        AppError::Core(CoreError::NotFound {
            entity: ITEM_ENTITY,
            id,
        })
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::Core(CoreError::Validation(msg)) | AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, json!({ "error": msg }))
            }
            AppError::Rejected { status, message } => (*status, json!({ "error": message })),
            AppError::Core(CoreError::NotFound { entity, .. }) => (
                StatusCode::NOT_FOUND,
                json!({ "message": format!("{entity} not found") }),
            ),
            AppError::Store { access, source } => {
                tracing::error!(error = %source, ?access, "Item store error");
                let status = match access {
                    StoreAccess::Read => StatusCode::INTERNAL_SERVER_ERROR,
                    StoreAccess::Write => StatusCode::BAD_REQUEST,
                };
                (status, json!({ "error": source.to_string() }))
            }
        };

        (status, axum::Json(body)).into_response()
    }
}
