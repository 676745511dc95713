//! Handlers for the items collection.
//!
//! Each handler validates its input with `stockroom_core::item`, makes a
//! single store call, and shapes the result. Store failures are tagged as
//! read or write so [`AppError`] can pick the status code.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use stockroom_core::item::{parse_item_id, validate_item_patch, validate_new_item};
use stockroom_db::models::item::Item;

use crate::error::{AppError, AppResult};
use crate::extract::JsonBody;
use crate::response::ItemResponse;
use crate::state::AppState;

/// POST /items
///
/// Create an item from `{"name": string, "quantity": number}`.
pub async fn create_item(
    State(state): State<AppState>,
    JsonBody(body): JsonBody,
) -> AppResult<impl IntoResponse> {
    let input = validate_new_item(&body)?;
    let item = state.store.create(&input).await.map_err(AppError::write)?;

    tracing::info!(item_id = %item.id, name = %item.name, "Item added");

    Ok((
        StatusCode::CREATED,
        Json(ItemResponse {
            message: "Item added",
            item,
        }),
    ))
}

/// GET /items
pub async fn list_items(State(state): State<AppState>) -> AppResult<Json<Vec<Item>>> {
    let items = state.store.list().await.map_err(AppError::read)?;
    Ok(Json(items))
}

/// PUT /items/{id}
///
/// Partially update an item; fields absent from the body keep their values.
pub async fn update_item(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    JsonBody(body): JsonBody,
) -> AppResult<impl IntoResponse> {
    let id = parse_item_id(&raw_id)?;
    let patch = validate_item_patch(&body)?;

    let item = state
        .store
        .update_by_id(id, &patch)
        .await
        .map_err(AppError::write)?
        .ok_or_else(|| AppError::item_not_found(id))?;

    tracing::info!(item_id = %id, "Item updated");

    Ok(Json(ItemResponse {
        message: "Item updated",
        item,
    }))
}

/// DELETE /items/{id}
pub async fn delete_item(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let id = parse_item_id(&raw_id)?;

    let item = state
        .store
        .delete_by_id(id)
        .await
        .map_err(AppError::write)?
        .ok_or_else(|| AppError::item_not_found(id))?;

    tracing::info!(item_id = %id, "Item deleted");

    Ok(Json(ItemResponse {
        message: "Item deleted",
        item,
    }))
}
