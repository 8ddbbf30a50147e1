//! Item CRUD request handlers.
//!
//! Thin controllers: per-route success message and status are bound
//! at the `wrap` call site; everything else — id parsing, body
//! parsing, the store call — runs inside the wrapped operation so
//! every failure comes back enveloped.

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use crate::AppState;
use crate::envelope::Reply;
use crate::error::ApiError;
use crate::services::items::{self, CreateItem, ItemDto, UpdateItem};
use crate::wrap::{parse_body, wrap};

/// Ids arrive as path text and are parsed here, not by the router, so
/// a non-numeric id yields an enveloped 400 instead of a rejection.
fn parse_id(raw: &str) -> Result<u64, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::InvalidInput("Item id must be an integer".into()))
}

/// `GET /api/items` — list all items.
pub async fn list_items_handler(State(state): State<AppState>) -> Reply {
    wrap("Items retrieved successfully", StatusCode::OK, async {
        Ok(Some(items::list_items(&state.store).await))
    })
    .await
}

/// `GET /api/items/{id}` — get one item.
pub async fn get_item_handler(State(state): State<AppState>, Path(id): Path<String>) -> Reply {
    wrap("Item retrieved successfully", StatusCode::OK, async {
        let id = parse_id(&id)?;
        items::get_item(&state.store, id).await.map(Some)
    })
    .await
}

/// `POST /api/items` — create an item.
pub async fn create_item_handler(State(state): State<AppState>, body: Bytes) -> Reply {
    wrap("Item created successfully", StatusCode::CREATED, async {
        let input: CreateItem = parse_body(&body)?;
        items::create_item(&state.store, input).await.map(Some)
    })
    .await
}

/// `PUT /api/items/{id}` — update an item; absent fields keep their
/// prior values.
pub async fn update_item_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Reply {
    wrap("Item updated successfully", StatusCode::OK, async {
        let id = parse_id(&id)?;
        let input: UpdateItem = parse_body(&body)?;
        items::update_item(&state.store, id, input).await.map(Some)
    })
    .await
}

/// `DELETE /api/items/{id}` — delete an item. No-content success:
/// the envelope carries `result: null` with `success: true`.
pub async fn delete_item_handler(State(state): State<AppState>, Path(id): Path<String>) -> Reply {
    wrap("Item deleted successfully", StatusCode::OK, async {
        let id = parse_id(&id)?;
        items::delete_item(&state.store, id).await?;
        Ok(None::<ItemDto>)
    })
    .await
}
