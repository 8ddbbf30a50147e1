//! Item service — translates store results into API outcomes.
//!
//! Sits between the item handlers and the [`ItemStore`]: presence
//! checks live here, and "missing row" becomes a typed `NotFound`
//! failure the response wrapper can envelope.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use primer_core::items::{ItemRecord, ItemStore};

use crate::error::{ApiError, ApiResult};

/// Store handle shared across handlers.
pub type SharedStore = Arc<RwLock<ItemStore>>;

/// Wire representation of an item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemDto {
    pub id: u64,
    pub name: String,
    pub description: String,
}

impl From<ItemRecord> for ItemDto {
    fn from(record: ItemRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            description: record.description,
        }
    }
}

/// Create payload. `name` is optional at the type level so the
/// presence check produces a domain failure, not a decode rejection.
#[derive(Debug, Default, Deserialize)]
pub struct CreateItem {
    pub name: Option<String>,
    pub description: Option<String>,
}

/// Update payload. Absent fields keep their prior values.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateItem {
    pub name: Option<String>,
    pub description: Option<String>,
}

/// List all items.
pub async fn list_items(store: &SharedStore) -> Vec<ItemDto> {
    store.read().await.list().into_iter().map(ItemDto::from).collect()
}

/// Get a single item by id.
pub async fn get_item(store: &SharedStore, id: u64) -> ApiResult<ItemDto> {
    store
        .read()
        .await
        .get(id)
        .map(ItemDto::from)
        .ok_or_else(|| ApiError::NotFound("Item not found".into()))
}

/// Create an item. `name` is required; `description` defaults to "".
pub async fn create_item(store: &SharedStore, input: CreateItem) -> ApiResult<ItemDto> {
    let name = input
        .name
        .ok_or_else(|| ApiError::InvalidInput("Name is required".into()))?;
    let description = input.description.unwrap_or_default();

    let record = store.write().await.create(name, description);
    Ok(ItemDto::from(record))
}

/// Update an item's fields; absent fields are left alone.
pub async fn update_item(store: &SharedStore, id: u64, input: UpdateItem) -> ApiResult<ItemDto> {
    store
        .write()
        .await
        .update(id, input.name, input.description)
        .map(ItemDto::from)
        .ok_or_else(|| ApiError::NotFound("Item not found".into()))
}

/// Delete an item by id.
pub async fn delete_item(store: &SharedStore, id: u64) -> ApiResult<()> {
    if store.write().await.delete(id) {
        Ok(())
    } else {
        Err(ApiError::NotFound("Item not found".into()))
    }
}
