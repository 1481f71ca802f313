//! Inventory API Handlers
//!
//! Every read carries the stock-level band so clients never re-derive it.

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;
use shared::models::{InventoryItem, InventoryItemCreate, InventoryItemUpdate, StockLevel};

use crate::core::ServerState;
use crate::utils::validation::{MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, validate_amount, validate_required_text};
use crate::utils::{AppError, AppResult};

/// Inventory item plus its derived stock-level band
#[derive(Debug, Serialize)]
pub struct InventoryItemWithLevel {
    #[serde(flatten)]
    pub item: InventoryItem,
    pub level: StockLevel,
}

impl From<InventoryItem> for InventoryItemWithLevel {
    fn from(item: InventoryItem) -> Self {
        let level = item.level();
        Self { item, level }
    }
}

/// GET /api/inventory - 获取所有库存项 (含等级)
pub async fn list(
    State(state): State<ServerState>,
) -> AppResult<Json<Vec<InventoryItemWithLevel>>> {
    let items = state
        .store
        .list_inventory()
        .into_iter()
        .map(InventoryItemWithLevel::from)
        .collect();
    Ok(Json(items))
}

/// GET /api/inventory/alerts - 只列出需要关注的库存项 (Low / Warning)
pub async fn alerts(
    State(state): State<ServerState>,
) -> AppResult<Json<Vec<InventoryItemWithLevel>>> {
    let items = state
        .store
        .list_inventory()
        .into_iter()
        .filter(|item| item.level() != StockLevel::Normal)
        .map(InventoryItemWithLevel::from)
        .collect();
    Ok(Json(items))
}

/// GET /api/inventory/:id - 获取单个库存项
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<InventoryItemWithLevel>> {
    let item = state
        .store
        .get_inventory_item(&id)
        .ok_or_else(|| AppError::not_found(format!("Inventory item {id}")))?;
    Ok(Json(item.into()))
}

/// POST /api/inventory - 新建库存项
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<InventoryItemCreate>,
) -> AppResult<Json<InventoryItemWithLevel>> {
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_required_text(&payload.unit, "unit", MAX_SHORT_TEXT_LEN)?;
    validate_amount(payload.stock, "stock")?;
    validate_amount(payload.low_threshold, "low_threshold")?;

    Ok(Json(state.store.insert_inventory_item(payload).into()))
}

/// PUT /api/inventory/:id - 更新库存项
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<InventoryItemUpdate>,
) -> AppResult<Json<InventoryItemWithLevel>> {
    if let Some(stock) = payload.stock {
        validate_amount(stock, "stock")?;
    }
    if let Some(low_threshold) = payload.low_threshold {
        validate_amount(low_threshold, "low_threshold")?;
    }

    let item = state
        .store
        .update_inventory_item(&id, payload)
        .ok_or_else(|| AppError::not_found(format!("Inventory item {id}")))?;
    Ok(Json(item.into()))
}

/// DELETE /api/inventory/:id - 删除库存项
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<InventoryItem>> {
    let item = state
        .store
        .remove_inventory_item(&id)
        .ok_or_else(|| AppError::not_found(format!("Inventory item {id}")))?;
    Ok(Json(item))
}
