//! Dining Table API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use shared::models::{DiningTable, DiningTableUpdate};

use crate::core::ServerState;
use crate::utils::{AppError, AppResult};

/// GET /api/tables - 获取所有桌台
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<DiningTable>>> {
    Ok(Json(state.store.list_tables()))
}

/// GET /api/tables/:id - 获取单个桌台
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<DiningTable>> {
    let table = state
        .store
        .get_table(&id)
        .ok_or_else(|| AppError::not_found(format!("Table {id}")))?;
    Ok(Json(table))
}

/// PUT /api/tables/:id - 更新桌台 (改名/改容量/改状态)
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<DiningTableUpdate>,
) -> AppResult<Json<DiningTable>> {
    if let Some(capacity) = payload.capacity
        && capacity <= 0
    {
        return Err(AppError::validation(format!(
            "capacity must be positive, got {capacity}"
        )));
    }

    let table = state
        .store
        .update_table(&id, payload)
        .ok_or_else(|| AppError::not_found(format!("Table {id}")))?;
    Ok(Json(table))
}
