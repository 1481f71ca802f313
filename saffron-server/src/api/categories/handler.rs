//! Category API Handlers

use axum::{Json, extract::State};
use shared::models::{Category, CategoryCreate};

use crate::core::ServerState;
use crate::utils::AppResult;
use crate::utils::validation::{MAX_NAME_LEN, validate_required_text};

/// GET /api/categories - 获取所有分类 (按排序)
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Category>>> {
    Ok(Json(state.store.list_categories()))
}

/// POST /api/categories - 新建分类
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<CategoryCreate>,
) -> AppResult<Json<Category>> {
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    Ok(Json(state.store.insert_category(payload)))
}
