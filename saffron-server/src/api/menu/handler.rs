//! Menu API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use shared::models::{MenuItem, MenuItemCreate, MenuItemUpdate};

use crate::core::ServerState;
use crate::utils::validation::{MAX_NAME_LEN, validate_amount, validate_required_text};
use crate::utils::{AppError, AppResult};

/// GET /api/menu - 获取所有菜品
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<MenuItem>>> {
    Ok(Json(state.store.list_menu()))
}

/// GET /api/menu/by-category/:category - 按分类获取菜品
pub async fn list_by_category(
    State(state): State<ServerState>,
    Path(category): Path<String>,
) -> AppResult<Json<Vec<MenuItem>>> {
    Ok(Json(state.store.list_menu_by_category(&category)))
}

/// GET /api/menu/:id - 获取单个菜品
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<MenuItem>> {
    let item = state
        .store
        .get_menu_item(&id)
        .ok_or_else(|| AppError::not_found(format!("Menu item {id}")))?;
    Ok(Json(item))
}

/// POST /api/menu - 新建菜品
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<MenuItemCreate>,
) -> AppResult<Json<MenuItem>> {
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_required_text(&payload.category, "category", MAX_NAME_LEN)?;
    validate_amount(payload.price, "price")?;
    for addon in &payload.addons {
        validate_required_text(&addon.name, "addon name", MAX_NAME_LEN)?;
        validate_amount(addon.price, "addon price")?;
    }

    Ok(Json(state.store.insert_menu_item(payload)))
}

/// PUT /api/menu/:id - 更新菜品
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<MenuItemUpdate>,
) -> AppResult<Json<MenuItem>> {
    if let Some(name) = &payload.name {
        validate_required_text(name, "name", MAX_NAME_LEN)?;
    }
    if let Some(price) = payload.price {
        validate_amount(price, "price")?;
    }
    if let Some(addons) = &payload.addons {
        for addon in addons {
            validate_amount(addon.price, "addon price")?;
        }
    }

    let item = state
        .store
        .update_menu_item(&id, payload)
        .ok_or_else(|| AppError::not_found(format!("Menu item {id}")))?;
    Ok(Json(item))
}

/// DELETE /api/menu/:id - 删除菜品
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<MenuItem>> {
    let item = state
        .store
        .remove_menu_item(&id)
        .ok_or_else(|| AppError::not_found(format!("Menu item {id}")))?;
    Ok(Json(item))
}
