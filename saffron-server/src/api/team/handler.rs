//! Team API Handlers
//!
//! Whole resource is Admin-gated at the routing layer.

use axum::{
    Json,
    extract::{Path, State},
};
use shared::models::{StaffMember, StaffMemberCreate, StaffMemberUpdate};

use crate::core::ServerState;
use crate::utils::validation::{MAX_EMAIL_LEN, MAX_NAME_LEN, validate_required_text};
use crate::utils::{AppError, AppResult};

/// GET /api/team - 获取所有团队成员
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<StaffMember>>> {
    Ok(Json(state.store.list_team()))
}

/// GET /api/team/:id - 获取单个成员
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<StaffMember>> {
    let member = state
        .store
        .get_staff_member(&id)
        .ok_or_else(|| AppError::not_found(format!("Staff member {id}")))?;
    Ok(Json(member))
}

/// POST /api/team - 新建成员
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<StaffMemberCreate>,
) -> AppResult<Json<StaffMember>> {
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_required_text(&payload.email, "email", MAX_EMAIL_LEN)?;

    Ok(Json(state.store.insert_staff_member(payload)))
}

/// PUT /api/team/:id - 更新成员
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<StaffMemberUpdate>,
) -> AppResult<Json<StaffMember>> {
    if let Some(name) = &payload.name {
        validate_required_text(name, "name", MAX_NAME_LEN)?;
    }
    if let Some(email) = &payload.email {
        validate_required_text(email, "email", MAX_EMAIL_LEN)?;
    }

    let member = state
        .store
        .update_staff_member(&id, payload)
        .ok_or_else(|| AppError::not_found(format!("Staff member {id}")))?;
    Ok(Json(member))
}

/// DELETE /api/team/:id - 删除成员
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<StaffMember>> {
    let member = state
        .store
        .remove_staff_member(&id)
        .ok_or_else(|| AppError::not_found(format!("Staff member {id}")))?;
    Ok(Json(member))
}
