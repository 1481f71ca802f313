//! Reservation API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use shared::models::{Reservation, ReservationCreate, ReservationUpdate};

use crate::core::ServerState;
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_NOTE_LEN, validate_optional_text, validate_required_text,
};
use crate::utils::{AppError, AppResult};

fn validate_party_size(party_size: i32) -> AppResult<()> {
    if party_size <= 0 {
        return Err(AppError::validation(format!(
            "party_size must be positive, got {party_size}"
        )));
    }
    Ok(())
}

/// GET /api/reservations - 获取所有预订 (按时间)
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Reservation>>> {
    Ok(Json(state.store.list_reservations()))
}

/// GET /api/reservations/:id - 获取单个预订
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Reservation>> {
    let reservation = state
        .store
        .get_reservation(&id)
        .ok_or_else(|| AppError::not_found(format!("Reservation {id}")))?;
    Ok(Json(reservation))
}

/// POST /api/reservations - 新建预订
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<ReservationCreate>,
) -> AppResult<Json<Reservation>> {
    validate_required_text(&payload.customer_name, "customer_name", MAX_NAME_LEN)?;
    validate_optional_text(&payload.notes, "notes", MAX_NOTE_LEN)?;
    validate_party_size(payload.party_size)?;

    Ok(Json(state.store.insert_reservation(payload)))
}

/// PUT /api/reservations/:id - 更新预订
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<ReservationUpdate>,
) -> AppResult<Json<Reservation>> {
    if let Some(party_size) = payload.party_size {
        validate_party_size(party_size)?;
    }
    validate_optional_text(&payload.notes, "notes", MAX_NOTE_LEN)?;

    let reservation = state
        .store
        .update_reservation(&id, payload)
        .ok_or_else(|| AppError::not_found(format!("Reservation {id}")))?;
    Ok(Json(reservation))
}

/// DELETE /api/reservations/:id - 删除预订
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Reservation>> {
    let reservation = state
        .store
        .remove_reservation(&id)
        .ok_or_else(|| AppError::not_found(format!("Reservation {id}")))?;
    Ok(Json(reservation))
}
