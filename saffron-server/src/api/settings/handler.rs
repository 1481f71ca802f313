//! Settings API Handlers
//!
//! Connection settings are the only persisted state; reads and writes go
//! straight to the redb-backed storage.

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;
use shared::models::{ApiConnection, ApiConnectionUpdate};

use crate::core::ServerState;
use crate::utils::validation::{MAX_URL_LEN, validate_optional_text};
use crate::utils::{AppError, AppResult};

/// One named connection entry, as returned by the list endpoint
#[derive(Debug, Serialize)]
pub struct NamedConnection {
    pub service: String,
    #[serde(flatten)]
    pub connection: ApiConnection,
}

/// GET /api/settings/connections - 列出所有连接设置
pub async fn list_connections(
    State(state): State<ServerState>,
) -> AppResult<Json<Vec<NamedConnection>>> {
    let entries = state
        .settings
        .list()?
        .into_iter()
        .map(|(service, connection)| NamedConnection {
            service,
            connection,
        })
        .collect();
    Ok(Json(entries))
}

/// GET /api/settings/connections/:service - 获取单个连接设置
pub async fn get_connection(
    State(state): State<ServerState>,
    Path(service): Path<String>,
) -> AppResult<Json<ApiConnection>> {
    let connection = state
        .settings
        .get(&service)?
        .ok_or_else(|| AppError::not_found(format!("Connection {service}")))?;
    Ok(Json(connection))
}

/// PUT /api/settings/connections/:service - 更新 (或创建) 连接设置
pub async fn update_connection(
    State(state): State<ServerState>,
    Path(service): Path<String>,
    Json(payload): Json<ApiConnectionUpdate>,
) -> AppResult<Json<ApiConnection>> {
    validate_optional_text(&payload.api_url, "api_url", MAX_URL_LEN)?;

    let connection = state.settings.update(&service, payload)?;
    tracing::info!(service = %service, enabled = connection.enabled, "Connection settings updated");
    Ok(Json(connection))
}

/// DELETE /api/settings/connections/:service - 删除连接设置
pub async fn remove_connection(
    State(state): State<ServerState>,
    Path(service): Path<String>,
) -> AppResult<Json<bool>> {
    let removed = state.settings.remove(&service)?;
    if !removed {
        return Err(AppError::not_found(format!("Connection {service}")));
    }
    Ok(Json(true))
}
