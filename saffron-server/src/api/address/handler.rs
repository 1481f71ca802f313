//! Address API Handler

use axum::{Json, extract::Query, extract::State};
use serde::Deserialize;

use crate::core::ServerState;
use crate::services::AddressCandidate;
use crate::utils::{AppError, AppResult};

#[derive(Debug, Deserialize)]
pub struct AddressQuery {
    #[serde(default)]
    pub q: String,
}

/// GET /api/address/search?q=... - 地址搜索
pub async fn search_address(
    State(state): State<ServerState>,
    Query(params): Query<AddressQuery>,
) -> AppResult<Json<Vec<AddressCandidate>>> {
    let query = params.q.trim();
    if query.is_empty() {
        return Err(AppError::validation("Search query `q` is required"));
    }

    let candidates = state.geocode.search(query).await?;
    Ok(Json(candidates))
}
