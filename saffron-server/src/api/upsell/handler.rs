//! Upsell API Handler

use axum::{Json, extract::State};

use crate::core::ServerState;
use crate::services::{UpsellRequest, UpsellSuggestion};
use crate::utils::AppResult;

/// POST /api/upsell - 根据当前订单生成加购建议
///
/// Never fails: every upstream problem resolves to the fixed fallback.
pub async fn recommend(
    State(state): State<ServerState>,
    Json(payload): Json<UpsellRequest>,
) -> AppResult<Json<UpsellSuggestion>> {
    let suggestion = state.upsell.recommend(&payload.items_ordered).await;
    Ok(Json(suggestion))
}
