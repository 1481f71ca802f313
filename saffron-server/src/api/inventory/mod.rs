//! Inventory API 模块 (Advanced+)

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub use handler::InventoryItemWithLevel;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/inventory", inventory_routes())
}

fn inventory_routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route("/alerts", get(handler::alerts))
        .route(
            "/{id}",
            get(handler::get_by_id)
                .put(handler::update)
                .delete(handler::delete),
        )
}
