//! Order API 模块

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub use handler::OrderWithTotals;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/orders", order_routes())
}

fn order_routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route(
            "/{id}",
            get(handler::get_by_id)
                .put(handler::update)
                .delete(handler::delete),
        )
        .route("/{id}/totals", get(handler::get_totals))
}
