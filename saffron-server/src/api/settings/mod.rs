//! Settings API 模块 (Admin)

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/settings", settings_routes())
}

fn settings_routes() -> Router<ServerState> {
    Router::new()
        .route("/connections", get(handler::list_connections))
        .route(
            "/connections/{service}",
            get(handler::get_connection)
                .put(handler::update_connection)
                .delete(handler::remove_connection),
        )
}
