//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`menu`] - 菜单管理接口
//! - [`categories`] - 分类接口
//! - [`orders`] - 订单管理接口
//! - [`inventory`] - 库存管理接口 (Advanced+)
//! - [`reservations`] - 预订管理接口
//! - [`tables`] - 桌台管理接口
//! - [`team`] - 团队管理接口 (Admin)
//! - [`customers`] - 客户管理接口 (Advanced+)
//! - [`settings`] - 连接设置接口 (Admin)
//! - [`upsell`] - 加购推荐接口
//! - [`address`] - 地址查询接口

pub mod address;
pub mod categories;
pub mod customers;
pub mod health;
pub mod inventory;
pub mod menu;
pub mod orders;
pub mod reservations;
pub mod settings;
pub mod tables;
pub mod team;
pub mod upsell;

use axum::{
    Router,
    extract::Request,
    middleware::{self, Next},
    response::IntoResponse,
};
use shared::models::Role;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::auth::{self, AccessDecision};
use crate::core::ServerState;
use crate::utils::AppError;

/// Compose the full application router
pub fn router(state: ServerState) -> Router {
    Router::new()
        .merge(health::router())
        .merge(menu::router())
        .merge(categories::router())
        .merge(orders::router())
        .merge(reservations::router())
        .merge(tables::router())
        .merge(upsell::router())
        .merge(address::router())
        .merge(guarded(inventory::router(), auth::permissions::ADVANCED_ROLES))
        .merge(guarded(customers::router(), auth::permissions::ADVANCED_ROLES))
        .merge(guarded(team::router(), auth::permissions::ADMIN_ROLES))
        .merge(guarded(settings::router(), auth::permissions::ADMIN_ROLES))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Wrap a resource router with a role guard
///
/// The authorization decision is made here at the routing layer; handlers
/// never re-check roles.
fn guarded(router: Router<ServerState>, required: &'static [Role]) -> Router<ServerState> {
    router.layer(middleware::from_fn(
        move |req: Request, next: Next| async move {
            let role = auth::role_from_headers(req.headers());
            match auth::authorize(role, required) {
                AccessDecision::Allow => next.run(req).await,
                AccessDecision::Deny(reason) => {
                    tracing::warn!(role = role.as_str(), uri = %req.uri(), "Access denied");
                    AppError::Forbidden(reason).into_response()
                }
            }
        },
    ))
}
