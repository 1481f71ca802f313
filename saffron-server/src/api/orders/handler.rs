//! Order API Handlers
//!
//! Totals are derived on every read through the pricing module; they are
//! never written back to the stored order.

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;
use shared::models::{
    MenuItemRef, Order, OrderCreate, OrderItem, OrderItemInput, OrderUpdate,
};

use crate::auth::CurrentStaff;
use crate::core::ServerState;
use crate::orders::validate::{to_app_error, validate_items, validate_order};
use crate::pricing::{OrderTotals, calculate_order_totals};
use crate::store::{MemStore, new_id};
use crate::utils::{AppError, AppResult};

/// Order plus its derived totals
#[derive(Debug, Serialize)]
pub struct OrderWithTotals {
    #[serde(flatten)]
    pub order: Order,
    pub totals: OrderTotals,
}

impl From<Order> for OrderWithTotals {
    fn from(order: Order) -> Self {
        let totals = calculate_order_totals(&order.items, order.discount);
        Self { order, totals }
    }
}

/// Resolve item inputs against the menu, snapshotting price and name
///
/// Selected add-ons must be a subset of the menu item's own add-ons.
fn resolve_items(store: &MemStore, inputs: Vec<OrderItemInput>) -> AppResult<Vec<OrderItem>> {
    let mut items = Vec::with_capacity(inputs.len());
    for input in inputs {
        let menu_item = store
            .get_menu_item(&input.menu_item_id)
            .ok_or_else(|| AppError::not_found(format!("Menu item {}", input.menu_item_id)))?;

        let mut selected_addons = Vec::with_capacity(input.addon_ids.len());
        for addon_id in &input.addon_ids {
            let addon = menu_item
                .addons
                .iter()
                .find(|a| &a.id == addon_id)
                .ok_or_else(|| {
                    AppError::validation(format!(
                        "Addon {} does not belong to menu item {}",
                        addon_id, menu_item.id
                    ))
                })?;
            selected_addons.push(addon.clone());
        }

        items.push(OrderItem {
            menu_item: MenuItemRef {
                id: menu_item.id,
                name: menu_item.name,
                price: menu_item.price,
            },
            quantity: input.quantity,
            notes: input.notes,
            selected_addons,
        });
    }
    Ok(items)
}

/// GET /api/orders - 获取所有订单 (含推导总额)
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<OrderWithTotals>>> {
    let orders = state
        .store
        .list_orders()
        .into_iter()
        .map(OrderWithTotals::from)
        .collect();
    Ok(Json(orders))
}

/// GET /api/orders/:id - 获取单个订单
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<OrderWithTotals>> {
    let order = state
        .store
        .get_order(&id)
        .ok_or_else(|| AppError::not_found(format!("Order {id}")))?;
    Ok(Json(order.into()))
}

/// GET /api/orders/:id/totals - 只取推导总额
pub async fn get_totals(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<OrderTotals>> {
    let order = state
        .store
        .get_order(&id)
        .ok_or_else(|| AppError::not_found(format!("Order {id}")))?;
    Ok(Json(calculate_order_totals(&order.items, order.discount)))
}

/// POST /api/orders - 新建订单
pub async fn create(
    State(state): State<ServerState>,
    staff: CurrentStaff,
    Json(payload): Json<OrderCreate>,
) -> AppResult<Json<OrderWithTotals>> {
    let valid = validate_order(payload).map_err(to_app_error)?;

    if let Some(table_id) = &valid.table_id
        && state.store.get_table(table_id).is_none()
    {
        return Err(AppError::not_found(format!("Table {table_id}")));
    }

    let items = resolve_items(&state.store, valid.items)?;

    let order = Order {
        id: new_id("ord"),
        table_id: valid.table_id,
        order_type: valid.order_type,
        status: Default::default(),
        items,
        discount: valid.discount,
        payment_method: valid.payment_method,
        created_at: chrono::Utc::now().to_rfc3339(),
    };

    tracing::info!(
        order_id = %order.id,
        role = staff.role.as_str(),
        lines = order.items.len(),
        "Order created"
    );

    Ok(Json(state.store.insert_order(order).into()))
}

/// PUT /api/orders/:id - 更新订单
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<OrderUpdate>,
) -> AppResult<Json<OrderWithTotals>> {
    let mut order = state
        .store
        .get_order(&id)
        .ok_or_else(|| AppError::not_found(format!("Order {id}")))?;

    if let Some(items) = payload.items {
        validate_items(&items).map_err(to_app_error)?;
        order.items = resolve_items(&state.store, items)?;
    }
    if let Some(table_id) = payload.table_id {
        if state.store.get_table(&table_id).is_none() {
            return Err(AppError::not_found(format!("Table {table_id}")));
        }
        order.table_id = Some(table_id);
    }
    if let Some(order_type) = payload.order_type {
        order.order_type = order_type;
    }
    if let Some(status) = payload.status {
        order.status = status;
    }
    if let Some(discount) = payload.discount {
        if !discount.is_finite() || discount < 0.0 {
            return Err(AppError::validation(format!(
                "discount must be a non-negative finite number, got {discount}"
            )));
        }
        order.discount = Some(discount);
    }
    if let Some(payment_method) = payload.payment_method {
        order.payment_method = Some(payment_method);
    }

    let order = state
        .store
        .replace_order(order)
        .ok_or_else(|| AppError::not_found(format!("Order {id}")))?;
    Ok(Json(order.into()))
}

/// DELETE /api/orders/:id - 删除订单
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Order>> {
    let order = state
        .store
        .remove_order(&id)
        .ok_or_else(|| AppError::not_found(format!("Order {id}")))?;
    Ok(Json(order))
}
