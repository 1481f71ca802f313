//! Order Model

use serde::{Deserialize, Serialize};

use super::menu_item::Addon;

/// Order status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Paid,
    #[default]
    Pending,
    Cancelled,
}

/// Order channel
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderType {
    #[default]
    Table,
    Collection,
    Delivery,
    Online,
}

/// Menu item snapshot owned by an order line
///
/// Copies the fields that pricing needs at the time the line was added, so a
/// later menu edit does not change an existing order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItemRef {
    /// Menu item reference (String ID)
    pub id: String,
    pub name: String,
    /// Price in currency unit at time of ordering
    pub price: f64,
}

/// Order line
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItem {
    pub menu_item: MenuItemRef,
    /// Positive integer quantity
    pub quantity: i32,
    pub notes: Option<String>,
    /// Selected add-ons (subset of the menu item's add-ons)
    #[serde(default)]
    pub selected_addons: Vec<Addon>,
}

/// Order entity
///
/// Totals are always derived from the items, never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    /// Dining table reference (String ID), absent for collection/delivery/online
    pub table_id: Option<String>,
    pub order_type: OrderType,
    pub status: OrderStatus,
    pub items: Vec<OrderItem>,
    /// Flat discount in currency unit (non-negative)
    pub discount: Option<f64>,
    pub payment_method: Option<String>,
    /// RFC 3339 timestamp
    pub created_at: String,
}

/// Order line input (references a menu item by ID)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItemInput {
    /// Menu item reference (String ID)
    pub menu_item_id: String,
    pub quantity: i32,
    pub notes: Option<String>,
    /// Selected add-on IDs (must exist on the referenced menu item)
    #[serde(default)]
    pub addon_ids: Vec<String>,
}

/// Create order payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderCreate {
    pub table_id: Option<String>,
    #[serde(default)]
    pub order_type: OrderType,
    pub items: Vec<OrderItemInput>,
    pub discount: Option<f64>,
    pub payment_method: Option<String>,
}

/// Update order payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderUpdate {
    pub table_id: Option<String>,
    pub order_type: Option<OrderType>,
    pub status: Option<OrderStatus>,
    pub items: Option<Vec<OrderItemInput>>,
    pub discount: Option<f64>,
    pub payment_method: Option<String>,
}
