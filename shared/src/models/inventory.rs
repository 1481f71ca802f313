//! Inventory Model
//!
//! Stock items and the stock-level banding used for reorder alerts.

use serde::{Deserialize, Serialize};

/// Stock-level band for display and alerting
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StockLevel {
    /// Stock is below the reorder threshold
    Low,
    /// Stock is within 1.5x of the reorder threshold
    Warning,
    Normal,
}

/// Classify a stock count against a reorder threshold
///
/// - `stock < low_threshold` → [`StockLevel::Low`]
/// - `stock < 1.5 * low_threshold` → [`StockLevel::Warning`]
/// - otherwise → [`StockLevel::Normal`]
pub fn classify_stock(stock: f64, low_threshold: f64) -> StockLevel {
    if stock < low_threshold {
        StockLevel::Low
    } else if stock < low_threshold * 1.5 {
        StockLevel::Warning
    } else {
        StockLevel::Normal
    }
}

/// Inventory item entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: String,
    pub name: String,
    /// Current stock count (non-negative)
    pub stock: f64,
    /// Unit of measure (kg, bottle, portion, ...)
    pub unit: String,
    /// Stock level below which the item is flagged for reordering
    pub low_threshold: f64,
}

impl InventoryItem {
    /// Current stock-level band
    pub fn level(&self) -> StockLevel {
        classify_stock(self.stock, self.low_threshold)
    }
}

/// Create inventory item payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryItemCreate {
    pub name: String,
    pub stock: f64,
    pub unit: String,
    pub low_threshold: f64,
}

/// Update inventory item payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryItemUpdate {
    pub name: Option<String>,
    pub stock: Option<f64>,
    pub unit: Option<String>,
    pub low_threshold: Option<f64>,
}
