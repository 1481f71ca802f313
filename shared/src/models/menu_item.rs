//! Menu Item Model

use serde::{Deserialize, Serialize};

/// Optional paid extra attached to a menu item
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Addon {
    /// Addon reference (String ID, unique within the owning item)
    pub id: String,
    pub name: String,
    /// Price in currency unit (non-negative)
    pub price: f64,
}

/// Menu item entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    /// Price in currency unit (non-negative)
    pub price: f64,
    /// Category name reference
    pub category: String,
    pub subcategory: Option<String>,
    /// Available add-ons for this item
    #[serde(default)]
    pub addons: Vec<Addon>,
    pub is_active: bool,
}

/// Create menu item payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItemCreate {
    pub name: String,
    pub price: f64,
    pub category: String,
    pub subcategory: Option<String>,
    #[serde(default)]
    pub addons: Vec<Addon>,
}

/// Update menu item payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItemUpdate {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub category: Option<String>,
    pub subcategory: Option<String>,
    pub addons: Option<Vec<Addon>>,
    pub is_active: Option<bool>,
}
