//! Typed order validation
//!
//! Explicit validation of order payloads, returning either a [`ValidOrder`]
//! or the full list of field errors. Replaces ad-hoc per-form checks: the
//! handler converts the error list into one `AppError::Validation`.

use shared::models::{OrderCreate, OrderItemInput, OrderType};

use crate::utils::AppError;
use crate::utils::validation::{MAX_NOTE_LEN, MAX_SHORT_TEXT_LEN};

/// One field-level validation failure
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// An order payload that passed validation
///
/// Construction only through [`validate_order`], so holding one is proof the
/// payload-level invariants hold. Menu references are resolved later against
/// the store.
#[derive(Debug, Clone)]
pub struct ValidOrder {
    pub table_id: Option<String>,
    pub order_type: OrderType,
    pub items: Vec<OrderItemInput>,
    pub discount: Option<f64>,
    pub payment_method: Option<String>,
}

/// Validate an order payload, collecting every field error
pub fn validate_order(payload: OrderCreate) -> Result<ValidOrder, Vec<ValidationError>> {
    let mut errors = Vec::new();

    if payload.items.is_empty() {
        errors.push(ValidationError::new("items", "order must contain at least one item"));
    }

    if payload.order_type == OrderType::Table && payload.table_id.is_none() {
        errors.push(ValidationError::new(
            "table_id",
            "table orders must reference a table",
        ));
    }

    for (idx, item) in payload.items.iter().enumerate() {
        validate_item(idx, item, &mut errors);
    }

    if let Some(discount) = payload.discount {
        if !discount.is_finite() {
            errors.push(ValidationError::new(
                "discount",
                format!("discount must be a finite number, got {discount}"),
            ));
        } else if discount < 0.0 {
            errors.push(ValidationError::new(
                "discount",
                format!("discount must be non-negative, got {discount}"),
            ));
        }
    }

    if let Some(method) = &payload.payment_method
        && method.len() > MAX_SHORT_TEXT_LEN
    {
        errors.push(ValidationError::new(
            "payment_method",
            format!("payment_method is too long (max {MAX_SHORT_TEXT_LEN})"),
        ));
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(ValidOrder {
        table_id: payload.table_id,
        order_type: payload.order_type,
        items: payload.items,
        discount: payload.discount,
        payment_method: payload.payment_method,
    })
}

/// Validate a bare item list (used by order updates)
pub fn validate_items(items: &[OrderItemInput]) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();
    if items.is_empty() {
        errors.push(ValidationError::new("items", "order must contain at least one item"));
    }
    for (idx, item) in items.iter().enumerate() {
        validate_item(idx, item, &mut errors);
    }
    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

fn validate_item(idx: usize, item: &OrderItemInput, errors: &mut Vec<ValidationError>) {
    if item.menu_item_id.trim().is_empty() {
        errors.push(ValidationError::new(
            format!("items[{idx}].menu_item_id"),
            "menu_item_id must not be empty",
        ));
    }
    if item.quantity <= 0 {
        errors.push(ValidationError::new(
            format!("items[{idx}].quantity"),
            format!("quantity must be positive, got {}", item.quantity),
        ));
    }
    if let Some(notes) = &item.notes
        && notes.len() > MAX_NOTE_LEN
    {
        errors.push(ValidationError::new(
            format!("items[{idx}].notes"),
            format!("notes are too long (max {MAX_NOTE_LEN})"),
        ));
    }
}

/// Flatten a validation error list into one AppError
pub fn to_app_error(errors: Vec<ValidationError>) -> AppError {
    let joined = errors
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join("; ");
    AppError::Validation(joined)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(menu_item_id: &str, quantity: i32) -> OrderItemInput {
        OrderItemInput {
            menu_item_id: menu_item_id.into(),
            quantity,
            notes: None,
            addon_ids: vec![],
        }
    }

    fn payload(items: Vec<OrderItemInput>) -> OrderCreate {
        OrderCreate {
            table_id: Some("table_1".into()),
            order_type: OrderType::Table,
            items,
            discount: None,
            payment_method: None,
        }
    }

    #[test]
    fn test_valid_payload_passes() {
        let valid = validate_order(payload(vec![item("menu_ribeye", 2)])).unwrap();
        assert_eq!(valid.items.len(), 1);
    }

    #[test]
    fn test_empty_items_rejected() {
        let errors = validate_order(payload(vec![])).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "items");
    }

    #[test]
    fn test_zero_quantity_rejected() {
        let errors = validate_order(payload(vec![item("menu_ribeye", 0)])).unwrap_err();
        assert_eq!(errors[0].field, "items[0].quantity");
    }

    #[test]
    fn test_table_order_requires_table() {
        let mut p = payload(vec![item("menu_ribeye", 1)]);
        p.table_id = None;
        let errors = validate_order(p).unwrap_err();
        assert_eq!(errors[0].field, "table_id");
    }

    #[test]
    fn test_collection_order_needs_no_table() {
        let mut p = payload(vec![item("menu_ribeye", 1)]);
        p.table_id = None;
        p.order_type = OrderType::Collection;
        assert!(validate_order(p).is_ok());
    }

    #[test]
    fn test_negative_discount_rejected() {
        let mut p = payload(vec![item("menu_ribeye", 1)]);
        p.discount = Some(-1.0);
        let errors = validate_order(p).unwrap_err();
        assert_eq!(errors[0].field, "discount");
    }

    #[test]
    fn test_errors_accumulate_per_field() {
        let mut p = payload(vec![item("", 0), item("menu_ok", -3)]);
        p.discount = Some(f64::NAN);
        let errors = validate_order(p).unwrap_err();

        let fields: Vec<_> = errors.iter().map(|e| e.field.as_str()).collect();
        assert!(fields.contains(&"items[0].menu_item_id"));
        assert!(fields.contains(&"items[0].quantity"));
        assert!(fields.contains(&"items[1].quantity"));
        assert!(fields.contains(&"discount"));
    }
}
