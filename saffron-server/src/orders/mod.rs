//! 订单模块
//!
//! Typed validation for incoming order payloads. Pricing lives in
//! [`crate::pricing`]; handlers in [`crate::api::orders`].

pub mod validate;

pub use validate::{ValidOrder, ValidationError, validate_order};
