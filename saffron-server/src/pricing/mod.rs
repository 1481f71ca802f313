//! Order Pricing Module
//!
//! Derives order totals from line items. Totals are computed on demand and
//! never stored on the order.

mod order_calculator;

pub use order_calculator::*;
