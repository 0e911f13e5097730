//! Line item model for the invoicing crate.

use super::{DiscountRule, TaxCategory};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Line item on an invoice.
///
/// `subtotal`, `tax_amount` and `total` are derived: they are recomputed on
/// every invoice mutation and never set by hand.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineItem {
    pub line_item_id: Uuid,
    pub description: String,
    pub quantity: Decimal,
    pub unit_price: Decimal,
    pub tax_category: TaxCategory,
    pub discount: Option<DiscountRule>,
    pub sort_order: i32,
    pub subtotal: Decimal,
    pub tax_amount: Decimal,
    pub total: Decimal,
}

/// Input for adding a line item.
///
/// Monetary constraints (positive quantity, non-negative price) are enforced
/// by the invoice service; the derive covers the textual fields.
#[derive(Debug, Clone, Validate)]
pub struct CreateLineItem {
    #[validate(length(min = 1, max = 500))]
    pub description: String,
    pub quantity: Decimal,
    pub unit_price: Decimal,
    pub tax_category: TaxCategory,
    pub discount: Option<DiscountRule>,
    pub sort_order: i32,
}

/// Input for updating a line item.
#[derive(Debug, Clone, Default, Validate)]
pub struct UpdateLineItem {
    #[validate(length(min = 1, max = 500))]
    pub description: Option<String>,
    pub quantity: Option<Decimal>,
    pub unit_price: Option<Decimal>,
    pub tax_category: Option<TaxCategory>,
    pub discount: Option<DiscountRule>,
    pub sort_order: Option<i32>,
}
