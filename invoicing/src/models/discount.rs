//! Discount model for the invoicing crate.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Discount kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiscountKind {
    Percent,
    Amount,
}

impl DiscountKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DiscountKind::Percent => "percent",
            DiscountKind::Amount => "amount",
        }
    }

    pub fn from_string(s: &str) -> Self {
        match s {
            "amount" => DiscountKind::Amount,
            _ => DiscountKind::Percent,
        }
    }
}

/// Discount attached to a product or an invoice line.
///
/// Percent discounts must not exceed 100 and amount discounts must not
/// exceed the base they apply to; both are enforced when the discount is
/// applied. Inactive discounts are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscountRule {
    pub kind: DiscountKind,
    pub value: Decimal,
    pub active: bool,
}

impl DiscountRule {
    pub fn percent(value: Decimal) -> Self {
        Self {
            kind: DiscountKind::Percent,
            value,
            active: true,
        }
    }

    pub fn amount(value: Decimal) -> Self {
        Self {
            kind: DiscountKind::Amount,
            value,
            active: true,
        }
    }
}
