//! Product model for the invoicing crate.

use super::{DiscountRule, TaxCategory};
use billing_core::error::BillingError;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// How a product's price was entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceMode {
    /// Hors taxe: tax-exclusive.
    Ht,
    /// Toutes taxes comprises: tax-inclusive.
    Ttc,
}

impl PriceMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            PriceMode::Ht => "ht",
            PriceMode::Ttc => "ttc",
        }
    }

    pub fn from_string(s: &str) -> Self {
        match s {
            "ttc" => PriceMode::Ttc,
            _ => PriceMode::Ht,
        }
    }
}

/// Product catalog entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub product_id: Uuid,
    pub name: String,
    /// Price as entered; interpret through `price_mode`.
    pub unit_price: Decimal,
    pub price_mode: PriceMode,
    pub tax_category: TaxCategory,
    pub discount: Option<DiscountRule>,
    pub active: bool,
    pub created_utc: DateTime<Utc>,
}

impl Product {
    /// Create a product from validated input.
    pub fn create(input: CreateProduct) -> Result<Self, BillingError> {
        input.validate()?;
        if input.unit_price < Decimal::ZERO {
            return Err(BillingError::InvalidAmount(anyhow::anyhow!(
                "Unit price must not be negative, got {}",
                input.unit_price
            )));
        }
        Ok(Self {
            product_id: Uuid::new_v4(),
            name: input.name,
            unit_price: input.unit_price,
            price_mode: input.price_mode,
            tax_category: input.tax_category,
            discount: input.discount,
            active: true,
            created_utc: Utc::now(),
        })
    }
}

/// Input for creating a product.
#[derive(Debug, Clone, Validate)]
pub struct CreateProduct {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    pub unit_price: Decimal,
    pub price_mode: PriceMode,
    pub tax_category: TaxCategory,
    pub discount: Option<DiscountRule>,
}
