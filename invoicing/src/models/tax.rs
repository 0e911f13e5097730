//! Tax model for the invoicing crate.

use billing_core::money::Currency;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Swiss VAT category.
///
/// The set is fixed by federal law; per-category percent rates come from the
/// canton rate tables in the billing configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaxCategory {
    Exempt,
    Reduced,
    Special,
    Standard,
    NotSubject,
}

impl TaxCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaxCategory::Exempt => "exempt",
            TaxCategory::Reduced => "reduced",
            TaxCategory::Special => "special",
            TaxCategory::Standard => "standard",
            TaxCategory::NotSubject => "not_subject",
        }
    }

    pub fn from_string(s: &str) -> Self {
        match s {
            "exempt" => TaxCategory::Exempt,
            "reduced" => TaxCategory::Reduced,
            "special" => TaxCategory::Special,
            "not_subject" => TaxCategory::NotSubject,
            _ => TaxCategory::Standard,
        }
    }
}

/// Resolved rate for a category in a canton at a date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxRate {
    pub category: TaxCategory,
    /// Percent rate, e.g. 8.1 for the current standard rate.
    pub rate: Decimal,
    /// Localized label for tax lines (TVA / MWST).
    pub label: String,
}

/// Context for one VAT computation.
#[derive(Debug, Clone)]
pub struct TaxContext {
    pub canton: String,
    pub as_of: NaiveDate,
    /// Biller's annual revenue. Below the configured threshold the biller is
    /// exempt from charging VAT regardless of category.
    pub annual_revenue: Option<Decimal>,
    pub currency: Currency,
}

impl TaxContext {
    pub fn new(canton: impl Into<String>, as_of: NaiveDate, currency: Currency) -> Self {
        Self {
            canton: canton.into(),
            as_of,
            annual_revenue: None,
            currency,
        }
    }

    pub fn with_annual_revenue(mut self, revenue: Decimal) -> Self {
        self.annual_revenue = Some(revenue);
        self
    }
}

/// Result of a single VAT computation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TvaComputation {
    pub net_amount: Decimal,
    pub rate: Decimal,
    pub tax_amount: Decimal,
    pub gross_amount: Decimal,
    pub is_exempt: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exemption_reason: Option<String>,
}
