//! Invoice model for the invoicing crate.

use super::{LineItem, TaxCategory, TaxContext};
use billing_core::money::Currency;
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Invoice status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvoiceStatus {
    Draft,
    Issued,
    Paid,
    Void,
    Overdue,
}

impl InvoiceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            InvoiceStatus::Draft => "draft",
            InvoiceStatus::Issued => "issued",
            InvoiceStatus::Paid => "paid",
            InvoiceStatus::Void => "void",
            InvoiceStatus::Overdue => "overdue",
        }
    }

    pub fn from_string(s: &str) -> Self {
        match s {
            "issued" => InvoiceStatus::Issued,
            "paid" => InvoiceStatus::Paid,
            "void" => InvoiceStatus::Void,
            "overdue" => InvoiceStatus::Overdue,
            _ => InvoiceStatus::Draft,
        }
    }
}

/// Net and tax sums for one tax category on an invoice.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxGroup {
    pub category: TaxCategory,
    pub rate: Decimal,
    /// Breakdown line label, e.g. "TVA 8.1%".
    pub label: String,
    pub net: Decimal,
    pub tax: Decimal,
}

/// Derived invoice totals. Recomputed on every edit, never stored on their
/// own.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InvoiceTotals {
    pub net_total: Decimal,
    pub tax_breakdown: Vec<TaxGroup>,
    pub total_tax: Decimal,
    /// Always equals `net_total + total_tax`, to the cent.
    pub gross_total: Decimal,
    /// Payable amount after cash rounding (nearest 0.05 for CHF).
    pub rounded_total: Decimal,
    /// `rounded_total - gross_total`, printed as a rounding line when
    /// nonzero.
    pub rounding_adjustment: Decimal,
    pub is_exempt: bool,
    pub exemption_reason: Option<String>,
}

/// Invoice document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Invoice {
    pub invoice_id: Uuid,
    pub invoice_number: Option<String>,
    pub status: InvoiceStatus,
    pub customer_name: String,
    pub canton: String,
    pub currency: Currency,
    pub issue_date: Option<NaiveDate>,
    pub due_date: Option<NaiveDate>,
    pub line_items: Vec<LineItem>,
    pub totals: InvoiceTotals,
    pub amount_paid: Decimal,
    pub amount_due: Decimal,
    pub notes: Option<String>,
    pub metadata: Option<serde_json::Value>,
    pub created_utc: DateTime<Utc>,
    pub issued_utc: Option<DateTime<Utc>>,
    pub voided_utc: Option<DateTime<Utc>>,
}

impl Invoice {
    /// Tax context for computations on this invoice.
    pub fn tax_context(&self, as_of: NaiveDate, annual_revenue: Option<Decimal>) -> TaxContext {
        TaxContext {
            canton: self.canton.clone(),
            as_of,
            annual_revenue,
            currency: self.currency,
        }
    }
}

/// Input for creating an invoice.
#[derive(Debug, Clone, Validate)]
pub struct CreateInvoice {
    #[validate(length(min = 1, max = 200))]
    pub customer_name: String,
    #[validate(length(min = 2, max = 2))]
    pub canton: String,
    pub currency: Currency,
    pub due_date: Option<NaiveDate>,
    pub notes: Option<String>,
}
