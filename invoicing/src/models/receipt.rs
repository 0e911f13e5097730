//! Receipt model for the invoicing crate.

use billing_core::money::Currency;
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Payment receipt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Receipt {
    pub receipt_id: Uuid,
    pub receipt_number: String,
    pub invoice_id: Uuid,
    pub amount: Decimal,
    pub currency: Currency,
    pub payment_method: String,
    pub payment_reference: Option<String>,
    pub payment_date: NaiveDate,
    pub notes: Option<String>,
    pub created_utc: DateTime<Utc>,
}

/// Input for recording a payment.
///
/// The amount must be positive; the invoice service enforces it together
/// with the amount-due ceiling.
#[derive(Debug, Clone, Validate)]
pub struct RecordPayment {
    pub amount: Decimal,
    #[validate(length(min = 1, max = 50))]
    pub payment_method: String,
    pub payment_reference: Option<String>,
    pub payment_date: NaiveDate,
    pub notes: Option<String>,
}
