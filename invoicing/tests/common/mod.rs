use billing_core::config::BillingConfig;
use billing_core::money::Currency;
use chrono::NaiveDate;
use invoicing::models::{CreateInvoice, CreateLineItem, LineItem, TaxCategory, TaxContext};
use rust_decimal::Decimal;
use uuid::Uuid;

pub fn config() -> BillingConfig {
    BillingConfig::default()
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Context for canton Vaud on a fixed post-2024 date.
pub fn ctx() -> TaxContext {
    TaxContext::new("VD", date(2025, 3, 1), Currency::Chf)
}

/// Line item with derived fields zeroed, quantity one.
pub fn item(description: &str, unit_price: Decimal, category: TaxCategory) -> LineItem {
    LineItem {
        line_item_id: Uuid::new_v4(),
        description: description.to_string(),
        quantity: Decimal::ONE,
        unit_price,
        tax_category: category,
        discount: None,
        sort_order: 0,
        subtotal: Decimal::ZERO,
        tax_amount: Decimal::ZERO,
        total: Decimal::ZERO,
    }
}

/// Line item input with quantity one and no discount.
pub fn line_input(description: &str, unit_price: Decimal, category: TaxCategory) -> CreateLineItem {
    CreateLineItem {
        description: description.to_string(),
        quantity: Decimal::ONE,
        unit_price,
        tax_category: category,
        discount: None,
        sort_order: 0,
    }
}

/// Draft invoice input for the demo customer.
pub fn invoice_input() -> CreateInvoice {
    CreateInvoice {
        customer_name: "Chocolaterie Suisse SA".to_string(),
        canton: "VD".to_string(),
        currency: Currency::Chf,
        due_date: None,
        notes: None,
    }
}
