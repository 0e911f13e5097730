//! Price conversion and discount application.

use crate::models::{DiscountKind, DiscountRule, LineItem, PriceMode, Product};
use billing_core::error::BillingError;
use billing_core::money::{Currency, round_2dp};
use rust_decimal::Decimal;

/// HT and TTC forms of one displayed price.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayPrice {
    pub ht: Decimal,
    pub ttc: Decimal,
}

/// Convert a tax-inclusive (TTC) amount to its tax-exclusive (HT) form.
pub fn ttc_to_ht(gross: Decimal, rate: Decimal, currency: Currency) -> Decimal {
    let net = gross / (Decimal::ONE + rate / Decimal::ONE_HUNDRED);
    currency.round_cash(net)
}

/// Convert a tax-exclusive (HT) amount to its tax-inclusive (TTC) form.
pub fn ht_to_ttc(net: Decimal, rate: Decimal, currency: Currency) -> Decimal {
    let gross = net * (Decimal::ONE + rate / Decimal::ONE_HUNDRED);
    currency.round_cash(gross)
}

/// Both displayed forms of a price entered in `mode`.
///
/// The price form recomputes this whenever the amount, the rate or the mode
/// changes. The entered amount itself is kept as typed; only the derived
/// counterpart is cash-rounded.
pub fn display_price(
    amount: Decimal,
    mode: PriceMode,
    rate: Decimal,
    currency: Currency,
) -> DisplayPrice {
    match mode {
        PriceMode::Ht => DisplayPrice {
            ht: amount,
            ttc: ht_to_ttc(amount, rate, currency),
        },
        PriceMode::Ttc => DisplayPrice {
            ht: ttc_to_ht(amount, rate, currency),
            ttc: amount,
        },
    }
}

/// Apply a discount rule to a base amount.
pub fn apply_discount(base: Decimal, rule: &DiscountRule) -> Result<Decimal, BillingError> {
    if !rule.active {
        return Ok(base);
    }

    match rule.kind {
        DiscountKind::Percent => {
            if rule.value < Decimal::ZERO || rule.value > Decimal::ONE_HUNDRED {
                return Err(BillingError::InvalidDiscount(anyhow::anyhow!(
                    "Percent discount must be between 0 and 100, got {}",
                    rule.value
                )));
            }
            Ok(round_2dp(
                base * (Decimal::ONE - rule.value / Decimal::ONE_HUNDRED),
            ))
        }
        DiscountKind::Amount => {
            if rule.value < Decimal::ZERO || rule.value > base {
                return Err(BillingError::InvalidDiscount(anyhow::anyhow!(
                    "Amount discount {} exceeds base price {}",
                    rule.value,
                    base
                )));
            }
            Ok(base - rule.value)
        }
    }
}

/// Net amount of a line: quantity times unit price, less any discount.
pub fn line_net(item: &LineItem) -> Result<Decimal, BillingError> {
    let subtotal = item.quantity * item.unit_price;
    match &item.discount {
        Some(rule) => apply_discount(round_2dp(subtotal), rule),
        None => Ok(round_2dp(subtotal)),
    }
}

/// HT unit price of a product after its discount, whatever its entry mode.
pub fn effective_unit_price(
    product: &Product,
    rate: Decimal,
    currency: Currency,
) -> Result<Decimal, BillingError> {
    let base = match &product.discount {
        Some(rule) => apply_discount(product.unit_price, rule)?,
        None => product.unit_price,
    };

    Ok(match product.price_mode {
        PriceMode::Ht => base,
        PriceMode::Ttc => ttc_to_ht(base, rate, currency),
    })
}
