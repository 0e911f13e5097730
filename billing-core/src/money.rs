//! Monetary rounding and currency handling.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Invoice currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Chf,
    Eur,
    Usd,
}

impl Currency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Currency::Chf => "CHF",
            Currency::Eur => "EUR",
            Currency::Usd => "USD",
        }
    }

    pub fn from_string(s: &str) -> Self {
        match s {
            "EUR" => Currency::Eur,
            "USD" => Currency::Usd,
            _ => Currency::Chf,
        }
    }

    /// Round an amount to the smallest settleable unit of this currency.
    ///
    /// CHF follows the 5-centime cash rounding convention; other currencies
    /// round to the cent.
    pub fn round_cash(&self, amount: Decimal) -> Decimal {
        match self {
            Currency::Chf => round_cash_5(amount),
            _ => round_2dp(amount),
        }
    }
}

/// Round to two decimal places, midpoint away from zero.
pub fn round_2dp(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Round to the nearest 0.05 (Swiss cash rounding).
///
/// Idempotent: a value already on a 5-centime boundary is returned as is.
pub fn round_cash_5(amount: Decimal) -> Decimal {
    let twenty = Decimal::from(20);
    (amount * twenty).round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero) / twenty
}

/// Format a Decimal as a normalized string.
pub fn format_amount(d: &Decimal) -> String {
    let s = d.to_string();
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s
    }
}
