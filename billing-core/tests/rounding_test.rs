//! Rounding behavior tests for billing-core.

use billing_core::money::{Currency, format_amount, round_2dp, round_cash_5};
use rust_decimal_macros::dec;

#[test]
fn round_cash_5_rounds_to_nearest_five_centimes() {
    assert_eq!(round_cash_5(dec!(2.62)), dec!(2.60));
    assert_eq!(round_cash_5(dec!(2.63)), dec!(2.65));
    assert_eq!(round_cash_5(dec!(2.67)), dec!(2.65));
    assert_eq!(round_cash_5(dec!(2.68)), dec!(2.70));
    assert_eq!(round_cash_5(dec!(0.02)), dec!(0.00));
    assert_eq!(round_cash_5(dec!(0.03)), dec!(0.05));
}

#[test]
fn round_cash_5_midpoint_rounds_away_from_zero() {
    assert_eq!(round_cash_5(dec!(2.025)), dec!(2.05));
    assert_eq!(round_cash_5(dec!(-2.025)), dec!(-2.05));
}

#[test]
fn round_cash_5_is_idempotent() {
    for amount in [
        dec!(0),
        dec!(0.01),
        dec!(0.025),
        dec!(1.97),
        dec!(2.675),
        dec!(99.99),
        dec!(162.15),
        dec!(-13.37),
    ] {
        let once = round_cash_5(amount);
        assert_eq!(round_cash_5(once), once, "not idempotent for {}", amount);
    }
}

#[test]
fn round_cash_5_preserves_exact_boundaries() {
    assert_eq!(round_cash_5(dec!(162.15)), dec!(162.15));
    assert_eq!(round_cash_5(dec!(100.00)), dec!(100.00));
    assert_eq!(round_cash_5(dec!(0.05)), dec!(0.05));
}

#[test]
fn round_2dp_rounds_midpoint_away_from_zero() {
    assert_eq!(round_2dp(dec!(12.344)), dec!(12.34));
    assert_eq!(round_2dp(dec!(12.345)), dec!(12.35));
    assert_eq!(round_2dp(dec!(-12.345)), dec!(-12.35));
    assert_eq!(round_2dp(dec!(2.673)), dec!(2.67));
}

#[test]
fn chf_uses_cash_rounding_other_currencies_do_not() {
    assert_eq!(Currency::Chf.round_cash(dec!(2.675)), dec!(2.70));
    assert_eq!(Currency::Eur.round_cash(dec!(2.675)), dec!(2.68));
    assert_eq!(Currency::Usd.round_cash(dec!(2.673)), dec!(2.67));
}

#[test]
fn format_amount_normalizes_trailing_zeros() {
    assert_eq!(format_amount(&dec!(8.10)), "8.1");
    assert_eq!(format_amount(&dec!(150)), "150");
    assert_eq!(format_amount(&dec!(0.00)), "0");
    assert_eq!(format_amount(&dec!(12.15)), "12.15");
}
