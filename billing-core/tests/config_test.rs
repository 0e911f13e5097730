//! Rate table configuration tests for billing-core.

use billing_core::config::BillingConfig;
use billing_core::error::BillingError;
use billing_core::money::Currency;
use chrono::NaiveDate;
use rust_decimal_macros::dec;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn default_config_carries_swiss_defaults() {
    let config = BillingConfig::default();

    assert_eq!(config.currency, Currency::Chf);
    assert_eq!(config.default_canton, "VD");
    assert_eq!(config.exemption_threshold, dec!(100000));
    assert_eq!(config.cantons.len(), 4);
    for code in ["VD", "GE", "ZH", "BE"] {
        assert!(config.cantons.contains_key(code), "missing canton {}", code);
    }
}

#[test]
fn rate_for_resolves_current_rates() {
    let config = BillingConfig::default();
    let as_of = date(2025, 6, 1);

    assert_eq!(config.rate_for("VD", "standard", as_of).unwrap(), dec!(8.1));
    assert_eq!(config.rate_for("VD", "reduced", as_of).unwrap(), dec!(2.6));
    assert_eq!(config.rate_for("VD", "special", as_of).unwrap(), dec!(3.8));
}

#[test]
fn rate_for_resolves_pre_2024_rates() {
    let config = BillingConfig::default();
    let as_of = date(2023, 6, 1);

    assert_eq!(config.rate_for("VD", "standard", as_of).unwrap(), dec!(7.7));
    assert_eq!(config.rate_for("VD", "reduced", as_of).unwrap(), dec!(2.5));
    assert_eq!(config.rate_for("VD", "special", as_of).unwrap(), dec!(3.7));
}

#[test]
fn rate_change_boundary_is_exact() {
    let config = BillingConfig::default();

    assert_eq!(
        config.rate_for("GE", "standard", date(2023, 12, 31)).unwrap(),
        dec!(7.7)
    );
    assert_eq!(
        config.rate_for("GE", "standard", date(2024, 1, 1)).unwrap(),
        dec!(8.1)
    );
}

#[test]
fn sample_cantons_share_rates_with_localized_labels() {
    let config = BillingConfig::default();
    let as_of = date(2025, 1, 1);

    for code in ["VD", "GE", "ZH", "BE"] {
        assert_eq!(
            config.rate_for(code, "standard", as_of).unwrap(),
            dec!(8.1),
            "standard rate differs in {}",
            code
        );
    }
    assert_eq!(config.canton("VD").unwrap().tax_label, "TVA");
    assert_eq!(config.canton("ZH").unwrap().tax_label, "MWST");
}

#[test]
fn exempt_categories_carry_zero_rate() {
    let config = BillingConfig::default();
    let as_of = date(2025, 1, 1);

    assert_eq!(config.rate_for("VD", "exempt", as_of).unwrap(), dec!(0));
    assert_eq!(config.rate_for("VD", "not_subject", as_of).unwrap(), dec!(0));
}

#[test]
fn unknown_canton_returns_error() {
    let config = BillingConfig::default();

    let err = config
        .rate_for("XX", "standard", date(2025, 1, 1))
        .unwrap_err();
    assert!(matches!(err, BillingError::UnknownCanton(_)));
}

#[test]
fn date_before_first_period_returns_error() {
    let config = BillingConfig::default();

    let err = config
        .rate_for("VD", "standard", date(2017, 6, 1))
        .unwrap_err();
    assert!(matches!(err, BillingError::RateNotFound(_)));
}

#[test]
fn unknown_category_returns_error() {
    let config = BillingConfig::default();

    let err = config
        .rate_for("VD", "luxury", date(2025, 1, 1))
        .unwrap_err();
    assert!(matches!(err, BillingError::RateNotFound(_)));
}
