use crate::error::BillingError;
use crate::money::Currency;
use chrono::NaiveDate;
use config::{Config as Cfg, File};
use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::HashMap;

/// Billing configuration: exemption threshold and per-canton VAT rate tables.
///
/// Loaded once at startup and passed to the calculators by reference;
/// immutable afterwards.
#[derive(Debug, Deserialize, Clone)]
pub struct BillingConfig {
    #[serde(default = "default_currency")]
    pub currency: Currency,
    #[serde(default = "default_canton")]
    pub default_canton: String,
    /// Annual revenue (CHF) below which a biller is exempt from charging VAT.
    #[serde(default = "default_exemption_threshold")]
    pub exemption_threshold: Decimal,
    #[serde(default = "default_cantons")]
    pub cantons: HashMap<String, CantonRates>,
}

/// Rate table for one canton.
///
/// Rates are federally fixed; the per-canton entry carries the localized
/// label printed on invoice tax lines.
#[derive(Debug, Deserialize, Clone)]
pub struct CantonRates {
    pub name: String,
    /// Label for tax breakdown lines (TVA in Romandy, MWST elsewhere).
    pub tax_label: String,
    pub periods: Vec<RatePeriod>,
}

/// One effective-dated set of percent rates, keyed by tax category.
///
/// Periods within a canton must not overlap, so any category resolves to at
/// most one rate for a given date.
#[derive(Debug, Deserialize, Clone)]
pub struct RatePeriod {
    pub effective_from: NaiveDate,
    #[serde(default)]
    pub effective_to: Option<NaiveDate>,
    pub rates: HashMap<String, Decimal>,
}

impl RatePeriod {
    fn covers(&self, as_of: NaiveDate) -> bool {
        self.effective_from <= as_of && self.effective_to.is_none_or(|to| to >= as_of)
    }
}

impl CantonRates {
    /// Resolve the percent rate for a category at a date, if configured.
    pub fn rate_for(&self, category: &str, as_of: NaiveDate) -> Option<Decimal> {
        self.periods
            .iter()
            .find(|p| p.covers(as_of))
            .and_then(|p| p.rates.get(category).copied())
    }
}

impl BillingConfig {
    /// Load configuration from an optional `billing` file plus `APP__`
    /// environment overrides, falling back to the built-in Swiss table.
    pub fn load() -> Result<Self, BillingError> {
        dotenvy::dotenv().ok();

        let config = Cfg::builder()
            .add_source(File::with_name("billing").required(false))
            .add_source(config::Environment::with_prefix("APP").separator("__"))
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Rate table for a canton code.
    pub fn canton(&self, code: &str) -> Result<&CantonRates, BillingError> {
        self.cantons.get(code).ok_or_else(|| {
            BillingError::UnknownCanton(anyhow::anyhow!("No rate table for canton '{}'", code))
        })
    }

    /// Resolve the percent rate for a category in a canton at a date.
    pub fn rate_for(
        &self,
        canton: &str,
        category: &str,
        as_of: NaiveDate,
    ) -> Result<Decimal, BillingError> {
        let rates = self.canton(canton)?;
        rates.rate_for(category, as_of).ok_or_else(|| {
            BillingError::RateNotFound(anyhow::anyhow!(
                "No '{}' rate configured for canton '{}' on {}",
                category,
                canton,
                as_of
            ))
        })
    }
}

impl Default for BillingConfig {
    fn default() -> Self {
        Self {
            currency: default_currency(),
            default_canton: default_canton(),
            exemption_threshold: default_exemption_threshold(),
            cantons: default_cantons(),
        }
    }
}

fn default_currency() -> Currency {
    Currency::Chf
}

fn default_canton() -> String {
    "VD".to_string()
}

fn default_exemption_threshold() -> Decimal {
    Decimal::from(100_000)
}

fn default_cantons() -> HashMap<String, CantonRates> {
    SWISS_CANTONS.clone()
}

/// Built-in federal rate history: the 2018 rates and the 2024 revision.
static SWISS_CANTONS: Lazy<HashMap<String, CantonRates>> = Lazy::new(|| {
    let cantons = [
        ("VD", "Vaud", "TVA"),
        ("GE", "Genève", "TVA"),
        ("ZH", "Zürich", "MWST"),
        ("BE", "Bern", "MWST"),
    ];

    cantons
        .into_iter()
        .map(|(code, name, tax_label)| {
            (
                code.to_string(),
                CantonRates {
                    name: name.to_string(),
                    tax_label: tax_label.to_string(),
                    periods: federal_periods(),
                },
            )
        })
        .collect()
});

fn federal_periods() -> Vec<RatePeriod> {
    vec![
        RatePeriod {
            effective_from: NaiveDate::from_ymd_opt(2018, 1, 1).unwrap(),
            effective_to: NaiveDate::from_ymd_opt(2023, 12, 31),
            rates: rate_set(
                Decimal::new(77, 1),
                Decimal::new(25, 1),
                Decimal::new(37, 1),
            ),
        },
        RatePeriod {
            effective_from: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            effective_to: None,
            rates: rate_set(
                Decimal::new(81, 1),
                Decimal::new(26, 1),
                Decimal::new(38, 1),
            ),
        },
    ]
}

fn rate_set(standard: Decimal, reduced: Decimal, special: Decimal) -> HashMap<String, Decimal> {
    HashMap::from([
        ("standard".to_string(), standard),
        ("reduced".to_string(), reduced),
        ("special".to_string(), special),
        ("exempt".to_string(), Decimal::ZERO),
        ("not_subject".to_string(), Decimal::ZERO),
    ])
}
