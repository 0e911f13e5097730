//! Swiss VAT (TVA) computation.

use crate::models::{
    InvoiceTotals, LineItem, TaxCategory, TaxContext, TaxGroup, TaxRate, TvaComputation,
};
use crate::services::pricing;
use billing_core::config::BillingConfig;
use billing_core::error::BillingError;
use billing_core::money::{format_amount, round_2dp};
use rust_decimal::Decimal;
use tracing::{debug, instrument};

/// VAT calculator over an immutable billing configuration.
#[derive(Debug, Clone)]
pub struct TvaCalculator<'a> {
    config: &'a BillingConfig,
}

impl<'a> TvaCalculator<'a> {
    pub fn new(config: &'a BillingConfig) -> Self {
        Self { config }
    }

    /// Resolve the rate applicable to a category under a context.
    pub fn resolve_rate(
        &self,
        category: TaxCategory,
        ctx: &TaxContext,
    ) -> Result<TaxRate, BillingError> {
        let rate = self
            .config
            .rate_for(&ctx.canton, category.as_str(), ctx.as_of)?;
        let label = self.config.canton(&ctx.canton)?.tax_label.clone();
        Ok(TaxRate {
            category,
            rate,
            label,
        })
    }

    /// Compute VAT on a single net amount.
    #[instrument(skip(self, ctx), fields(canton = %ctx.canton, category = category.as_str()))]
    pub fn calculate(
        &self,
        net_amount: Decimal,
        category: TaxCategory,
        ctx: &TaxContext,
    ) -> Result<TvaComputation, BillingError> {
        if net_amount < Decimal::ZERO {
            return Err(BillingError::InvalidAmount(anyhow::anyhow!(
                "Net amount must not be negative, got {}",
                net_amount
            )));
        }

        // The small-business exemption overrides the category rate.
        if let Some(reason) = self.revenue_exemption(ctx) {
            debug!(net_amount = %net_amount, "Revenue below threshold, forcing zero rate");
            return Ok(TvaComputation {
                net_amount,
                rate: Decimal::ZERO,
                tax_amount: Decimal::ZERO,
                gross_amount: net_amount,
                is_exempt: true,
                exemption_reason: Some(reason),
            });
        }

        let resolved = self.resolve_rate(category, ctx)?;
        let tax_amount = round_2dp(net_amount * resolved.rate / Decimal::ONE_HUNDRED);
        let gross_amount = net_amount + tax_amount;

        Ok(TvaComputation {
            net_amount,
            rate: resolved.rate,
            tax_amount,
            gross_amount,
            is_exempt: false,
            exemption_reason: None,
        })
    }

    /// Aggregate totals for a set of line items, grouped by tax category.
    ///
    /// Each line's tax is rounded to the cent before summing, so
    /// `gross_total == net_total + total_tax` holds exactly. The 5-centime
    /// cash rounding only surfaces in `rounded_total` and its adjustment.
    #[instrument(skip(self, items, ctx), fields(canton = %ctx.canton, items = items.len()))]
    pub fn calculate_invoice(
        &self,
        items: &[LineItem],
        ctx: &TaxContext,
    ) -> Result<InvoiceTotals, BillingError> {
        let canton_label = self.config.canton(&ctx.canton)?.tax_label.clone();

        let mut groups: Vec<TaxGroup> = Vec::new();
        let mut is_exempt = false;
        let mut exemption_reason = None;

        for item in items {
            let net = pricing::line_net(item)?;
            let computed = self.calculate(net, item.tax_category, ctx)?;

            if computed.is_exempt {
                // When several items are exempt the last one computed wins.
                is_exempt = true;
                exemption_reason = computed.exemption_reason.clone();
            }

            match groups.iter_mut().find(|g| g.category == item.tax_category) {
                Some(group) => {
                    group.net += computed.net_amount;
                    group.tax += computed.tax_amount;
                }
                None => {
                    groups.push(TaxGroup {
                        category: item.tax_category,
                        rate: computed.rate,
                        label: format!("{} {}%", canton_label, format_amount(&computed.rate)),
                        net: computed.net_amount,
                        tax: computed.tax_amount,
                    });
                }
            }
        }

        let net_total: Decimal = groups.iter().map(|g| g.net).sum();
        let total_tax: Decimal = groups.iter().map(|g| g.tax).sum();
        let gross_total = net_total + total_tax;
        let rounded_total = ctx.currency.round_cash(gross_total);

        Ok(InvoiceTotals {
            net_total,
            tax_breakdown: groups,
            total_tax,
            gross_total,
            rounded_total,
            rounding_adjustment: rounded_total - gross_total,
            is_exempt,
            exemption_reason,
        })
    }

    fn revenue_exemption(&self, ctx: &TaxContext) -> Option<String> {
        let revenue = ctx.annual_revenue?;
        if revenue < self.config.exemption_threshold {
            Some(format!(
                "VAT-exempt under art. 10 LTVA: annual revenue {} below {} CHF",
                format_amount(&revenue),
                format_amount(&self.config.exemption_threshold)
            ))
        } else {
            None
        }
    }
}
