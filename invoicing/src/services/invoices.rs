//! Invoice lifecycle operations.

use crate::models::{
    CreateInvoice, CreateLineItem, Invoice, InvoiceStatus, InvoiceTotals, LineItem, Receipt,
    RecordPayment, TaxContext, UpdateLineItem,
};
use crate::services::pricing;
use crate::services::tva::TvaCalculator;
use billing_core::config::BillingConfig;
use billing_core::error::BillingError;
use chrono::{Datelike, NaiveDate, Utc};
use rust_decimal::Decimal;
use tracing::{info, instrument};
use uuid::Uuid;
use validator::Validate;

/// Invoice domain operations: line-item mutation, issuing, payments.
///
/// The persistence layer owns durable storage and number sequencing; these
/// operations own the business rules and keep derived fields consistent.
pub struct InvoiceService<'a> {
    config: &'a BillingConfig,
    calculator: TvaCalculator<'a>,
}

impl<'a> InvoiceService<'a> {
    pub fn new(config: &'a BillingConfig) -> Self {
        Self {
            config,
            calculator: TvaCalculator::new(config),
        }
    }

    /// Create a draft invoice.
    #[instrument(skip(self, input), fields(customer = %input.customer_name))]
    pub fn create_invoice(&self, input: CreateInvoice) -> Result<Invoice, BillingError> {
        input.validate()?;
        self.config.canton(&input.canton)?;

        let invoice = Invoice {
            invoice_id: Uuid::new_v4(),
            invoice_number: None,
            status: InvoiceStatus::Draft,
            customer_name: input.customer_name,
            canton: input.canton,
            currency: input.currency,
            issue_date: None,
            due_date: input.due_date,
            line_items: Vec::new(),
            totals: InvoiceTotals::default(),
            amount_paid: Decimal::ZERO,
            amount_due: Decimal::ZERO,
            notes: input.notes,
            metadata: None,
            created_utc: Utc::now(),
            issued_utc: None,
            voided_utc: None,
        };

        info!(invoice_id = %invoice.invoice_id, "Invoice created");

        Ok(invoice)
    }

    /// Add a line item to a draft invoice and recompute totals.
    #[instrument(skip(self, invoice, input, ctx), fields(invoice_id = %invoice.invoice_id))]
    pub fn add_line_item(
        &self,
        invoice: &mut Invoice,
        input: CreateLineItem,
        ctx: &TaxContext,
    ) -> Result<(), BillingError> {
        input.validate()?;
        self.ensure_draft(invoice)?;

        if input.quantity <= Decimal::ZERO {
            return Err(BillingError::InvalidAmount(anyhow::anyhow!(
                "Quantity must be positive, got {}",
                input.quantity
            )));
        }
        if input.unit_price < Decimal::ZERO {
            return Err(BillingError::InvalidAmount(anyhow::anyhow!(
                "Unit price must not be negative, got {}",
                input.unit_price
            )));
        }

        invoice.line_items.push(LineItem {
            line_item_id: Uuid::new_v4(),
            description: input.description,
            quantity: input.quantity,
            unit_price: input.unit_price,
            tax_category: input.tax_category,
            discount: input.discount,
            sort_order: input.sort_order,
            subtotal: Decimal::ZERO,
            tax_amount: Decimal::ZERO,
            total: Decimal::ZERO,
        });
        invoice.line_items.sort_by_key(|i| i.sort_order);

        self.recompute(invoice, ctx)
    }

    /// Update a line item on a draft invoice and recompute totals.
    #[instrument(
        skip(self, invoice, input, ctx),
        fields(invoice_id = %invoice.invoice_id, line_item_id = %line_item_id)
    )]
    pub fn update_line_item(
        &self,
        invoice: &mut Invoice,
        line_item_id: Uuid,
        input: UpdateLineItem,
        ctx: &TaxContext,
    ) -> Result<(), BillingError> {
        input.validate()?;
        self.ensure_draft(invoice)?;

        if input.quantity.is_some_and(|q| q <= Decimal::ZERO) {
            return Err(BillingError::InvalidAmount(anyhow::anyhow!(
                "Quantity must be positive"
            )));
        }
        if input.unit_price.is_some_and(|p| p < Decimal::ZERO) {
            return Err(BillingError::InvalidAmount(anyhow::anyhow!(
                "Unit price must not be negative"
            )));
        }

        let item = invoice
            .line_items
            .iter_mut()
            .find(|i| i.line_item_id == line_item_id)
            .ok_or_else(|| BillingError::NotFound(anyhow::anyhow!("Line item not found")))?;

        if let Some(description) = input.description {
            item.description = description;
        }
        if let Some(quantity) = input.quantity {
            item.quantity = quantity;
        }
        if let Some(unit_price) = input.unit_price {
            item.unit_price = unit_price;
        }
        if let Some(tax_category) = input.tax_category {
            item.tax_category = tax_category;
        }
        if let Some(discount) = input.discount {
            item.discount = Some(discount);
        }
        if let Some(sort_order) = input.sort_order {
            item.sort_order = sort_order;
        }
        invoice.line_items.sort_by_key(|i| i.sort_order);

        self.recompute(invoice, ctx)
    }

    /// Remove a line item from a draft invoice and recompute totals.
    #[instrument(
        skip(self, invoice, ctx),
        fields(invoice_id = %invoice.invoice_id, line_item_id = %line_item_id)
    )]
    pub fn remove_line_item(
        &self,
        invoice: &mut Invoice,
        line_item_id: Uuid,
        ctx: &TaxContext,
    ) -> Result<bool, BillingError> {
        self.ensure_draft(invoice)?;

        let before = invoice.line_items.len();
        invoice.line_items.retain(|i| i.line_item_id != line_item_id);
        if invoice.line_items.len() == before {
            return Ok(false);
        }

        self.recompute(invoice, ctx)?;
        Ok(true)
    }

    /// Issue a draft invoice, assigning its number and dates.
    #[instrument(skip(self, invoice), fields(invoice_id = %invoice.invoice_id))]
    pub fn issue(
        &self,
        invoice: &mut Invoice,
        issue_date: NaiveDate,
        due_date: NaiveDate,
        sequence: u32,
    ) -> Result<(), BillingError> {
        if invoice.status != InvoiceStatus::Draft {
            return Err(BillingError::BadRequest(anyhow::anyhow!(
                "Only draft invoices can be issued, status is '{}'",
                invoice.status.as_str()
            )));
        }
        if invoice.line_items.is_empty() {
            return Err(BillingError::BadRequest(anyhow::anyhow!(
                "Cannot issue an invoice without line items"
            )));
        }

        let number = format!("FAC-{}-{:04}", issue_date.year(), sequence);
        invoice.invoice_number = Some(number.clone());
        invoice.status = InvoiceStatus::Issued;
        invoice.issue_date = Some(issue_date);
        invoice.due_date = Some(due_date);
        invoice.issued_utc = Some(Utc::now());
        // Payments settle against the cash-rounded payable.
        invoice.amount_due = invoice.totals.rounded_total;

        info!(
            invoice_number = %number,
            total = %invoice.totals.rounded_total,
            "Invoice issued"
        );

        Ok(())
    }

    /// Record a payment against an issued invoice.
    #[instrument(skip(self, invoice, input), fields(invoice_id = %invoice.invoice_id))]
    pub fn record_payment(
        &self,
        invoice: &mut Invoice,
        input: RecordPayment,
        sequence: u32,
    ) -> Result<Receipt, BillingError> {
        input.validate()?;

        if input.amount <= Decimal::ZERO {
            return Err(BillingError::InvalidAmount(anyhow::anyhow!(
                "Payment amount must be positive, got {}",
                input.amount
            )));
        }
        if invoice.status != InvoiceStatus::Issued {
            return Err(BillingError::BadRequest(anyhow::anyhow!(
                "Can only record payments against issued invoices"
            )));
        }
        if input.amount > invoice.amount_due {
            return Err(BillingError::BadRequest(anyhow::anyhow!(
                "Payment amount {} exceeds amount due {}",
                input.amount,
                invoice.amount_due
            )));
        }

        invoice.amount_paid += input.amount;
        invoice.amount_due -= input.amount;
        if invoice.amount_due == Decimal::ZERO {
            invoice.status = InvoiceStatus::Paid;
        }

        let receipt = Receipt {
            receipt_id: Uuid::new_v4(),
            receipt_number: format!("REC-{}-{:04}", input.payment_date.year(), sequence),
            invoice_id: invoice.invoice_id,
            amount: input.amount,
            currency: invoice.currency,
            payment_method: input.payment_method,
            payment_reference: input.payment_reference,
            payment_date: input.payment_date,
            notes: input.notes,
            created_utc: Utc::now(),
        };

        info!(
            receipt_number = %receipt.receipt_number,
            amount = %receipt.amount,
            "Payment recorded"
        );

        Ok(receipt)
    }

    /// Void an issued invoice.
    #[instrument(skip(self, invoice), fields(invoice_id = %invoice.invoice_id))]
    pub fn void(&self, invoice: &mut Invoice) -> Result<(), BillingError> {
        if invoice.status != InvoiceStatus::Issued {
            return Err(BillingError::BadRequest(anyhow::anyhow!(
                "Only issued invoices can be voided, status is '{}'",
                invoice.status.as_str()
            )));
        }

        invoice.status = InvoiceStatus::Void;
        invoice.voided_utc = Some(Utc::now());

        info!("Invoice voided");

        Ok(())
    }

    /// Effective status, surfacing overdue issued invoices.
    pub fn effective_status(&self, invoice: &Invoice, as_of: NaiveDate) -> InvoiceStatus {
        if invoice.status == InvoiceStatus::Issued {
            if let Some(due_date) = invoice.due_date {
                if due_date < as_of && invoice.amount_due > Decimal::ZERO {
                    return InvoiceStatus::Overdue;
                }
            }
        }
        invoice.status
    }

    fn ensure_draft(&self, invoice: &Invoice) -> Result<(), BillingError> {
        if invoice.status != InvoiceStatus::Draft {
            return Err(BillingError::InvoiceFinalized(anyhow::anyhow!(
                "Line items can only change on draft invoices, status is '{}'",
                invoice.status.as_str()
            )));
        }
        Ok(())
    }

    /// Recompute derived line fields and invoice totals.
    fn recompute(&self, invoice: &mut Invoice, ctx: &TaxContext) -> Result<(), BillingError> {
        for item in &mut invoice.line_items {
            let net = pricing::line_net(item)?;
            let computed = self.calculator.calculate(net, item.tax_category, ctx)?;
            item.subtotal = computed.net_amount;
            item.tax_amount = computed.tax_amount;
            item.total = computed.gross_amount;
        }
        invoice.totals = self.calculator.calculate_invoice(&invoice.line_items, ctx)?;
        Ok(())
    }
}
