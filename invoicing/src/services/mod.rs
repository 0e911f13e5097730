//! Calculation services for the invoicing crate.

pub mod invoices;
pub mod pricing;
pub mod tva;

pub use invoices::InvoiceService;
pub use tva::TvaCalculator;
