//! invoicing: Swiss VAT (TVA) calculation and invoice domain logic.
//!
//! Pure, synchronous business rules consumed by the form, PDF and API
//! layers: rate resolution, exemption handling, HT/TTC price conversion,
//! discount rules, invoice totals and lifecycle.
pub mod models;
pub mod services;
