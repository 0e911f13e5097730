use thiserror::Error;

#[derive(Debug, Error)]
pub enum BillingError {
    #[error("Validation error: {0}")]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("Invalid amount: {0}")]
    InvalidAmount(anyhow::Error),

    #[error("Rate not found: {0}")]
    RateNotFound(anyhow::Error),

    #[error("Unknown canton: {0}")]
    UnknownCanton(anyhow::Error),

    #[error("Invalid discount: {0}")]
    InvalidDiscount(anyhow::Error),

    #[error("Invoice finalized: {0}")]
    InvoiceFinalized(anyhow::Error),

    #[error("Bad request: {0}")]
    BadRequest(anyhow::Error),

    #[error("Not found: {0}")]
    NotFound(anyhow::Error),

    #[error("Configuration error: {0}")]
    ConfigError(anyhow::Error),
}

impl From<config::ConfigError> for BillingError {
    fn from(err: config::ConfigError) -> Self {
        BillingError::ConfigError(anyhow::Error::new(err))
    }
}
