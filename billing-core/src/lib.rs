//! billing-core: Shared foundation for the SimpliFaq billing crates.
pub mod config;
pub mod error;
pub mod money;
pub mod observability;

pub use anyhow;
pub use rust_decimal;
pub use serde;
pub use serde_json;
pub use tracing;
pub use validator;
