//! Shared error and result types for the pricing core

use uuid::Uuid;

/// Errors raised by the fallible surfaces of the pricing core.
///
/// The calculation and formatting functions never fail; these variants come
/// from boundary validation, draft editing, rate validation and settings
/// loading.
#[derive(Debug, thiserror::Error)]
pub enum PricingError {
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("Invalid GST rate: {0}")]
    InvalidRate(String),
    #[error("Quote line not found: {0}")]
    LineNotFound(Uuid),
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

/// Result type for pricing operations
pub type PricingResult<T> = Result<T, PricingError>;
