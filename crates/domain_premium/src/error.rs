//! Premium domain errors

use core_kernel::MoneyError;
use thiserror::Error;

use crate::validation::ValidationErrors;

/// Errors that can occur while quoting a premium
#[derive(Debug, Error)]
pub enum PremiumError {
    /// The payload failed validation; carries every offending field
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    /// Calculation failed on a validated request. Indicates a defect.
    #[error("{0}")]
    Unexpected(String),
}

impl PremiumError {
    /// Creates an unexpected error
    pub fn unexpected(message: impl Into<String>) -> Self {
        PremiumError::Unexpected(message.into())
    }
}

impl From<MoneyError> for PremiumError {
    fn from(err: MoneyError) -> Self {
        PremiumError::Unexpected(err.to_string())
    }
}
