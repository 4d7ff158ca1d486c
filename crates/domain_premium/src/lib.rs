//! Premium Rating Domain
//!
//! This crate implements the premium quote logic: it validates an untyped
//! request payload and rates it with a fixed base premium adjusted by the
//! insured's age bracket and declared risk level.
//!
//! # Flow
//!
//! ```text
//! JSON payload -> PremiumValidator -> PremiumRequest -> PremiumCalculator -> PremiumResult
//! ```
//!
//! Both steps are pure functions of their input; nothing is shared between
//! calls.
//!
//! # Example
//!
//! ```rust
//! use domain_premium::{PremiumCalculator, PremiumValidator};
//! use serde_json::json;
//!
//! let payload = json!({ "age": 45, "risk_level": "medium", "coverage": 75000 });
//! let request = PremiumValidator::validate(&payload).unwrap();
//! let result = PremiumCalculator::new().calculate(&request).unwrap();
//!
//! assert_eq!(result.final_premium.to_string(), "$1,500.00");
//! ```

pub mod calculator;
pub mod error;
pub mod rating;
pub mod request;
pub mod validation;

pub use calculator::{calculate_premium, PremiumCalculator, PremiumResult, BASE_PREMIUM};
pub use error::PremiumError;
pub use rating::{age_factor, risk_loading};
pub use request::{PremiumRequest, RiskLevel, MAX_AGE, MIN_AGE};
pub use validation::{FieldViolation, PremiumValidator, ValidationErrors, ViolationKind};

/// Validates a payload and rates it in one step
///
/// # Errors
///
/// [`PremiumError::Validation`] for a rejected payload,
/// [`PremiumError::Unexpected`] if rating a valid request fails.
pub fn quote(payload: &serde_json::Value) -> Result<PremiumResult, PremiumError> {
    let request = PremiumValidator::validate(payload)?;
    calculate_premium(&request)
}
