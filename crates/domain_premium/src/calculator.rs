//! Premium calculation
//!
//! ```text
//! final premium = base × (1 + age factor) × (1 + risk loading)
//! ```
//!
//! The product is computed exactly in decimal and rounded once, half away
//! from zero, to two decimal places.

use core_kernel::{Currency, Money, Rate};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::PremiumError;
use crate::rating;
use crate::request::PremiumRequest;

/// Base premium before any adjustment
pub const BASE_PREMIUM: Decimal = dec!(1000.00);

/// Currency every premium is quoted in
pub const PREMIUM_CURRENCY: Currency = Currency::USD;

/// Decimal places of the final premium
pub const PREMIUM_DECIMAL_PLACES: u32 = 2;

/// The outcome of rating a single request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PremiumResult {
    /// Unadjusted base premium
    pub base_premium: Money,
    /// Factor from the insured's age bracket
    pub age_factor: Rate,
    /// Loading from the declared risk level
    pub risk_loading: Rate,
    /// Adjusted premium, rounded to two decimal places
    pub final_premium: Money,
    /// Requested coverage, echoed unchanged
    pub coverage: f64,
    /// The formula with resolved values substituted
    pub breakdown: String,
}

/// Rates premium requests
///
/// Stateless; a single instance can serve any number of concurrent callers.
#[derive(Debug, Clone, Copy, Default)]
pub struct PremiumCalculator;

impl PremiumCalculator {
    /// Creates a new calculator
    pub fn new() -> Self {
        Self
    }

    /// Calculates the premium for a validated request
    ///
    /// # Errors
    ///
    /// Returns [`PremiumError::Unexpected`] if the decimal arithmetic
    /// overflows, which no validated request can cause.
    ///
    /// # Example
    ///
    /// ```rust
    /// use domain_premium::{PremiumCalculator, PremiumRequest, RiskLevel};
    /// use rust_decimal_macros::dec;
    ///
    /// let request = PremiumRequest::new(35, RiskLevel::Medium, 100000.0).unwrap();
    /// let result = PremiumCalculator::new().calculate(&request).unwrap();
    /// assert_eq!(result.final_premium.amount(), dec!(1320.00));
    /// ```
    pub fn calculate(&self, request: &PremiumRequest) -> Result<PremiumResult, PremiumError> {
        let base = Money::new(BASE_PREMIUM, PREMIUM_CURRENCY);
        let age_factor = rating::age_factor(request.age());
        let risk_loading = rating::risk_loading(request.risk_level());

        let aged = age_factor.load(&base)?;
        let final_premium = risk_loading
            .load(&aged)?
            .round_half_up(PREMIUM_DECIMAL_PLACES);

        tracing::debug!(
            age = request.age(),
            risk_level = %request.risk_level(),
            age_factor = %age_factor,
            risk_loading = %risk_loading,
            final_premium = %final_premium.amount(),
            "premium calculated"
        );

        Ok(PremiumResult {
            base_premium: base,
            age_factor,
            risk_loading,
            final_premium,
            coverage: request.coverage(),
            breakdown: breakdown(&base, age_factor, risk_loading, &final_premium),
        })
    }
}

/// Calculates the premium for a validated request with the default calculator
pub fn calculate_premium(request: &PremiumRequest) -> Result<PremiumResult, PremiumError> {
    PremiumCalculator::new().calculate(request)
}

/// Renders e.g. `Base: $1,000.00 × (1 + 0.10) × (1 + 0.20) = $1,320.00`
fn breakdown(base: &Money, age_factor: Rate, risk_loading: Rate, final_premium: &Money) -> String {
    format!(
        "Base: {} × (1 + {}) × (1 + {}) = {}",
        base, age_factor, risk_loading, final_premium
    )
}
