//! Premium DTOs

use std::collections::BTreeMap;

use domain_premium::PremiumResult;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Successful premium quote
///
/// Monetary amounts and factors are written as JSON numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PremiumResponse {
    #[serde(with = "rust_decimal::serde::float")]
    pub base_premium: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub age_factor: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub risk_loading: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub final_premium: Decimal,
    pub coverage: f64,
    pub breakdown: String,
}

impl From<PremiumResult> for PremiumResponse {
    fn from(result: PremiumResult) -> Self {
        Self {
            base_premium: result.base_premium.amount(),
            age_factor: result.age_factor.as_decimal(),
            risk_loading: result.risk_loading.as_decimal(),
            final_premium: result.final_premium.amount(),
            coverage: result.coverage,
            breakdown: result.breakdown,
        }
    }
}

/// Service description returned from the root path
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceInfoResponse {
    pub message: String,
    pub version: String,
    pub docs: String,
    pub endpoints: BTreeMap<String, String>,
}
