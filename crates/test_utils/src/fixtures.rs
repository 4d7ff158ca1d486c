//! Pre-built Test Fixtures
//!
//! Reference quote scenarios with their expected outcome, plus payload
//! builders for the common shapes used across the test suite.

use domain_premium::{PremiumRequest, RiskLevel};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::{json, Value};

/// A request together with the rating it must produce
#[derive(Debug, Clone, Copy)]
pub struct QuoteScenario {
    pub age: u32,
    pub risk_level: RiskLevel,
    pub coverage: f64,
    pub age_factor: Decimal,
    pub risk_loading: Decimal,
    pub final_premium: Decimal,
}

impl QuoteScenario {
    /// Builds the validated request for this scenario
    pub fn request(&self) -> PremiumRequest {
        PremiumRequest::new(self.age, self.risk_level, self.coverage)
            .expect("fixture scenarios are valid")
    }

    /// Builds the JSON payload for this scenario
    pub fn payload(&self) -> Value {
        premium_payload(json!(self.age), json!(self.risk_level.as_str()), json!(self.coverage))
    }
}

/// Fixture for the reference quote scenarios
pub struct QuoteFixtures;

impl QuoteFixtures {
    /// Young, low risk: no adjustment at all
    pub fn young_low_risk() -> QuoteScenario {
        QuoteScenario {
            age: 22,
            risk_level: RiskLevel::Low,
            coverage: 50000.0,
            age_factor: dec!(0.0),
            risk_loading: dec!(0.0),
            final_premium: dec!(1000.00),
        }
    }

    /// Middle-aged, medium risk
    pub fn middle_aged_medium_risk() -> QuoteScenario {
        QuoteScenario {
            age: 45,
            risk_level: RiskLevel::Medium,
            coverage: 75000.0,
            age_factor: dec!(0.25),
            risk_loading: dec!(0.20),
            final_premium: dec!(1500.00),
        }
    }

    /// Senior, high risk: both maximum adjustments
    pub fn senior_high_risk() -> QuoteScenario {
        QuoteScenario {
            age: 65,
            risk_level: RiskLevel::High,
            coverage: 200000.0,
            age_factor: dec!(0.50),
            risk_loading: dec!(0.50),
            final_premium: dec!(2250.00),
        }
    }

    /// The documented example request
    pub fn documented_example() -> QuoteScenario {
        QuoteScenario {
            age: 35,
            risk_level: RiskLevel::Medium,
            coverage: 100000.0,
            age_factor: dec!(0.10),
            risk_loading: dec!(0.20),
            final_premium: dec!(1320.00),
        }
    }

    /// All reference scenarios
    pub fn all() -> Vec<QuoteScenario> {
        vec![
            Self::young_low_risk(),
            Self::middle_aged_medium_risk(),
            Self::senior_high_risk(),
            Self::documented_example(),
        ]
    }
}

/// Builds a payload from raw JSON field values
pub fn premium_payload(age: Value, risk_level: Value, coverage: Value) -> Value {
    json!({
        "age": age,
        "risk_level": risk_level,
        "coverage": coverage,
    })
}

/// The documented example payload with one field replaced
pub fn example_payload_with(field: &str, value: Value) -> Value {
    let mut payload = QuoteFixtures::documented_example().payload();
    payload[field] = value;
    payload
}

/// The documented example payload with one field removed
pub fn example_payload_without(field: &str) -> Value {
    let mut payload = QuoteFixtures::documented_example().payload();
    if let Some(object) = payload.as_object_mut() {
        object.remove(field);
    }
    payload
}
