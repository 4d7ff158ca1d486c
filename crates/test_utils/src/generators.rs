//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating random premium requests,
//! both inside and outside the accepted input space.

use domain_premium::{PremiumRequest, RiskLevel, MAX_AGE};
use proptest::prelude::*;
use serde_json::{json, Value};

/// Strategy for generating every risk level
pub fn risk_level_strategy() -> impl Strategy<Value = RiskLevel> {
    prop_oneof![
        Just(RiskLevel::Low),
        Just(RiskLevel::Medium),
        Just(RiskLevel::High),
    ]
}

/// Strategy for generating insurable ages
pub fn valid_age_strategy() -> impl Strategy<Value = u32> {
    0u32..=MAX_AGE
}

/// Strategy for generating ages above the insurable range
pub fn excessive_age_strategy() -> impl Strategy<Value = i64> {
    (i64::from(MAX_AGE) + 1)..100_000i64
}

/// Strategy for generating negative ages
pub fn negative_age_strategy() -> impl Strategy<Value = i64> {
    -100_000i64..0i64
}

/// Strategy for generating positive coverage amounts, from fractions of a
/// cent up to amounts no decimal type can hold
pub fn coverage_strategy() -> impl Strategy<Value = f64> {
    prop_oneof![
        (1i64..10_000_000_000i64).prop_map(|cents| cents as f64 / 100.0),
        (-30i32..=300i32).prop_map(|exponent| 10f64.powi(exponent)),
    ]
}

/// Strategy for generating coverage amounts that must be rejected
pub fn non_positive_coverage_strategy() -> impl Strategy<Value = i64> {
    -10_000_000i64..=0i64
}

/// Strategy for generating validated requests
pub fn premium_request_strategy() -> impl Strategy<Value = PremiumRequest> {
    (valid_age_strategy(), risk_level_strategy(), coverage_strategy()).prop_map(
        |(age, risk_level, coverage)| {
            PremiumRequest::new(age, risk_level, coverage).expect("generated request is valid")
        },
    )
}

/// Strategy for generating risk level strings outside the enumeration
pub fn unknown_risk_level_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z]{1,12}".prop_filter("must not name a risk level", |s| {
        s.parse::<RiskLevel>().is_err()
    })
}

/// Strategy for generating JSON values that are not numbers
pub fn non_numeric_json_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        "[a-z0-9]{0,8}".prop_map(Value::String),
        Just(json!([])),
        Just(json!({})),
    ]
}
