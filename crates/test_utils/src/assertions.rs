//! Custom Test Assertions
//!
//! Provides specialized assertion helpers for premium results and validation
//! errors that give more meaningful messages than standard assertions.

use domain_premium::{PremiumResult, ValidationErrors, ViolationKind};

use crate::fixtures::QuoteScenario;

/// Asserts that a result matches every expected figure of a scenario
///
/// # Panics
///
/// Panics naming the first field that differs
pub fn assert_matches_scenario(result: &PremiumResult, scenario: &QuoteScenario) {
    assert_eq!(
        result.age_factor.as_decimal(),
        scenario.age_factor,
        "age factor mismatch for age {}",
        scenario.age
    );
    assert_eq!(
        result.risk_loading.as_decimal(),
        scenario.risk_loading,
        "risk loading mismatch for risk level {}",
        scenario.risk_level
    );
    assert_eq!(
        result.final_premium.amount(),
        scenario.final_premium,
        "final premium mismatch for age {} / {}",
        scenario.age,
        scenario.risk_level
    );
    assert_eq!(result.coverage, scenario.coverage, "coverage must be echoed");
}

/// Asserts that exactly one violation exists for `field`, with the given kind
///
/// # Panics
///
/// Panics if the field has no violation, several, or one of another kind
pub fn assert_violation(errors: &ValidationErrors, field: &str, kind: ViolationKind) {
    let found: Vec<_> = errors.for_field(field).collect();
    assert_eq!(
        found.len(),
        1,
        "expected exactly one violation on '{}', got: {}",
        field,
        errors
    );
    assert_eq!(
        found[0].kind, kind,
        "wrong violation kind on '{}': {}",
        field, found[0]
    );
}

/// Asserts that the only violations are on the listed fields, in order
pub fn assert_violated_fields(errors: &ValidationErrors, fields: &[&str]) {
    let actual: Vec<&str> = errors.iter().map(|v| v.field()).collect();
    assert_eq!(actual, fields, "unexpected violated fields: {}", errors);
}
