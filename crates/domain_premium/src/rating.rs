//! Rating tables
//!
//! Age factors and risk loadings are the two proportional adjustments applied
//! to the base premium.
//!
//! # Age brackets
//!
//! | Age    | Factor |
//! |--------|--------|
//! | 0-25   | 0.00   |
//! | 26-40  | 0.10   |
//! | 41-60  | 0.25   |
//! | 61+    | 0.50   |
//!
//! # Risk loadings
//!
//! | Risk level | Loading |
//! |------------|---------|
//! | low        | 0.00    |
//! | medium     | 0.20    |
//! | high       | 0.50    |

use core_kernel::Rate;
use rust_decimal_macros::dec;

use crate::request::RiskLevel;

/// Upper age bound (inclusive) of each bracket with its factor, sorted ascending.
/// Ages above the last bound take [`SENIOR_AGE_FACTOR`].
const AGE_BRACKETS: [(u32, Rate); 3] = [
    (25, Rate::new(dec!(0.00))),
    (40, Rate::new(dec!(0.10))),
    (60, Rate::new(dec!(0.25))),
];

const SENIOR_AGE_FACTOR: Rate = Rate::new(dec!(0.50));

/// Returns the age factor for the bracket containing `age`
pub fn age_factor(age: u32) -> Rate {
    AGE_BRACKETS
        .iter()
        .find(|(upper, _)| age <= *upper)
        .map(|(_, factor)| *factor)
        .unwrap_or(SENIOR_AGE_FACTOR)
}

/// Returns the loading for a declared risk level
pub fn risk_loading(risk_level: RiskLevel) -> Rate {
    match risk_level {
        RiskLevel::Low => Rate::new(dec!(0.00)),
        RiskLevel::Medium => Rate::new(dec!(0.20)),
        RiskLevel::High => Rate::new(dec!(0.50)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brackets_are_sorted() {
        assert!(AGE_BRACKETS.windows(2).all(|w| w[0].0 < w[1].0 && w[0].1 < w[1].1));
        assert!(AGE_BRACKETS[AGE_BRACKETS.len() - 1].1 < SENIOR_AGE_FACTOR);
    }

    #[test]
    fn test_bracket_edges() {
        assert_eq!(age_factor(0), Rate::new(dec!(0.00)));
        assert_eq!(age_factor(25), Rate::new(dec!(0.00)));
        assert_eq!(age_factor(26), Rate::new(dec!(0.10)));
        assert_eq!(age_factor(61), Rate::new(dec!(0.50)));
        assert_eq!(age_factor(120), Rate::new(dec!(0.50)));
    }

    #[test]
    fn test_risk_loadings() {
        assert_eq!(risk_loading(RiskLevel::Low).as_decimal(), dec!(0));
        assert_eq!(risk_loading(RiskLevel::Medium).as_decimal(), dec!(0.2));
        assert_eq!(risk_loading(RiskLevel::High).as_decimal(), dec!(0.5));
    }
}
