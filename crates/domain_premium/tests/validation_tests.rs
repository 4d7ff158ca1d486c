//! Request validation tests
//!
//! Tests cover rejection per field, collection of several violations, the
//! recorded input value, and acceptance at the edges of each range.

use domain_premium::{PremiumError, PremiumValidator, RiskLevel, ViolationKind, quote};
use serde_json::json;
use test_utils::{
    assert_violated_fields, assert_violation, example_payload_with, example_payload_without,
    premium_payload,
};

mod age {
    use super::*;

    #[test]
    fn test_negative_age_is_rejected() {
        let errors = PremiumValidator::validate(&example_payload_with("age", json!(-1))).unwrap_err();
        assert_violation(&errors, "age", ViolationKind::RangeViolation);
        assert_violated_fields(&errors, &["age"]);
    }

    #[test]
    fn test_age_above_maximum_is_rejected() {
        let errors = PremiumValidator::validate(&example_payload_with("age", json!(121))).unwrap_err();
        assert_violation(&errors, "age", ViolationKind::RangeViolation);
    }

    #[test]
    fn test_age_150_reports_limit_and_input() {
        let errors = PremiumValidator::validate(&example_payload_with("age", json!(150))).unwrap_err();
        let violation = errors.for_field("age").next().unwrap();
        assert_eq!(violation.loc, vec!["body", "age"]);
        assert_eq!(violation.input, json!(150));
        assert!(violation.message.contains("120"));
    }

    #[test]
    fn test_age_string_is_type_mismatch() {
        let errors = PremiumValidator::validate(&example_payload_with("age", json!("35"))).unwrap_err();
        assert_violation(&errors, "age", ViolationKind::TypeMismatch);
    }

    #[test]
    fn test_age_null_is_type_mismatch() {
        let errors = PremiumValidator::validate(&example_payload_with("age", json!(null))).unwrap_err();
        assert_violation(&errors, "age", ViolationKind::TypeMismatch);
    }

    #[test]
    fn test_missing_age() {
        let errors = PremiumValidator::validate(&example_payload_without("age")).unwrap_err();
        assert_violation(&errors, "age", ViolationKind::MissingField);
        let violation = errors.for_field("age").next().unwrap();
        assert_eq!(violation.input, json!(null));
    }

    #[test]
    fn test_age_bounds_are_inclusive() {
        assert_eq!(
            PremiumValidator::validate(&example_payload_with("age", json!(0))).unwrap().age(),
            0
        );
        assert_eq!(
            PremiumValidator::validate(&example_payload_with("age", json!(120))).unwrap().age(),
            120
        );
    }
}

mod risk_level {
    use super::*;

    #[test]
    fn test_unknown_level_is_enum_mismatch() {
        let errors =
            PremiumValidator::validate(&example_payload_with("risk_level", json!("extreme"))).unwrap_err();
        assert_violation(&errors, "risk_level", ViolationKind::EnumMismatch);
        let violation = errors.for_field("risk_level").next().unwrap();
        assert!(violation.message.contains("'low', 'medium', 'high'"));
        assert_eq!(violation.input, json!("extreme"));
    }

    #[test]
    fn test_match_is_case_sensitive() {
        let errors =
            PremiumValidator::validate(&example_payload_with("risk_level", json!("HIGH"))).unwrap_err();
        assert_violation(&errors, "risk_level", ViolationKind::EnumMismatch);
    }

    #[test]
    fn test_number_is_type_mismatch() {
        let errors =
            PremiumValidator::validate(&example_payload_with("risk_level", json!(2))).unwrap_err();
        assert_violation(&errors, "risk_level", ViolationKind::TypeMismatch);
    }

    #[test]
    fn test_each_level_is_accepted() {
        for level in RiskLevel::ALL {
            let request =
                PremiumValidator::validate(&example_payload_with("risk_level", json!(level.as_str())))
                    .unwrap();
            assert_eq!(request.risk_level(), level);
        }
    }
}

mod coverage {
    use super::*;

    #[test]
    fn test_zero_coverage_is_rejected() {
        let errors = PremiumValidator::validate(&example_payload_with("coverage", json!(0))).unwrap_err();
        assert_violation(&errors, "coverage", ViolationKind::RangeViolation);
        assert_violated_fields(&errors, &["coverage"]);
    }

    #[test]
    fn test_negative_coverage_is_rejected() {
        let errors = PremiumValidator::validate(&example_payload_with("coverage", json!(-5))).unwrap_err();
        assert_violation(&errors, "coverage", ViolationKind::RangeViolation);
    }

    #[test]
    fn test_string_coverage_is_type_mismatch() {
        let errors =
            PremiumValidator::validate(&example_payload_with("coverage", json!("lots"))).unwrap_err();
        assert_violation(&errors, "coverage", ViolationKind::TypeMismatch);
    }

    #[test]
    fn test_fractional_coverage_is_accepted() {
        let request =
            PremiumValidator::validate(&example_payload_with("coverage", json!(0.01))).unwrap();
        assert_eq!(request.coverage(), 0.01);
    }

    #[test]
    fn test_coverage_below_decimal_precision_is_accepted() {
        let request =
            PremiumValidator::validate(&example_payload_with("coverage", json!(1e-30))).unwrap();
        assert_eq!(request.coverage(), 1e-30);
    }

    #[test]
    fn test_coverage_above_decimal_range_is_accepted() {
        let request =
            PremiumValidator::validate(&example_payload_with("coverage", json!(1e300))).unwrap();
        assert_eq!(request.coverage(), 1e300);
    }

    #[test]
    fn test_tiny_coverage_is_quoted_and_echoed() {
        let result = quote(&example_payload_with("coverage", json!(1e-30))).unwrap();
        assert_eq!(result.coverage, 1e-30);
    }
}

mod payload {
    use super::*;

    #[test]
    fn test_all_violations_are_collected() {
        let payload = premium_payload(json!(-1), json!("extreme"), json!(0));
        let errors = PremiumValidator::validate(&payload).unwrap_err();
        assert_violated_fields(&errors, &["age", "risk_level", "coverage"]);
        assert_violation(&errors, "age", ViolationKind::RangeViolation);
        assert_violation(&errors, "risk_level", ViolationKind::EnumMismatch);
        assert_violation(&errors, "coverage", ViolationKind::RangeViolation);
    }

    #[test]
    fn test_empty_object_reports_three_missing_fields() {
        let errors = PremiumValidator::validate(&json!({})).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors.iter().all(|v| v.kind == ViolationKind::MissingField));
    }

    #[test]
    fn test_non_object_body_is_rejected_at_body() {
        let errors = PremiumValidator::validate(&json!([35, "medium", 100000])).unwrap_err();
        assert_eq!(errors.len(), 1);
        let violation = errors.iter().next().unwrap();
        assert_eq!(violation.loc, vec!["body"]);
        assert_eq!(violation.kind, ViolationKind::TypeMismatch);
    }

    #[test]
    fn test_extra_fields_are_ignored() {
        let payload = example_payload_with("smoker", json!(true));
        assert!(PremiumValidator::validate(&payload).is_ok());
    }

    #[test]
    fn test_validation_does_not_mutate_payload() {
        let payload = premium_payload(json!(150), json!("medium"), json!(100000));
        let before = payload.clone();
        let _ = PremiumValidator::validate(&payload);
        assert_eq!(payload, before);
    }

    #[test]
    fn test_quote_surfaces_validation_error() {
        let payload = example_payload_with("coverage", json!(0));
        match quote(&payload) {
            Err(PremiumError::Validation(errors)) => {
                assert_violation(&errors, "coverage", ViolationKind::RangeViolation)
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }
}

mod property_tests {
    use super::*;
    use proptest::prelude::*;
    use test_utils::{
        excessive_age_strategy, negative_age_strategy, non_numeric_json_strategy,
        non_positive_coverage_strategy, unknown_risk_level_strategy,
    };

    proptest! {
        #[test]
        fn ages_above_range_are_rejected(age in excessive_age_strategy()) {
            let errors = PremiumValidator::validate(&example_payload_with("age", json!(age))).unwrap_err();
            assert_violation(&errors, "age", ViolationKind::RangeViolation);
        }

        #[test]
        fn negative_ages_are_rejected(age in negative_age_strategy()) {
            let errors = PremiumValidator::validate(&example_payload_with("age", json!(age))).unwrap_err();
            assert_violation(&errors, "age", ViolationKind::RangeViolation);
        }

        #[test]
        fn unknown_risk_levels_are_rejected(name in unknown_risk_level_strategy()) {
            let errors = PremiumValidator::validate(&example_payload_with("risk_level", json!(name))).unwrap_err();
            assert_violation(&errors, "risk_level", ViolationKind::EnumMismatch);
        }

        #[test]
        fn non_positive_coverage_is_rejected(coverage in non_positive_coverage_strategy()) {
            let errors = PremiumValidator::validate(&example_payload_with("coverage", json!(coverage))).unwrap_err();
            assert_violation(&errors, "coverage", ViolationKind::RangeViolation);
        }

        #[test]
        fn non_numeric_coverage_is_type_mismatch(value in non_numeric_json_strategy()) {
            let errors = PremiumValidator::validate(&example_payload_with("coverage", value)).unwrap_err();
            assert_violation(&errors, "coverage", ViolationKind::TypeMismatch);
        }
    }
}
