//! Premium request validation
//!
//! Turns an untyped JSON payload into a [`PremiumRequest`], or reports every
//! offending field at once.
//!
//! # Validation Rules
//!
//! ## age
//! - Required
//! - Must be an integer; a float with no fractional part (`35.0`) is accepted
//! - Must lie in `0..=120`
//!
//! ## risk_level
//! - Required
//! - Must be a string equal to `low`, `medium` or `high` (case-sensitive)
//!
//! ## coverage
//! - Required
//! - Must be a number (integer or float)
//! - Must be strictly greater than zero
//!
//! Fields other than these three are ignored.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

use crate::request::{PremiumRequest, RiskLevel, MAX_AGE, MIN_AGE};

/// Location prefix for every field of the request body
pub const BODY: &str = "body";

/// Category of a single validation failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    /// A required field is absent
    MissingField,
    /// The value has the wrong JSON type
    TypeMismatch,
    /// The value has the right type but lies outside the allowed range
    RangeViolation,
    /// The value is not a member of the allowed enumeration
    EnumMismatch,
}

impl ViolationKind {
    /// Returns the wire name of this kind
    pub fn as_str(&self) -> &'static str {
        match self {
            ViolationKind::MissingField => "missing_field",
            ViolationKind::TypeMismatch => "type_mismatch",
            ViolationKind::RangeViolation => "range_violation",
            ViolationKind::EnumMismatch => "enum_mismatch",
        }
    }
}

/// One rejected field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldViolation {
    /// Path to the offending value, e.g. `["body", "age"]`
    pub loc: Vec<String>,
    /// What went wrong
    pub kind: ViolationKind,
    /// Human-readable explanation
    pub message: String,
    /// The rejected value (`null` when the field is missing)
    pub input: Value,
}

impl FieldViolation {
    /// Creates a violation for a top-level body field
    pub fn new(field: &str, kind: ViolationKind, message: impl Into<String>, input: Value) -> Self {
        Self {
            loc: vec![BODY.to_string(), field.to_string()],
            kind,
            message: message.into(),
            input,
        }
    }

    /// Creates a violation for the body as a whole
    pub fn body(kind: ViolationKind, message: impl Into<String>, input: Value) -> Self {
        Self {
            loc: vec![BODY.to_string()],
            kind,
            message: message.into(),
            input,
        }
    }

    /// Returns the innermost location segment, i.e. the field name
    pub fn field(&self) -> &str {
        self.loc.last().map(String::as_str).unwrap_or(BODY)
    }
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}): {}", self.loc.join("."), self.kind.as_str(), self.message)
    }
}

/// Every violation found in one payload
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationErrors {
    violations: Vec<FieldViolation>,
}

impl ValidationErrors {
    /// Adds a violation
    pub fn push(&mut self, violation: FieldViolation) {
        self.violations.push(violation);
    }

    /// Returns true when no violation was recorded
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Number of violations
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// Iterates over the violations in field order
    pub fn iter(&self) -> std::slice::Iter<'_, FieldViolation> {
        self.violations.iter()
    }

    /// Returns the violations for a given field
    pub fn for_field<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a FieldViolation> + 'a {
        self.violations.iter().filter(move |v| v.field() == field)
    }

    /// Consumes the collection, returning the violations
    pub fn into_vec(self) -> Vec<FieldViolation> {
        self.violations
    }

    /// `Ok(())` if nothing was recorded, otherwise `Err(self)`
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl From<FieldViolation> for ValidationErrors {
    fn from(violation: FieldViolation) -> Self {
        Self {
            violations: vec![violation],
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} validation error(s)", self.violations.len())?;
        for violation in &self.violations {
            write!(f, "; {}", violation)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a FieldViolation;
    type IntoIter = std::slice::Iter<'a, FieldViolation>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Validator for premium request payloads
pub struct PremiumValidator;

impl PremiumValidator {
    /// Validates a JSON payload
    ///
    /// All three fields are checked independently so that a single response
    /// can report every problem.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationErrors`] holding one [`FieldViolation`] per
    /// offending field, or a single body-level violation when the payload is
    /// not a JSON object.
    pub fn validate(payload: &Value) -> Result<PremiumRequest, ValidationErrors> {
        let Some(object) = payload.as_object() else {
            tracing::debug!("premium payload is not a JSON object");
            return Err(FieldViolation::body(
                ViolationKind::TypeMismatch,
                "request body must be a JSON object",
                payload.clone(),
            )
            .into());
        };

        let mut errors = ValidationErrors::default();
        let age = collect(&mut errors, validate_age(object));
        let risk_level = collect(&mut errors, validate_risk_level(object));
        let coverage = collect(&mut errors, validate_coverage(object));

        match (age, risk_level, coverage) {
            (Some(age), Some(risk_level), Some(coverage)) => {
                Ok(PremiumRequest::new_unchecked(age, risk_level, coverage))
            }
            _ => {
                tracing::debug!(violations = errors.len(), "premium payload rejected");
                Err(errors)
            }
        }
    }
}

fn collect<T>(errors: &mut ValidationErrors, result: Result<T, FieldViolation>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(violation) => {
            errors.push(violation);
            None
        }
    }
}

fn required<'a>(object: &'a Map<String, Value>, field: &str) -> Result<&'a Value, FieldViolation> {
    object.get(field).ok_or_else(|| {
        FieldViolation::new(field, ViolationKind::MissingField, "field required", Value::Null)
    })
}

fn validate_age(object: &Map<String, Value>) -> Result<u32, FieldViolation> {
    let value = required(object, "age")?;
    let not_integer = || {
        FieldViolation::new(
            "age",
            ViolationKind::TypeMismatch,
            "value is not a valid integer",
            value.clone(),
        )
    };

    let Value::Number(number) = value else {
        return Err(not_integer());
    };

    let age = if let Some(i) = number.as_i64() {
        i128::from(i)
    } else if let Some(u) = number.as_u64() {
        i128::from(u)
    } else {
        match number.as_f64() {
            Some(f) if f.is_finite() && f.fract() == 0.0 => f as i128,
            _ => return Err(not_integer()),
        }
    };

    check_age_range(age, value.clone())
}

/// Checks that an integral age lies within the insurable range
pub(crate) fn check_age_range(age: i128, input: Value) -> Result<u32, FieldViolation> {
    if age < i128::from(MIN_AGE) {
        return Err(FieldViolation::new(
            "age",
            ViolationKind::RangeViolation,
            format!("ensure this value is greater than or equal to {MIN_AGE}"),
            input,
        ));
    }
    if age > i128::from(MAX_AGE) {
        return Err(FieldViolation::new(
            "age",
            ViolationKind::RangeViolation,
            format!("ensure this value is less than or equal to {MAX_AGE}"),
            input,
        ));
    }
    u32::try_from(age).map_err(|_| {
        FieldViolation::new("age", ViolationKind::RangeViolation, "age is out of range", input)
    })
}

fn validate_risk_level(object: &Map<String, Value>) -> Result<RiskLevel, FieldViolation> {
    let value = required(object, "risk_level")?;
    let Value::String(name) = value else {
        return Err(FieldViolation::new(
            "risk_level",
            ViolationKind::TypeMismatch,
            "str type expected",
            value.clone(),
        ));
    };

    name.parse().map_err(|_| {
        let permitted = RiskLevel::ALL
            .iter()
            .map(|level| format!("'{}'", level.as_str()))
            .collect::<Vec<_>>()
            .join(", ");
        FieldViolation::new(
            "risk_level",
            ViolationKind::EnumMismatch,
            format!("value is not a valid enumeration member; permitted: {permitted}"),
            value.clone(),
        )
    })
}

fn validate_coverage(object: &Map<String, Value>) -> Result<f64, FieldViolation> {
    let value = required(object, "coverage")?;
    let not_float = || {
        FieldViolation::new(
            "coverage",
            ViolationKind::TypeMismatch,
            "value is not a valid float",
            value.clone(),
        )
    };

    let Value::Number(number) = value else {
        return Err(not_float());
    };
    let coverage = number.as_f64().ok_or_else(not_float)?;

    check_coverage_positive(coverage, value.clone())
}

/// Checks that a coverage amount is a finite number strictly above zero
pub(crate) fn check_coverage_positive(coverage: f64, input: Value) -> Result<f64, FieldViolation> {
    if !coverage.is_finite() {
        return Err(FieldViolation::new(
            "coverage",
            ViolationKind::RangeViolation,
            "value is not a finite number",
            input,
        ));
    }
    if coverage > 0.0 {
        Ok(coverage)
    } else {
        Err(FieldViolation::new(
            "coverage",
            ViolationKind::RangeViolation,
            "ensure this value is greater than 0",
            input,
        ))
    }
}

/// Renders a float as a JSON number, or `null` when it has no JSON form
pub(crate) fn float_to_json(value: f64) -> Value {
    serde_json::Number::from_f64(value)
        .map(Value::Number)
        .unwrap_or(Value::Null)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_float_age_with_fraction_is_type_mismatch() {
        let errors = PremiumValidator::validate(&json!({
            "age": 35.5, "risk_level": "low", "coverage": 1000
        }))
        .unwrap_err();
        let violation = errors.iter().next().unwrap();
        assert_eq!(violation.kind, ViolationKind::TypeMismatch);
        assert_eq!(violation.input, json!(35.5));
    }

    #[test]
    fn test_integral_float_age_is_coerced() {
        let request = PremiumValidator::validate(&json!({
            "age": 35.0, "risk_level": "low", "coverage": 1000
        }))
        .unwrap();
        assert_eq!(request.age(), 35);
    }

    #[test]
    fn test_huge_unsigned_age_is_range_violation() {
        let errors = PremiumValidator::validate(&json!({
            "age": u64::MAX, "risk_level": "low", "coverage": 1000
        }))
        .unwrap_err();
        assert_eq!(errors.iter().next().unwrap().kind, ViolationKind::RangeViolation);
    }

    #[test]
    fn test_display_lists_every_violation() {
        let errors = PremiumValidator::validate(&json!({})).unwrap_err();
        let rendered = errors.to_string();
        assert!(rendered.starts_with("3 validation error(s)"));
        assert!(rendered.contains("body.age (missing_field)"));
        assert!(rendered.contains("body.coverage (missing_field)"));
    }

    #[test]
    fn test_tiny_and_huge_coverage_are_accepted() {
        for coverage in [1e-30, 1e-29, 1e29, 1e300] {
            let request = PremiumValidator::validate(&json!({
                "age": 35, "risk_level": "low", "coverage": coverage
            }))
            .unwrap();
            assert_eq!(request.coverage(), coverage);
        }
    }

    #[test]
    fn test_non_finite_coverage_is_range_violation() {
        let violation = check_coverage_positive(f64::INFINITY, Value::Null).unwrap_err();
        assert_eq!(violation.kind, ViolationKind::RangeViolation);
        assert_eq!(violation.message, "value is not a finite number");
        assert!(check_coverage_positive(f64::NAN, Value::Null).is_err());
    }

    #[test]
    fn test_float_to_json_is_a_number() {
        assert_eq!(float_to_json(-5.0), json!(-5.0));
        assert_eq!(float_to_json(f64::NAN), Value::Null);
    }
}
