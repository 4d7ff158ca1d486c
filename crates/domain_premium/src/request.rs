//! Premium request model
//!
//! A [`PremiumRequest`] can only be obtained through validation, either from
//! an untyped payload via [`crate::validation::PremiumValidator`] or from typed
//! values via [`PremiumRequest::new`]. Holding one is proof that its fields
//! satisfy the rating invariants.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::validation::{self, ValidationErrors};

/// Youngest insurable age
pub const MIN_AGE: u32 = 0;

/// Oldest insurable age
pub const MAX_AGE: u32 = 120;

/// Declared risk level of the insured
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Every risk level, in ascending order of loading
    pub const ALL: [RiskLevel; 3] = [RiskLevel::Low, RiskLevel::Medium, RiskLevel::High];

    /// Returns the wire name of this risk level
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string names no risk level
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown risk level '{0}'")]
pub struct UnknownRiskLevel(pub String);

impl FromStr for RiskLevel {
    type Err = UnknownRiskLevel;

    /// Exact, case-sensitive match on the wire name
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RiskLevel::ALL
            .into_iter()
            .find(|level| level.as_str() == s)
            .ok_or_else(|| UnknownRiskLevel(s.to_string()))
    }
}

/// A validated request for a premium quote
#[derive(Debug, Clone, PartialEq)]
pub struct PremiumRequest {
    age: u32,
    risk_level: RiskLevel,
    coverage: f64,
}

impl PremiumRequest {
    /// Creates a request from typed values, enforcing the same range rules
    /// as payload validation
    ///
    /// # Errors
    ///
    /// Returns every violated rule when `age` exceeds [`MAX_AGE`] or
    /// `coverage` is not strictly positive.
    pub fn new(age: u32, risk_level: RiskLevel, coverage: f64) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::default();
        if let Err(violation) = validation::check_age_range(age.into(), serde_json::Value::from(age)) {
            errors.push(violation);
        }
        if let Err(violation) = validation::check_coverage_positive(coverage, validation::float_to_json(coverage)) {
            errors.push(violation);
        }
        errors.into_result()?;

        Ok(Self::new_unchecked(age, risk_level, coverage))
    }

    pub(crate) fn new_unchecked(age: u32, risk_level: RiskLevel, coverage: f64) -> Self {
        Self {
            age,
            risk_level,
            coverage,
        }
    }

    /// Age of the insured person in whole years
    pub fn age(&self) -> u32 {
        self.age
    }

    /// Declared risk level
    pub fn risk_level(&self) -> RiskLevel {
        self.risk_level
    }

    /// Requested coverage amount
    pub fn coverage(&self) -> f64 {
        self.coverage
    }
}
