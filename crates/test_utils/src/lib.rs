//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! premium calculator test suite.
//!
//! # Modules
//!
//! - `fixtures`: Reference quote scenarios and ready-made payloads
//! - `assertions`: Custom assertion helpers for validation errors and results
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use assertions::*;
pub use generators::*;
