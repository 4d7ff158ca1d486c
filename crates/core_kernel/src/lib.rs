//! Core Kernel - Foundational value types for the premium calculator
//!
//! This crate provides the building blocks shared by the domain and API layers:
//! - Money types with precise decimal arithmetic and display formatting
//! - Rates used as proportional loadings on a money amount

pub mod money;

pub use money::{Currency, Money, MoneyError, Rate};
