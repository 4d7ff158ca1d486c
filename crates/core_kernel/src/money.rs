//! Money types with precise decimal arithmetic
//!
//! This module provides a type-safe representation of monetary values
//! using rust_decimal for precise calculations without floating-point errors.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Currency codes following ISO 4217
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    USD,
}

impl Currency {
    /// Returns the number of decimal places for this currency
    pub fn decimal_places(&self) -> u32 {
        match self {
            Currency::USD => 2,
        }
    }

    /// Returns the currency symbol
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::USD => "$",
        }
    }

    /// Returns the ISO 4217 code
    pub fn code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Errors that can occur during money operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoneyError {
    #[error("Overflow during calculation")]
    Overflow,
}

/// A monetary amount with associated currency
///
/// Amounts are stored with 4 decimal places internally so that chained
/// multiplications keep their precision until the final rounding step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Money {
    amount: Decimal,
    currency: Currency,
}

impl Money {
    /// Creates a new Money value
    pub fn new(amount: Decimal, currency: Currency) -> Self {
        Self {
            amount: amount.round_dp(4),
            currency,
        }
    }

    /// Returns the amount
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Returns the currency
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Returns true if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Rounds to `dp` decimal places, midpoints away from zero
    ///
    /// This is the conventional "half-up" rule for positive amounts:
    /// `1320.005` becomes `1320.01`.
    pub fn round_half_up(&self, dp: u32) -> Self {
        Self {
            amount: self
                .amount
                .round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero),
            currency: self.currency,
        }
    }

    /// Rounds to the currency's standard decimal places
    pub fn round_to_currency(&self) -> Self {
        self.round_half_up(self.currency.decimal_places())
    }

    /// Multiplies by a scalar, failing instead of panicking on overflow
    pub fn checked_multiply(&self, factor: Decimal) -> Result<Self, MoneyError> {
        self.amount
            .checked_mul(factor)
            .map(|amount| Self::new(amount, self.currency))
            .ok_or(MoneyError::Overflow)
    }

    /// Formats the amount with its symbol, thousands separators and the
    /// currency's decimal places, e.g. `$1,320.00`
    pub fn to_grouped_string(&self) -> String {
        let rounded = self.round_to_currency();
        let sign = if rounded.amount.is_sign_negative() && !rounded.is_zero() {
            "-"
        } else {
            ""
        };
        format!(
            "{}{}{}",
            sign,
            self.currency.symbol(),
            group_thousands(rounded.amount.abs(), self.currency.decimal_places())
        )
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_grouped_string())
    }
}

/// Renders a non-negative decimal with `,` between groups of three integer digits
fn group_thousands(amount: Decimal, dp: u32) -> String {
    let plain = format!("{:.dp$}", amount, dp = dp as usize);
    let (integer, fraction) = match plain.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (plain.as_str(), None),
    };

    let mut grouped = String::with_capacity(plain.len() + integer.len() / 3);
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    if let Some(fraction) = fraction {
        grouped.push('.');
        grouped.push_str(fraction);
    }
    grouped
}

/// Represents a proportional rate (e.g., an age factor or a risk loading)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Rate {
    /// The rate as a decimal (e.g., 0.10 for 10%)
    value: Decimal,
}

impl Rate {
    /// The zero rate
    pub const ZERO: Rate = Rate { value: Decimal::ZERO };

    /// Creates a rate from a decimal value (e.g., 0.05 for 5%)
    pub const fn new(value: Decimal) -> Self {
        Self { value }
    }

    /// Returns the rate as a decimal
    pub fn as_decimal(&self) -> Decimal {
        self.value
    }

    /// Returns `1 + rate`, the multiplier used when loading an amount
    pub fn multiplier(&self) -> Decimal {
        Decimal::ONE + self.value
    }

    /// Loads a money amount by this rate: `money × (1 + rate)`
    pub fn load(&self, money: &Money) -> Result<Money, MoneyError> {
        money.checked_multiply(self.multiplier())
    }
}

impl fmt::Display for Rate {
    /// Two-decimal rendering, e.g. `0.10`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rounded = self
            .value
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        write!(f, "{:.2}", rounded)
    }
}
