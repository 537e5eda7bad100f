//! Money type with decimal precision and currency.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! This type wraps `rust_decimal::Decimal` for arbitrary precision.

use std::cmp::Ordering;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use super::currency::Currency;
use crate::error::{MoneyError, MoneyResult};

/// Represents a monetary amount with currency.
///
/// Uses `Decimal` internally to avoid floating-point precision errors.
/// Binary operations between amounts of different currencies fail with
/// [`MoneyError::CurrencyMismatch`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Money {
    /// The decimal amount in major units (e.g. dollars, not cents).
    pub amount: Decimal,
    /// ISO 4217 currency.
    pub currency: Currency,
}

impl Money {
    /// Creates a new Money instance.
    #[must_use]
    pub const fn new(amount: Decimal, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// Creates a zero amount in the specified currency.
    #[must_use]
    pub const fn zero(currency: Currency) -> Self {
        Self {
            amount: Decimal::ZERO,
            currency,
        }
    }

    /// The smallest non-zero amount of the currency.
    #[must_use]
    pub fn minimal_unit(currency: Currency) -> Self {
        Self::new(currency.minimal_unit(), currency)
    }

    /// Returns true if the amount is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Returns true if the amount is negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.amount < Decimal::ZERO
    }

    /// Returns true if the amount is strictly positive.
    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.amount > Decimal::ZERO
    }

    /// Returns true if both amounts share a currency.
    #[must_use]
    pub fn is_compatible(&self, other: &Self) -> bool {
        self.currency == other.currency
    }

    /// Fails unless `other` has the same currency.
    pub fn ensure_same_currency(&self, other: &Self) -> MoneyResult<()> {
        if self.is_compatible(other) {
            Ok(())
        } else {
            Err(MoneyError::CurrencyMismatch {
                expected: self.currency,
                actual: other.currency,
            })
        }
    }

    /// Applies a binary operation on the amounts after checking currencies.
    pub fn perform<F>(&self, other: &Self, op: F) -> MoneyResult<Self>
    where
        F: FnOnce(Decimal, Decimal) -> Decimal,
    {
        self.ensure_same_currency(other)?;
        Ok(Self::new(op(self.amount, other.amount), self.currency))
    }

    /// Applies a unary operation on the amount.
    #[must_use]
    pub fn perform_unary<F>(&self, op: F) -> Self
    where
        F: FnOnce(Decimal) -> Decimal,
    {
        Self::new(op(self.amount), self.currency)
    }

    /// Adds two amounts of the same currency.
    pub fn plus(&self, other: &Self) -> MoneyResult<Self> {
        self.perform(other, |a, b| a + b)
    }

    /// Subtracts `other` from `self`; both must share a currency.
    pub fn minus(&self, other: &Self) -> MoneyResult<Self> {
        self.perform(other, |a, b| a - b)
    }

    /// Flips the sign.
    #[must_use]
    pub fn negate(&self) -> Self {
        self.perform_unary(|a| -a)
    }

    /// Absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        self.perform_unary(|a| a.abs())
    }

    /// Multiplies by a scalar. The result is not rounded.
    #[must_use]
    pub fn times(&self, factor: Decimal) -> Self {
        self.perform_unary(|a| a * factor)
    }

    /// Divides by a scalar. The result is not rounded.
    pub fn divided_by(&self, divisor: Decimal) -> MoneyResult<Self> {
        if divisor.is_zero() {
            return Err(MoneyError::DivisionByZero);
        }
        Ok(self.perform_unary(|a| a / divisor))
    }

    /// Rounds to the currency's minimal unit using banker's rounding.
    #[must_use]
    pub fn round(&self) -> Self {
        self.perform_unary(|a| self.currency.round(a))
    }

    /// Rounds to the currency's minimal unit using the given strategy.
    #[must_use]
    pub fn round_with(&self, strategy: RoundingStrategy) -> Self {
        self.perform_unary(|a| self.currency.round_with(a, strategy))
    }

    /// Orders two amounts of the same currency.
    pub fn checked_cmp(&self, other: &Self) -> MoneyResult<Ordering> {
        self.ensure_same_currency(other)?;
        Ok(self.amount.cmp(&other.amount))
    }

    /// Sums amounts, checking every one against `currency`.
    pub fn sum<'a, I>(amounts: I, currency: Currency) -> MoneyResult<Self>
    where
        I: IntoIterator<Item = &'a Self>,
    {
        amounts
            .into_iter()
            .try_fold(Self::zero(currency), |acc, money| acc.plus(money))
    }
}

impl std::ops::Neg for Money {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl std::ops::Mul<Decimal> for Money {
    type Output = Self;

    fn mul(self, rhs: Decimal) -> Self::Output {
        self.times(rhs)
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.amount, self.currency)
    }
}

#[cfg(test)]
#[path = "money_tests.rs"]
mod tests;
