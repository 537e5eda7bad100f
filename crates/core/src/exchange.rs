//! Exchange rates between two currencies.
//!
//! Converted amounts are rounded to the quote currency with
//! [`Currency::round`], i.e. half to even.

use coinage_shared::{Currency, Money, MoneyError};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::trace;

/// Errors raised when building or applying an exchange rate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExchangeError {
    /// Money arithmetic failed.
    #[error(transparent)]
    Money(#[from] MoneyError),

    /// Rates must be strictly positive.
    #[error("Exchange rate must be positive, got {0}")]
    NonPositiveRate(Decimal),

    /// The converted amount does not fit a decimal.
    #[error("Converting {money} at {rate} overflowed")]
    Overflow {
        /// Amount being converted.
        money: Money,
        /// Rate value applied.
        rate: Decimal,
    },

    /// A currency can only be exchanged for itself at 1.
    #[error("Rate from {currency} to itself must be 1, got {value}")]
    IdentityRate {
        /// The currency on both sides.
        currency: Currency,
        /// The rejected value.
        value: Decimal,
    },
}

impl ExchangeError {
    /// Returns the stable error code.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Money(inner) => inner.error_code(),
            Self::NonPositiveRate(_) => "NON_POSITIVE_RATE",
            Self::Overflow { .. } => "CONVERSION_OVERFLOW",
            Self::IdentityRate { .. } => "IDENTITY_RATE",
        }
    }
}

/// Exchange rate: 1 `base` = `value` `quote`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExchangeRate {
    base: Currency,
    quote: Currency,
    value: Decimal,
}

impl ExchangeRate {
    /// Creates a new exchange rate.
    pub fn new(base: Currency, quote: Currency, value: Decimal) -> Result<Self, ExchangeError> {
        if value <= Decimal::ZERO {
            return Err(ExchangeError::NonPositiveRate(value));
        }
        if base == quote && value != Decimal::ONE {
            return Err(ExchangeError::IdentityRate {
                currency: base,
                value,
            });
        }
        Ok(Self { base, quote, value })
    }

    /// Source currency.
    #[must_use]
    pub const fn base(&self) -> Currency {
        self.base
    }

    /// Target currency.
    #[must_use]
    pub const fn quote(&self) -> Currency {
        self.quote
    }

    /// Units of `quote` per unit of `base`.
    #[must_use]
    pub const fn value(&self) -> Decimal {
        self.value
    }

    /// Converts `money` from the base currency into the quote currency.
    pub fn apply(&self, money: &Money) -> Result<Money, ExchangeError> {
        if money.currency != self.base {
            return Err(MoneyError::CurrencyMismatch {
                expected: self.base,
                actual: money.currency,
            }
            .into());
        }

        let product = money
            .amount
            .checked_mul(self.value)
            .ok_or(ExchangeError::Overflow {
                money: *money,
                rate: self.value,
            })?;
        let converted = Money::new(self.quote.round(product), self.quote);
        trace!(from = %money, rate = %self, converted = %converted, "Applied exchange rate");
        Ok(converted)
    }

    /// Returns the rate in the opposite direction.
    #[must_use]
    pub fn invert(&self) -> Self {
        Self {
            base: self.quote,
            quote: self.base,
            value: Decimal::ONE / self.value,
        }
    }
}

impl std::fmt::Display for ExchangeRate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{} {}", self.base, self.quote, self.value.normalize())
    }
}
