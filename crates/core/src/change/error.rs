//! Change-making error types.

use coinage_shared::{Currency, Money, MoneyError};
use rust_decimal::Decimal;
use thiserror::Error;

/// Errors raised by the change engine.
///
/// "No solution" is a valid result, never an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChangeError {
    /// Money arithmetic failed.
    #[error(transparent)]
    Money(#[from] MoneyError),

    /// Change can only be made for a positive amount.
    #[error("Amount must be positive, got {0}")]
    NonPositiveAmount(Money),

    /// Denominations must have a positive face value.
    #[error("Denomination must be positive, got {0}")]
    NonPositiveDenomination(Decimal),

    /// Denomination is not a whole number of minimal units.
    #[error("Denomination {value} is not a whole number of {currency} minimal units")]
    NotRepresentable {
        /// Face value.
        value: Decimal,
        /// Currency whose minimal unit was used.
        currency: Currency,
    },

    /// Dynamic-programming table would exceed the configured size.
    #[error("Change table of {units} minimal units exceeds the limit of {limit}")]
    TableTooLarge {
        /// Amount expressed in minimal units.
        units: u64,
        /// Configured `max_table_units`.
        limit: u64,
    },

    /// A counter overflowed.
    #[error("Change count overflowed")]
    CountOverflow,
}

impl ChangeError {
    /// Returns the stable error code.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Money(inner) => inner.error_code(),
            Self::NonPositiveAmount(_) => "NON_POSITIVE_AMOUNT",
            Self::NonPositiveDenomination(_) => "NON_POSITIVE_DENOMINATION",
            Self::NotRepresentable { .. } => "NOT_REPRESENTABLE",
            Self::TableTooLarge { .. } => "TABLE_TOO_LARGE",
            Self::CountOverflow => "COUNT_OVERFLOW",
        }
    }
}
