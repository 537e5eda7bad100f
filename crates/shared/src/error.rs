//! Money error types.

use thiserror::Error;

use crate::types::Currency;

/// Result type alias using `MoneyError`.
pub type MoneyResult<T> = Result<T, MoneyError>;

/// Errors raised by money arithmetic and currency lookup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyError {
    /// Operands carry different currencies.
    #[error("Currency mismatch: expected {expected}, got {actual}")]
    CurrencyMismatch {
        /// Currency of the left-hand operand.
        expected: Currency,
        /// Currency of the right-hand operand.
        actual: Currency,
    },

    /// Currency code is not in the catalog.
    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),

    /// Division of an amount by zero.
    #[error("Cannot divide money by zero")]
    DivisionByZero,
}

impl MoneyError {
    /// Returns the stable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::CurrencyMismatch { .. } => "CURRENCY_MISMATCH",
            Self::UnknownCurrency(_) => "UNKNOWN_CURRENCY",
            Self::DivisionByZero => "DIVISION_BY_ZERO",
        }
    }
}
