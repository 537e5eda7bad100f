//! Allocation error types.

use coinage_shared::{Money, MoneyError};
use rust_decimal::Decimal;
use thiserror::Error;

/// Errors raised while building ratios or allocations.
///
/// An incomplete allocation is a valid result, never an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AllocationError {
    /// Money arithmetic failed (currency mismatch between shares).
    #[error(transparent)]
    Money(#[from] MoneyError),

    // ========== Ratio Errors ==========
    /// No ratios were given.
    #[error("At least one ratio is required")]
    EmptyRatios,

    /// Ratio outside [0, 1].
    #[error("Ratio {0} is outside the range [0, 1]")]
    RatioOutOfRange(Decimal),

    /// Ratios do not add up to exactly one.
    #[error("Ratios must sum to exactly 1, got {sum}")]
    RatioSumNotOne {
        /// The actual sum.
        sum: Decimal,
    },

    /// A custom ordering dropped, added, or altered ratios.
    #[error("Ratio ordering must return a permutation of its input")]
    NotAPermutation,

    // ========== Allocation Errors ==========
    /// Allocated total exceeds the allocatable amount in absolute value.
    #[error("Cannot allocate {allocated} out of {allocatable}")]
    OverAllocation {
        /// Amount available.
        allocatable: Money,
        /// Sum of the requested shares.
        allocated: Money,
    },

    /// Recipient count below one.
    #[error("Recipient count must be at least 1, got {0}")]
    InvalidRecipientCount(usize),

    // ========== Remainder Errors ==========
    /// A remainder cannot be distributed over zero recipients.
    #[error("Cannot distribute remainder {0} without recipients")]
    NoRecipients(Money),

    /// The remainder holds more minimal units than can be indexed.
    #[error("Remainder {0} is too large to distribute unit by unit")]
    RemainderTooLarge(Money),

    /// A remainder selector broke its contract.
    #[error(
        "Remainder selector must return {expected} indices below {recipients}, got {actual:?}"
    )]
    InvalidSelection {
        /// Number of minimal units to hand out.
        expected: usize,
        /// Number of recipients.
        recipients: usize,
        /// Indices actually returned.
        actual: Vec<usize>,
    },
}

impl AllocationError {
    /// Returns the stable error code.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Money(inner) => inner.error_code(),
            Self::EmptyRatios => "EMPTY_RATIOS",
            Self::RatioOutOfRange(_) => "RATIO_OUT_OF_RANGE",
            Self::RatioSumNotOne { .. } => "RATIO_SUM_NOT_ONE",
            Self::NotAPermutation => "NOT_A_PERMUTATION",
            Self::OverAllocation { .. } => "OVER_ALLOCATION",
            Self::InvalidRecipientCount(_) => "INVALID_RECIPIENT_COUNT",
            Self::NoRecipients(_) => "NO_RECIPIENTS",
            Self::RemainderTooLarge(_) => "REMAINDER_TOO_LARGE",
            Self::InvalidSelection { .. } => "INVALID_SELECTION",
        }
    }
}
