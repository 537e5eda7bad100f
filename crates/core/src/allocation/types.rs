//! The allocation result type.

use coinage_shared::Money;
use rust_decimal::RoundingStrategy;
use serde::Serialize;

use super::error::AllocationError;
use super::remainder::{RemainderSelector, allocate_remainder};

/// An amount distributed across an ordered list of recipients.
///
/// # Invariants
///
/// - every share has the currency of `allocatable`
/// - `|total_allocated| <= |allocatable|`
/// - `total_allocated + remainder == allocatable`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Allocation {
    allocatable: Money,
    allocated: Vec<Money>,
    total_allocated: Money,
    remainder: Money,
}

impl Allocation {
    /// Validates the shares against the allocatable amount.
    ///
    /// # Errors
    ///
    /// Fails on a currency mismatch or when the shares exceed the
    /// allocatable amount in absolute value.
    pub fn new(allocatable: Money, allocated: Vec<Money>) -> Result<Self, AllocationError> {
        let total_allocated = Money::sum(&allocated, allocatable.currency)?;

        if total_allocated.amount.abs() > allocatable.amount.abs() {
            return Err(AllocationError::OverAllocation {
                allocatable,
                allocated: total_allocated,
            });
        }

        let remainder = allocatable.minus(&total_allocated)?;

        Ok(Self {
            allocatable,
            allocated,
            total_allocated,
            remainder,
        })
    }

    /// The amount being distributed.
    #[must_use]
    pub const fn allocatable(&self) -> &Money {
        &self.allocatable
    }

    /// Shares in recipient order.
    #[must_use]
    pub fn allocated(&self) -> &[Money] {
        &self.allocated
    }

    /// Sum of all shares.
    #[must_use]
    pub const fn total_allocated(&self) -> &Money {
        &self.total_allocated
    }

    /// `allocatable - total_allocated`.
    #[must_use]
    pub const fn remainder(&self) -> &Money {
        &self.remainder
    }

    /// True when nothing is left over.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.remainder.is_zero()
    }

    /// True when the leftover is smaller than the currency's minimal unit.
    #[must_use]
    pub fn is_quasi_complete(&self) -> bool {
        !self.is_complete()
            && self.remainder.amount.abs() < self.remainder.currency.minimal_unit()
    }

    /// Number of recipients.
    #[must_use]
    pub fn len(&self) -> usize {
        self.allocated.len()
    }

    /// True when there are no recipients.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.allocated.is_empty()
    }

    /// Iterates shares in recipient order.
    pub fn iter(&self) -> std::slice::Iter<'_, Money> {
        self.allocated.iter()
    }

    /// Hands the remainder out one minimal unit at a time; see [`allocate_remainder`].
    pub fn distribute_remainder<S>(&self, selector: &mut S) -> Result<Self, AllocationError>
    where
        S: RemainderSelector + ?Sized,
    {
        allocate_remainder(self, selector)
    }
}

impl<'a> IntoIterator for &'a Allocation {
    type Item = &'a Money;
    type IntoIter = std::slice::Iter<'a, Money>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl std::fmt::Display for Allocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, share) in self.allocated.iter().enumerate() {
            if i > 0 {
                f.write_str(" | ")?;
            }
            write!(f, "{}", share.amount)?;
        }
        Ok(())
    }
}

/// Rounds a share toward zero so that shares never add up past the total.
pub(crate) fn truncate_share(share: &Money) -> Money {
    share.round_with(RoundingStrategy::ToZero)
}
