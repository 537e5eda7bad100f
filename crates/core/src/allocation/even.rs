//! Equal-share allocation.

use coinage_shared::Money;
use rust_decimal::Decimal;
use tracing::debug;

use super::error::AllocationError;
use super::types::{Allocation, truncate_share};

/// Splits an amount into equal shares rounded to the currency's minimal unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvenAllocator {
    allocatable: Money,
}

impl EvenAllocator {
    /// Creates an allocator for `allocatable`.
    #[must_use]
    pub const fn new(allocatable: Money) -> Self {
        Self { allocatable }
    }

    /// Splits into `recipients` equal shares.
    ///
    /// When the amount cannot give every recipient at least one minimal
    /// unit, every share is zero and the whole amount is left as remainder.
    /// Any rounding remainder is left for a
    /// [`RemainderSelector`](super::RemainderSelector) to distribute.
    ///
    /// # Errors
    ///
    /// Returns [`AllocationError::InvalidRecipientCount`] when `recipients` is zero.
    pub fn allocate(&self, recipients: usize) -> Result<Allocation, AllocationError> {
        if recipients < 1 {
            return Err(AllocationError::InvalidRecipientCount(recipients));
        }

        let currency = self.allocatable.currency;
        let count = Decimal::from(recipients);

        if count * currency.minimal_unit() > self.allocatable.amount.abs() {
            debug!(
                allocatable = %self.allocatable,
                recipients,
                "Not enough to give every recipient a minimal unit"
            );
            return Allocation::new(self.allocatable, vec![Money::zero(currency); recipients]);
        }

        let share = truncate_share(&self.allocatable.divided_by(count)?);
        debug!(allocatable = %self.allocatable, recipients, share = %share, "Even allocation");

        Allocation::new(self.allocatable, vec![share; recipients])
    }
}
