//! Ratio-weighted allocation.

use coinage_shared::Money;
use tracing::debug;

use super::error::AllocationError;
use super::ratio::RatioCollection;
use super::types::{Allocation, truncate_share};

/// Splits an amount by ratios, rounding each share to the minimal unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProRataAllocator {
    allocatable: Money,
}

impl ProRataAllocator {
    /// Creates an allocator for `allocatable`.
    #[must_use]
    pub const fn new(allocatable: Money) -> Self {
        Self { allocatable }
    }

    /// Allocates one share per ratio.
    ///
    /// Shares follow the caller's input order of `ratios`, not its ordered
    /// view. Zero shares are allowed.
    pub fn allocate(&self, ratios: &RatioCollection) -> Result<Allocation, AllocationError> {
        let shares: Vec<Money> = ratios
            .original()
            .iter()
            .map(|ratio| truncate_share(&ratio.apply_to(&self.allocatable)))
            .collect();

        debug!(
            allocatable = %self.allocatable,
            recipients = shares.len(),
            "Pro-rata allocation"
        );

        Allocation::new(self.allocatable, shares)
    }
}
