//! Allocation of an amount across recipients.
//!
//! This module implements:
//! - Ratios and ratio collections that sum to exactly one
//! - The `Allocation` result with its conservation invariants
//! - Even and pro-rata allocators
//! - Remainder strategies that hand out leftover minimal units
//! - Error types for allocation operations

pub mod error;
pub mod even;
pub mod pro_rata;
pub mod ratio;
pub mod remainder;
pub mod types;

#[cfg(test)]
mod props;

pub use error::AllocationError;
pub use even::EvenAllocator;
pub use pro_rata::ProRataAllocator;
pub use ratio::{AllocationOrdering, Ratio, RatioCollection};
pub use remainder::{FirstToLast, LastToFirst, RandomOrder, RemainderSelector, allocate_remainder};
pub use types::Allocation;
