//! Change-making over a set of denominations.
//!
//! Amounts and denominations are converted to whole minimal units of the
//! amount's currency before any exact-change search.

mod denomination;
mod engine;
mod error;
mod solution;

#[cfg(test)]
mod props;

pub use denomination::{Denomination, IntegralDenomination, QuantifiedDenomination, aggregate};
pub use engine::{
    ChangeMaker, count_ways_to_make_change, make_change, make_optimal_change, min_change_count,
};
pub use error::ChangeError;
pub use solution::{ChangeSolution, OptimalChangeSolution};
