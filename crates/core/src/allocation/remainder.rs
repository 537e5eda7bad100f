//! Remainder distribution strategies.
//!
//! After an even or pro-rata split every share is a whole number of minimal
//! units, so the remainder is too. A [`RemainderSelector`] decides which
//! recipients receive those units, one unit per selected index.

use coinage_shared::Money;
use rand::Rng;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use tracing::{debug, trace};

use super::error::AllocationError;
use super::types::Allocation;

/// Picks which recipients receive one minimal unit of the remainder.
///
/// Implementations must return exactly `units` indices, each below
/// `recipients`. An index may repeat only when `units > recipients`.
pub trait RemainderSelector {
    /// Returns one recipient index per unit to hand out.
    fn select(&mut self, recipients: usize, units: usize) -> Vec<usize>;
}

/// Index 0 first, moving forward and wrapping around.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FirstToLast;

impl RemainderSelector for FirstToLast {
    fn select(&mut self, recipients: usize, units: usize) -> Vec<usize> {
        (0..units).map(|i| i % recipients).collect()
    }
}

/// Last index first, moving backward and wrapping around.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LastToFirst;

impl RemainderSelector for LastToFirst {
    fn select(&mut self, recipients: usize, units: usize) -> Vec<usize> {
        (0..units).map(|i| recipients - 1 - i % recipients).collect()
    }
}

/// Distinct recipients drawn uniformly at random from an injected generator.
///
/// When there are more units than recipients, everyone first receives
/// `units / recipients` full rounds.
#[derive(Debug, Clone)]
pub struct RandomOrder<R> {
    rng: R,
}

impl<R: Rng> RandomOrder<R> {
    /// Draws from `rng`.
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> RemainderSelector for RandomOrder<R> {
    fn select(&mut self, recipients: usize, units: usize) -> Vec<usize> {
        let rounds = units / recipients;
        let mut selected: Vec<usize> = (0..rounds).flat_map(|_| 0..recipients).collect();
        selected.extend(rand::seq::index::sample(
            &mut self.rng,
            recipients,
            units % recipients,
        ));
        selected
    }
}

impl<F> RemainderSelector for F
where
    F: FnMut(usize, usize) -> Vec<usize>,
{
    fn select(&mut self, recipients: usize, units: usize) -> Vec<usize> {
        self(recipients, units)
    }
}

/// Returns a new allocation with the remainder handed out unit by unit.
///
/// The unit carries the remainder's sign, so debts are distributed too.
/// A residue smaller than one minimal unit stays as remainder. A complete
/// allocation is returned unchanged.
///
/// # Errors
///
/// - [`AllocationError::NoRecipients`] if there is something to hand out but no shares
/// - [`AllocationError::InvalidSelection`] if the selector breaks its contract
pub fn allocate_remainder<S>(
    allocation: &Allocation,
    selector: &mut S,
) -> Result<Allocation, AllocationError>
where
    S: RemainderSelector + ?Sized,
{
    let remainder = *allocation.remainder();
    let currency = remainder.currency;
    let unit = currency.minimal_unit();

    let units = remainder
        .amount
        .abs()
        .checked_div(unit)
        .and_then(|units| units.trunc().to_usize())
        .ok_or(AllocationError::RemainderTooLarge(remainder))?;

    if units == 0 {
        trace!(remainder = %remainder, "No whole minimal unit to distribute");
        return Ok(allocation.clone());
    }

    let recipients = allocation.len();
    if recipients == 0 {
        return Err(AllocationError::NoRecipients(remainder));
    }

    let selected = selector.select(recipients, units);
    if selected.len() != units || selected.iter().any(|&index| index >= recipients) {
        return Err(AllocationError::InvalidSelection {
            expected: units,
            recipients,
            actual: selected,
        });
    }

    let step = if remainder.is_negative() { -unit } else { unit };
    let mut amounts: Vec<Decimal> = allocation.iter().map(|share| share.amount).collect();
    for index in selected {
        amounts[index] += step;
    }

    debug!(remainder = %remainder, units, recipients, "Distributed remainder");

    let shares = amounts
        .into_iter()
        .map(|amount| Money::new(amount, currency))
        .collect();
    Allocation::new(*allocation.allocatable(), shares)
}
