//! Property-based tests for allocation.
//!
//! - Allocation conservation: total + remainder == allocatable
//! - Remainder strategies complete the allocation
//! - First-to-last and last-to-first agree on totals

use coinage_shared::{Currency, Money};
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rust_decimal::Decimal;

use super::{
    Allocation, EvenAllocator, FirstToLast, LastToFirst, ProRataAllocator, RandomOrder,
    RatioCollection,
};

/// Strategy to generate a currency with 0, 2 or 3 decimal places.
fn currency() -> impl Strategy<Value = Currency> {
    prop_oneof![
        Just(Currency::Usd),
        Just(Currency::Jpy),
        Just(Currency::Kwd),
    ]
}

/// Strategy to generate signed amounts with up to 3 decimal places.
fn signed_amount() -> impl Strategy<Value = Decimal> {
    (-100_000_000i64..100_000_000i64).prop_map(|units| Decimal::new(units, 3))
}

/// Strategy to generate recipient counts (1 to 50).
fn recipients() -> impl Strategy<Value = usize> {
    1usize..50
}

/// Strategy to generate ratios (in thousandths) that sum to exactly one.
fn ratios_summing_to_one() -> impl Strategy<Value = Vec<Decimal>> {
    prop::collection::vec(0u32..1000, 1..8).prop_map(|weights| {
        let total: u32 = weights.iter().sum::<u32>().max(1);
        let mut thousandths: Vec<u32> = weights.iter().map(|w| w * 1000 / total).collect();
        let assigned: u32 = thousandths.iter().sum();
        thousandths[0] += 1000 - assigned;
        thousandths
            .into_iter()
            .map(|t| Decimal::new(i64::from(t), 3))
            .collect()
    })
}

fn assert_conserved(allocation: &Allocation) -> Result<(), TestCaseError> {
    let rebuilt = allocation
        .total_allocated()
        .plus(allocation.remainder())
        .map_err(|e| TestCaseError::fail(e.to_string()))?;
    prop_assert_eq!(rebuilt, *allocation.allocatable());
    prop_assert!(allocation.total_allocated().amount.abs() <= allocation.allocatable().amount.abs());
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Even allocation conserves the allocatable amount.
    #[test]
    fn prop_even_allocation_conserves(
        amount in signed_amount(),
        currency in currency(),
        count in recipients(),
    ) {
        let allocation = EvenAllocator::new(Money::new(amount, currency)).allocate(count).unwrap();
        prop_assert_eq!(allocation.len(), count);
        assert_conserved(&allocation)?;
    }

    /// Pro-rata allocation conserves and keeps one share per ratio.
    #[test]
    fn prop_pro_rata_allocation_conserves(
        amount in signed_amount(),
        currency in currency(),
        ratios in ratios_summing_to_one(),
    ) {
        let ratios = RatioCollection::new(ratios).unwrap();
        let allocation = ProRataAllocator::new(Money::new(amount, currency)).allocate(&ratios).unwrap();
        prop_assert_eq!(allocation.len(), ratios.len());
        assert_conserved(&allocation)?;
    }

    /// Every strategy completes a representable remainder.
    #[test]
    fn prop_remainder_strategies_complete(
        amount in signed_amount(),
        currency in currency(),
        ratios in ratios_summing_to_one(),
        seed in any::<u64>(),
    ) {
        let money = Money::new(amount, currency).round();
        let ratios = RatioCollection::new(ratios).unwrap();
        let allocation = ProRataAllocator::new(money).allocate(&ratios).unwrap();

        let first = allocation.distribute_remainder(&mut FirstToLast).unwrap();
        let last = allocation.distribute_remainder(&mut LastToFirst).unwrap();
        let random = allocation
            .distribute_remainder(&mut RandomOrder::new(StdRng::seed_from_u64(seed)))
            .unwrap();

        for result in [&first, &last, &random] {
            prop_assert!(result.is_complete(), "not complete: {}", result);
            assert_conserved(result)?;
        }
        prop_assert_eq!(first.total_allocated(), last.total_allocated());
    }

    /// Even split followed by first-to-last differs by at most one unit between shares.
    #[test]
    fn prop_even_split_is_fair(
        amount in signed_amount(),
        count in recipients(),
    ) {
        let money = Money::new(amount, Currency::Usd).round();
        let allocation = EvenAllocator::new(money).allocate(count).unwrap();
        let result = allocation.distribute_remainder(&mut FirstToLast).unwrap();

        let max = result.iter().map(|m| m.amount).max().unwrap();
        let min = result.iter().map(|m| m.amount).min().unwrap();
        prop_assert!(max - min <= Currency::Usd.minimal_unit());
    }
}
