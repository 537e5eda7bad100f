//! Property-based tests for change-making.
//!
//! - Greedy conservation: pieces + remainder == amount
//! - Optimal change uses exactly `min_change_count` pieces
//! - Optimal never uses more pieces than an exact greedy result

use coinage_shared::{Currency, Money};
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::{
    Denomination, count_ways_to_make_change, make_change, make_optimal_change, min_change_count,
};

/// Strategy to generate amounts between 0.01 and 20.00 USD.
fn amount() -> impl Strategy<Value = Money> {
    (1i64..2_000).prop_map(|cents| Money::new(Decimal::new(cents, 2), Currency::Usd))
}

/// Strategy to generate up to 6 coin values between 0.01 and 5.00.
fn coins() -> impl Strategy<Value = Vec<Denomination>> {
    prop::collection::vec(1i64..500, 1..6).prop_map(|cents| {
        cents
            .into_iter()
            .filter_map(|c| Denomination::new(Decimal::new(c, 2)).ok())
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Greedy pieces plus remainder always add back up to the amount.
    #[test]
    fn prop_greedy_conserves(amount in amount(), coins in coins()) {
        let solution = make_change(&amount, &coins).unwrap();
        let covered: Decimal = solution.denominations().iter().map(|p| p.total_value()).sum();
        let left = solution.remainder().map_or(Decimal::ZERO, |money| money.amount);

        prop_assert_eq!(covered + left, amount.amount);
        prop_assert!(left >= Decimal::ZERO);
    }

    /// Optimal change is exact and uses the minimal piece count.
    #[test]
    fn prop_optimal_matches_min_count(amount in amount(), coins in coins()) {
        let optimal = make_optimal_change(&amount, &coins).unwrap();
        let min = min_change_count(&amount, &coins).unwrap();

        prop_assert_eq!(optimal.total_count(), min);
        if optimal.is_solution() {
            let covered: Decimal = optimal.denominations().iter().map(|p| p.total_value()).sum();
            prop_assert_eq!(covered, amount.amount);
        }
    }

    /// Greedy is never better than optimal when it makes exact change.
    #[test]
    fn prop_optimal_not_worse_than_greedy(amount in amount(), coins in coins()) {
        let greedy = make_change(&amount, &coins).unwrap();
        let optimal = make_optimal_change(&amount, &coins).unwrap();

        if !greedy.is_partial() {
            prop_assert!(optimal.is_solution());
            prop_assert!(optimal.total_count() <= greedy.total_count());
        }
    }

    /// Exact change exists exactly when there is at least one way to make it.
    #[test]
    fn prop_ways_agree_with_min_count(amount in amount(), coins in coins()) {
        let ways = count_ways_to_make_change(&amount, &coins).unwrap();
        let min = min_change_count(&amount, &coins).unwrap();
        prop_assert_eq!(ways > 0, min > 0);
    }
}
