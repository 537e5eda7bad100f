//! Change-making algorithms.
//!
//! Four variants over an unbounded supply of each denomination:
//! - `count_ways_to_make_change`: number of distinct multisets summing to the amount
//! - `min_change_count`: fewest pieces summing to the amount
//! - `make_change`: greedy, largest denomination first, may be suboptimal
//! - `make_optimal_change`: fewest pieces, exact change only
//!
//! The counting and optimal variants run dynamic programming over the
//! amount expressed in minimal units, bounded by `ChangeConfig::max_table_units`.

use coinage_shared::{ChangeConfig, Currency, Money};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use tracing::debug;

use super::denomination::{Denomination, IntegralDenomination, QuantifiedDenomination, aggregate};
use super::error::ChangeError;
use super::solution::{ChangeSolution, OptimalChangeSolution};

/// Distinct denominations that fit the target, largest first, in minimal units.
struct Table {
    target: usize,
    coins: Vec<(usize, Denomination)>,
}

/// Change engine bound to a table-size configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChangeMaker {
    config: ChangeConfig,
}

impl ChangeMaker {
    /// Creates an engine with the given limits.
    #[must_use]
    pub const fn new(config: ChangeConfig) -> Self {
        Self { config }
    }

    /// Counts the distinct multisets of denominations that sum exactly to `amount`.
    ///
    /// Returns 0 when no exact change exists or no denominations are given.
    pub fn count_ways_to_make_change(
        &self,
        amount: &Money,
        denominations: &[Denomination],
    ) -> Result<u128, ChangeError> {
        let Some(table) = self.table(amount, denominations)? else {
            return Ok(0);
        };

        let mut ways = vec![0u128; table.target + 1];
        ways[0] = 1;
        // Denominations in the outer loop so that orderings are not counted twice.
        for &(value, _) in &table.coins {
            for sub_amount in value..=table.target {
                ways[sub_amount] = ways[sub_amount]
                    .checked_add(ways[sub_amount - value])
                    .ok_or(ChangeError::CountOverflow)?;
            }
        }

        debug!(amount = %amount, ways = ways[table.target], "Counted ways to make change");
        Ok(ways[table.target])
    }

    /// Fewest pieces that sum exactly to `amount`, or 0 when impossible.
    pub fn min_change_count(
        &self,
        amount: &Money,
        denominations: &[Denomination],
    ) -> Result<u64, ChangeError> {
        let Some(table) = self.table(amount, denominations)? else {
            return Ok(0);
        };

        let (counts, _) = min_count_table(&table);
        let count = counts[table.target];
        Ok(if count == UNREACHABLE { 0 } else { count })
    }

    /// Greedy change: repeatedly takes the largest denomination that fits.
    ///
    /// Fast but not always minimal, e.g. 30 from {1, 15, 25} gives
    /// 1 × 25 + 5 × 1 instead of 2 × 15. Whatever cannot be covered is
    /// returned as the solution's remainder. Denominations must be whole
    /// minimal units, as for the exact variants; the amount need not be.
    pub fn make_change(
        &self,
        amount: &Money,
        denominations: &[Denomination],
    ) -> Result<ChangeSolution, ChangeError> {
        ensure_positive(amount)?;

        for &denomination in denominations {
            IntegralDenomination::new(denomination, amount.currency)?;
        }

        let mut remaining = amount.amount;
        let mut pieces = Vec::new();
        for denomination in distinct_descending(denominations) {
            if denomination.value() > remaining {
                continue;
            }
            let quantity = remaining
                .checked_div(denomination.value())
                .and_then(|quotient| quotient.trunc().to_u64())
                .ok_or(ChangeError::CountOverflow)?;
            remaining -= denomination.value() * Decimal::from(quantity);
            pieces.push(QuantifiedDenomination::new(denomination, quantity));
        }

        debug!(amount = %amount, remaining = %remaining, pieces = pieces.len(), "Made greedy change");
        Ok(ChangeSolution::new(
            pieces,
            Some(Money::new(remaining, amount.currency)),
        ))
    }

    /// Fewest-pieces exact change, or an empty solution when none exists.
    ///
    /// On ties the larger denomination is preferred. Pieces are listed by
    /// descending face value.
    pub fn make_optimal_change(
        &self,
        amount: &Money,
        denominations: &[Denomination],
    ) -> Result<OptimalChangeSolution, ChangeError> {
        let Some(table) = self.table(amount, denominations)? else {
            return Ok(OptimalChangeSolution::empty());
        };

        let (counts, choices) = min_count_table(&table);
        if counts[table.target] == UNREACHABLE {
            debug!(amount = %amount, "No exact change");
            return Ok(OptimalChangeSolution::empty());
        }

        let mut picked = Vec::new();
        let mut sub_amount = table.target;
        while let Some(index) = choices[sub_amount] {
            let (value, denomination) = table.coins[index];
            picked.push(denomination);
            sub_amount -= value;
        }

        let mut pieces = aggregate(picked);
        pieces.sort_by(|a, b| b.denomination().cmp(&a.denomination()));

        debug!(amount = %amount, pieces = counts[table.target], "Made optimal change");
        Ok(OptimalChangeSolution::new(pieces))
    }

    /// Validates input and builds the DP domain.
    ///
    /// `None` means the result is trivially empty: no denominations, or an
    /// amount that no whole number of minimal units can reach.
    fn table(
        &self,
        amount: &Money,
        denominations: &[Denomination],
    ) -> Result<Option<Table>, ChangeError> {
        ensure_positive(amount)?;

        if denominations.is_empty() {
            return Ok(None);
        }

        let currency = amount.currency;
        let integral = denominations
            .iter()
            .map(|&denomination| IntegralDenomination::new(denomination, currency))
            .collect::<Result<Vec<_>, _>>()?;

        if !currency.is_representable(amount.amount) {
            return Ok(None);
        }

        let target = self.target_units(amount.amount, currency)?;
        debug!(amount = %amount, target, coins = integral.len(), "Building change table");

        let coins = distinct_descending_integral(&integral)
            .into_iter()
            .filter_map(|coin| {
                usize::try_from(coin.integral_amount())
                    .ok()
                    .filter(|&value| value <= target)
                    .map(|value| (value, coin.denomination()))
            })
            .collect();

        Ok(Some(Table { target, coins }))
    }

    fn target_units(&self, amount: Decimal, currency: Currency) -> Result<usize, ChangeError> {
        let limit = self.config.max_table_units;
        let units = amount
            .checked_div(currency.minimal_unit())
            .and_then(|units| units.to_u64())
            .ok_or(ChangeError::TableTooLarge { units: u64::MAX, limit })?;

        if units > limit {
            return Err(ChangeError::TableTooLarge { units, limit });
        }
        usize::try_from(units).map_err(|_| ChangeError::TableTooLarge { units, limit })
    }
}

const UNREACHABLE: u64 = u64::MAX;

/// Minimum piece count per sub-amount, plus the coin index that achieved it.
fn min_count_table(table: &Table) -> (Vec<u64>, Vec<Option<usize>>) {
    let mut counts = vec![UNREACHABLE; table.target + 1];
    let mut choices = vec![None; table.target + 1];
    counts[0] = 0;

    for sub_amount in 1..=table.target {
        for (index, &(value, _)) in table.coins.iter().enumerate() {
            if value > sub_amount || counts[sub_amount - value] == UNREACHABLE {
                continue;
            }
            let candidate = counts[sub_amount - value] + 1;
            if candidate < counts[sub_amount] {
                counts[sub_amount] = candidate;
                choices[sub_amount] = Some(index);
            }
        }
    }

    (counts, choices)
}

fn ensure_positive(amount: &Money) -> Result<(), ChangeError> {
    if amount.is_positive() {
        Ok(())
    } else {
        Err(ChangeError::NonPositiveAmount(*amount))
    }
}

fn distinct_descending(denominations: &[Denomination]) -> Vec<Denomination> {
    let mut sorted = denominations.to_vec();
    sorted.sort_unstable_by(|a, b| b.cmp(a));
    sorted.dedup();
    sorted
}

fn distinct_descending_integral(coins: &[IntegralDenomination]) -> Vec<IntegralDenomination> {
    let mut sorted = coins.to_vec();
    sorted.sort_unstable_by(|a, b| b.integral_amount().cmp(&a.integral_amount()));
    sorted.dedup_by_key(|coin| coin.integral_amount());
    sorted
}

/// [`ChangeMaker::count_ways_to_make_change`] with the default configuration.
pub fn count_ways_to_make_change(
    amount: &Money,
    denominations: &[Denomination],
) -> Result<u128, ChangeError> {
    ChangeMaker::default().count_ways_to_make_change(amount, denominations)
}

/// [`ChangeMaker::min_change_count`] with the default configuration.
pub fn min_change_count(amount: &Money, denominations: &[Denomination]) -> Result<u64, ChangeError> {
    ChangeMaker::default().min_change_count(amount, denominations)
}

/// [`ChangeMaker::make_change`] with the default configuration.
pub fn make_change(
    amount: &Money,
    denominations: &[Denomination],
) -> Result<ChangeSolution, ChangeError> {
    ChangeMaker::default().make_change(amount, denominations)
}

/// [`ChangeMaker::make_optimal_change`] with the default configuration.
pub fn make_optimal_change(
    amount: &Money,
    denominations: &[Denomination],
) -> Result<OptimalChangeSolution, ChangeError> {
    ChangeMaker::default().make_optimal_change(amount, denominations)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    fn usd(amount: Decimal) -> Money {
        Money::new(amount, Currency::Usd)
    }

    fn denominations(values: &[Decimal]) -> Vec<Denomination> {
        values
            .iter()
            .map(|&value| Denomination::new(value).unwrap())
            .collect()
    }

    fn rendered(pieces: &[QuantifiedDenomination]) -> Vec<String> {
        pieces.iter().map(ToString::to_string).collect()
    }

    #[rstest]
    #[case(dec!(4), &[dec!(1), dec!(2), dec!(3)], 4)]
    #[case(dec!(10), &[dec!(2), dec!(5), dec!(3), dec!(6)], 5)]
    #[case(dec!(5), &[dec!(1), dec!(2), dec!(5)], 4)]
    #[case(dec!(3), &[dec!(2)], 0)]
    #[case(dec!(1), &[dec!(1)], 1)]
    fn test_count_ways(#[case] amount: Decimal, #[case] values: &[Decimal], #[case] expected: u128) {
        let ways = count_ways_to_make_change(&usd(amount), &denominations(values)).unwrap();
        assert_eq!(ways, expected);
    }

    #[rstest]
    #[case(dec!(30), &[dec!(1), dec!(15), dec!(25)], 2)]
    #[case(dec!(11), &[dec!(1), dec!(5), dec!(6), dec!(9)], 2)]
    #[case(dec!(7), &[dec!(2), dec!(4)], 0)]
    #[case(dec!(25), &[dec!(25)], 1)]
    fn test_min_change_count(
        #[case] amount: Decimal,
        #[case] values: &[Decimal],
        #[case] expected: u64,
    ) {
        let count = min_change_count(&usd(amount), &denominations(values)).unwrap();
        assert_eq!(count, expected);
    }

    #[test]
    fn test_greedy_vs_optimal_gap() {
        let amount = usd(dec!(30));
        let coins = denominations(&[dec!(1), dec!(15), dec!(25)]);

        let greedy = make_change(&amount, &coins).unwrap();
        assert_eq!(rendered(greedy.denominations()), ["1 * 25", "5 * 1"]);
        assert_eq!(greedy.total_count(), 6);
        assert!(!greedy.is_partial());
        assert!(greedy.remainder().is_none());

        let optimal = make_optimal_change(&amount, &coins).unwrap();
        assert_eq!(rendered(optimal.denominations()), ["2 * 15"]);
        assert_eq!(optimal.total_count(), 2);
        assert!(optimal.total_count() < greedy.total_count());
    }

    #[test]
    fn test_greedy_partial() {
        let solution = make_change(&usd(dec!(0.33)), &denominations(&[dec!(0.25), dec!(0.05)])).unwrap();
        assert_eq!(rendered(solution.denominations()), ["1 * 0.25", "1 * 0.05"]);
        assert!(solution.is_partial());
        assert_eq!(solution.remainder(), Some(&usd(dec!(0.03))));
    }

    #[test]
    fn test_greedy_nothing_fits() {
        let solution = make_change(&usd(dec!(0.5)), &denominations(&[dec!(1), dec!(2)])).unwrap();
        assert!(!solution.is_solution());
        assert!(solution.is_partial());
        assert_eq!(solution.remainder(), Some(&usd(dec!(0.5))));
    }

    #[test]
    fn test_optimal_has_no_partial_result() {
        let solution = make_optimal_change(&usd(dec!(7)), &denominations(&[dec!(2), dec!(4)])).unwrap();
        assert!(!solution.is_solution());
        assert_eq!(solution.total_count(), 0);
    }

    #[test]
    fn test_single_denomination_equal_to_amount() {
        let amount = usd(dec!(20));
        let coins = denominations(&[dec!(20), dec!(50)]);

        assert_eq!(rendered(make_change(&amount, &coins).unwrap().denominations()), ["1 * 20"]);
        assert_eq!(
            rendered(make_optimal_change(&amount, &coins).unwrap().denominations()),
            ["1 * 20"]
        );
        assert_eq!(count_ways_to_make_change(&amount, &coins).unwrap(), 1);
        assert_eq!(min_change_count(&amount, &coins).unwrap(), 1);
    }

    #[test]
    fn test_empty_denominations() {
        let amount = usd(dec!(5));
        assert_eq!(count_ways_to_make_change(&amount, &[]).unwrap(), 0);
        assert_eq!(min_change_count(&amount, &[]).unwrap(), 0);
        assert!(!make_optimal_change(&amount, &[]).unwrap().is_solution());

        let greedy = make_change(&amount, &[]).unwrap();
        assert!(!greedy.is_solution());
        assert_eq!(greedy.remainder(), Some(&amount));
    }

    #[rstest]
    #[case(dec!(0))]
    #[case(dec!(-5))]
    fn test_non_positive_amount_rejected(#[case] amount: Decimal) {
        let money = usd(amount);
        let coins = denominations(&[dec!(1)]);

        assert_eq!(
            count_ways_to_make_change(&money, &coins),
            Err(ChangeError::NonPositiveAmount(money))
        );
        assert_eq!(
            min_change_count(&money, &coins),
            Err(ChangeError::NonPositiveAmount(money))
        );
        assert!(matches!(make_change(&money, &coins), Err(ChangeError::NonPositiveAmount(_))));
        assert!(matches!(
            make_optimal_change(&money, &coins),
            Err(ChangeError::NonPositiveAmount(_))
        ));
        // Empty denominations do not bypass the amount check.
        assert!(make_change(&money, &[]).is_err());
    }

    #[test]
    fn test_fractional_denominations() {
        let amount = usd(dec!(0.30));
        let coins = denominations(&[dec!(0.01), dec!(0.10), dec!(0.25)]);

        let optimal = make_optimal_change(&amount, &coins).unwrap();
        assert_eq!(rendered(optimal.denominations()), ["3 * 0.1"]);
        assert_eq!(min_change_count(&amount, &coins).unwrap(), 3);

        let greedy = make_change(&amount, &coins).unwrap();
        assert_eq!(rendered(greedy.denominations()), ["1 * 0.25", "5 * 0.01"]);
    }

    #[test]
    fn test_duplicate_denominations_collapse() {
        let coins = denominations(&[dec!(1), dec!(2), dec!(2.0), dec!(3)]);
        assert_eq!(count_ways_to_make_change(&usd(dec!(4)), &coins).unwrap(), 4);
    }

    #[test]
    fn test_unrepresentable_amount_has_no_exact_change() {
        let amount = usd(dec!(1.005));
        let coins = denominations(&[dec!(0.01)]);
        assert_eq!(count_ways_to_make_change(&amount, &coins).unwrap(), 0);
        assert!(!make_optimal_change(&amount, &coins).unwrap().is_solution());
    }

    #[test]
    fn test_unrepresentable_denomination_rejected() {
        let coins = denominations(&[dec!(0.25), dec!(0.005)]);
        let expected = ChangeError::NotRepresentable {
            value: dec!(0.005),
            currency: Currency::Usd,
        };

        assert_eq!(min_change_count(&usd(dec!(1)), &coins), Err(expected.clone()));
        assert_eq!(count_ways_to_make_change(&usd(dec!(1)), &coins), Err(expected.clone()));
        assert_eq!(make_optimal_change(&usd(dec!(1)), &coins), Err(expected.clone()));
        assert_eq!(make_change(&usd(dec!(1)), &coins), Err(expected));
    }

    #[test]
    fn test_greedy_accepts_unrepresentable_amount() {
        let solution = make_change(&usd(dec!(1.005)), &denominations(&[dec!(1)])).unwrap();
        assert_eq!(rendered(solution.denominations()), ["1 * 1"]);
        assert_eq!(solution.remainder(), Some(&usd(dec!(0.005))));
    }

    #[test]
    fn test_huge_amount_exceeds_table() {
        let amount = usd(Decimal::from_i128_with_scale(10_i128.pow(27), 0));
        let coins = denominations(&[dec!(1)]);
        let too_large = ChangeError::TableTooLarge {
            units: u64::MAX,
            limit: 1_000_000,
        };

        assert_eq!(min_change_count(&amount, &coins), Err(too_large.clone()));
        assert_eq!(count_ways_to_make_change(&amount, &coins), Err(too_large.clone()));
        assert_eq!(make_optimal_change(&amount, &coins), Err(too_large));
    }

    #[test]
    fn test_greedy_quantity_overflow() {
        let amount = Money::new(Decimal::MAX, Currency::Kwd);
        let coins = denominations(&[dec!(0.001)]);
        assert_eq!(make_change(&amount, &coins), Err(ChangeError::CountOverflow));

        // Fits a Decimal quotient but not a u64 piece count.
        let amount = usd(Decimal::from_i128_with_scale(10_i128.pow(20), 0));
        let coins = denominations(&[dec!(1)]);
        assert_eq!(make_change(&amount, &coins), Err(ChangeError::CountOverflow));
    }

    #[test]
    fn test_table_limit() {
        let maker = ChangeMaker::new(ChangeConfig { max_table_units: 1_000 });
        let coins = denominations(&[dec!(1)]);

        assert!(maker.min_change_count(&usd(dec!(10)), &coins).is_ok());
        assert_eq!(
            maker.min_change_count(&usd(dec!(10.01)), &coins),
            Err(ChangeError::TableTooLarge {
                units: 1_001,
                limit: 1_000,
            })
        );
        // Greedy change needs no table.
        assert!(maker.make_change(&usd(dec!(10_000)), &coins).is_ok());
    }

    #[test]
    fn test_yen_has_whole_units() {
        let amount = Money::new(dec!(1500), Currency::Jpy);
        let coins = denominations(&[dec!(1000), dec!(500), dec!(100)]);
        assert_eq!(min_change_count(&amount, &coins).unwrap(), 2);
        assert_eq!(count_ways_to_make_change(&amount, &coins).unwrap(), 6);
    }
}
