//! Denominations usable for making change.

use coinage_shared::Currency;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::Serialize;

use super::error::ChangeError;

/// A positive face value, e.g. a coin or a note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Denomination(Decimal);

impl Denomination {
    /// Creates a denomination, rejecting zero and negative values.
    pub fn new(value: Decimal) -> Result<Self, ChangeError> {
        if value <= Decimal::ZERO {
            return Err(ChangeError::NonPositiveDenomination(value));
        }
        Ok(Self(value))
    }

    /// Face value.
    #[must_use]
    pub const fn value(self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for Denomination {
    type Error = ChangeError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl std::fmt::Display for Denomination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.0.normalize(), f)
    }
}

/// A denomination expressed in whole minimal units of a currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IntegralDenomination {
    denomination: Denomination,
    integral_amount: u64,
}

impl IntegralDenomination {
    /// Converts `denomination` into minimal units of `currency`, e.g. 0.25 USD → 25.
    pub fn new(denomination: Denomination, currency: Currency) -> Result<Self, ChangeError> {
        let not_representable = || ChangeError::NotRepresentable {
            value: denomination.value(),
            currency,
        };

        if !currency.is_representable(denomination.value()) {
            return Err(not_representable());
        }

        let integral_amount = denomination
            .value()
            .checked_div(currency.minimal_unit())
            .and_then(|units| units.to_u64())
            .ok_or_else(not_representable)?;

        Ok(Self {
            denomination,
            integral_amount,
        })
    }

    /// The underlying denomination.
    #[must_use]
    pub const fn denomination(&self) -> Denomination {
        self.denomination
    }

    /// Face value in minimal units.
    #[must_use]
    pub const fn integral_amount(&self) -> u64 {
        self.integral_amount
    }
}

/// A denomination and how many pieces of it are used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct QuantifiedDenomination {
    denomination: Denomination,
    quantity: u64,
}

impl QuantifiedDenomination {
    /// Pairs a denomination with a piece count.
    #[must_use]
    pub const fn new(denomination: Denomination, quantity: u64) -> Self {
        Self {
            denomination,
            quantity,
        }
    }

    /// The denomination.
    #[must_use]
    pub const fn denomination(&self) -> Denomination {
        self.denomination
    }

    /// Number of pieces.
    #[must_use]
    pub const fn quantity(&self) -> u64 {
        self.quantity
    }

    /// `value * quantity`.
    #[must_use]
    pub fn total_value(&self) -> Decimal {
        self.denomination.value() * Decimal::from(self.quantity)
    }
}

impl std::fmt::Display for QuantifiedDenomination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} * {}", self.quantity, self.denomination)
    }
}

/// Collapses repeated denominations into counts, keeping first-seen order.
pub fn aggregate<I>(denominations: I) -> Vec<QuantifiedDenomination>
where
    I: IntoIterator<Item = Denomination>,
{
    let mut aggregated: Vec<QuantifiedDenomination> = Vec::new();
    for denomination in denominations {
        match aggregated
            .iter_mut()
            .find(|quantified| quantified.denomination == denomination)
        {
            Some(quantified) => quantified.quantity += 1,
            None => aggregated.push(QuantifiedDenomination::new(denomination, 1)),
        }
    }
    aggregated
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    fn d(value: Decimal) -> Denomination {
        Denomination::new(value).unwrap()
    }

    #[rstest]
    #[case(dec!(0))]
    #[case(dec!(-1))]
    fn test_non_positive_rejected(#[case] value: Decimal) {
        assert_eq!(
            Denomination::new(value),
            Err(ChangeError::NonPositiveDenomination(value))
        );
    }

    #[rstest]
    #[case(dec!(0.25), Currency::Usd, 25)]
    #[case(dec!(20), Currency::Usd, 2000)]
    #[case(dec!(500), Currency::Jpy, 500)]
    #[case(dec!(0.005), Currency::Kwd, 5)]
    fn test_integral_amount(#[case] value: Decimal, #[case] currency: Currency, #[case] units: u64) {
        let integral = IntegralDenomination::new(d(value), currency).unwrap();
        assert_eq!(integral.integral_amount(), units);
        assert_eq!(integral.denomination(), d(value));
    }

    #[test]
    fn test_integral_requires_whole_units() {
        assert_eq!(
            IntegralDenomination::new(d(dec!(0.005)), Currency::Usd),
            Err(ChangeError::NotRepresentable {
                value: dec!(0.005),
                currency: Currency::Usd,
            })
        );
    }

    #[test]
    fn test_integral_amount_out_of_range() {
        assert_eq!(
            IntegralDenomination::new(d(Decimal::MAX), Currency::Kwd),
            Err(ChangeError::NotRepresentable {
                value: Decimal::MAX,
                currency: Currency::Kwd,
            })
        );
    }

    #[test]
    fn test_quantified_display() {
        assert_eq!(QuantifiedDenomination::new(d(dec!(3)), 2).to_string(), "2 * 3");
        assert_eq!(QuantifiedDenomination::new(d(dec!(0.50)), 1).to_string(), "1 * 0.5");
        assert_eq!(QuantifiedDenomination::new(d(dec!(20)), 3).total_value(), dec!(60));
    }

    #[test]
    fn test_aggregate_keeps_first_seen_order() {
        let aggregated = aggregate([d(dec!(5)), d(dec!(1)), d(dec!(5)), d(dec!(2)), d(dec!(1.0))]);
        assert_eq!(
            aggregated,
            [
                QuantifiedDenomination::new(d(dec!(5)), 2),
                QuantifiedDenomination::new(d(dec!(1)), 2),
                QuantifiedDenomination::new(d(dec!(2)), 1),
            ]
        );
    }

    #[test]
    fn test_aggregate_empty() {
        assert!(aggregate(Vec::new()).is_empty());
    }
}
