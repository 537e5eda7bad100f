//! Ratios and validated ratio collections.

use coinage_shared::Money;
use rand::RngCore;
use rand::seq::SliceRandom;
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::debug;

use super::error::AllocationError;

/// A fraction in the closed range [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Ratio(Decimal);

impl Ratio {
    /// The whole.
    pub const ONE: Self = Self(Decimal::ONE);

    /// Creates a ratio, rejecting values outside [0, 1].
    pub fn new(value: Decimal) -> Result<Self, AllocationError> {
        if value < Decimal::ZERO || value > Decimal::ONE {
            return Err(AllocationError::RatioOutOfRange(value));
        }
        Ok(Self(value))
    }

    /// The raw fraction.
    #[must_use]
    pub const fn value(self) -> Decimal {
        self.0
    }

    /// Multiplies `money` by this ratio without rounding.
    #[must_use]
    pub fn apply_to(self, money: &Money) -> Money {
        money.times(self.0)
    }
}

impl TryFrom<Decimal> for Ratio {
    type Error = AllocationError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl std::fmt::Display for Ratio {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.0, f)
    }
}

/// How a [`RatioCollection`] orders its ratios, applied once at construction.
#[derive(Default)]
pub enum AllocationOrdering<'a> {
    /// Keep input order.
    #[default]
    AsIs,
    /// Smallest ratio first.
    Ascending,
    /// Largest ratio first.
    Descending,
    /// Shuffle with the given generator.
    Random(&'a mut dyn RngCore),
    /// Caller-supplied reordering; must return a permutation of its input.
    Custom(Box<dyn FnOnce(Vec<Ratio>) -> Vec<Ratio> + 'a>),
}

impl AllocationOrdering<'_> {
    fn apply(self, mut ratios: Vec<Ratio>) -> Result<Vec<Ratio>, AllocationError> {
        match self {
            Self::AsIs => Ok(ratios),
            Self::Ascending => {
                ratios.sort_unstable();
                Ok(ratios)
            }
            Self::Descending => {
                ratios.sort_unstable_by(|a, b| b.cmp(a));
                Ok(ratios)
            }
            Self::Random(rng) => {
                ratios.shuffle(rng);
                Ok(ratios)
            }
            Self::Custom(transform) => {
                let mut expected = ratios.clone();
                let reordered = transform(ratios);

                let mut actual = reordered.clone();
                expected.sort_unstable();
                actual.sort_unstable();
                if expected != actual {
                    return Err(AllocationError::NotAPermutation);
                }
                Ok(reordered)
            }
        }
    }
}

impl std::fmt::Debug for AllocationOrdering<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::AsIs => "AsIs",
            Self::Ascending => "Ascending",
            Self::Descending => "Descending",
            Self::Random(_) => "Random",
            Self::Custom(_) => "Custom",
        };
        f.write_str(name)
    }
}

/// Non-empty ratios that sum to exactly one.
///
/// Keeps both the caller's input order and the policy-ordered view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RatioCollection {
    original: Vec<Ratio>,
    ordered: Vec<Ratio>,
}

impl RatioCollection {
    /// Validates `values` and keeps them in input order.
    pub fn new<I>(values: I) -> Result<Self, AllocationError>
    where
        I: IntoIterator<Item = Decimal>,
    {
        Self::with_ordering(values, AllocationOrdering::AsIs)
    }

    /// Validates `values` and builds the ordered view with `ordering`.
    ///
    /// The sum is checked exactly; there is no tolerance.
    pub fn with_ordering<I>(
        values: I,
        ordering: AllocationOrdering<'_>,
    ) -> Result<Self, AllocationError>
    where
        I: IntoIterator<Item = Decimal>,
    {
        let original = values
            .into_iter()
            .map(Ratio::new)
            .collect::<Result<Vec<_>, _>>()?;

        if original.is_empty() {
            return Err(AllocationError::EmptyRatios);
        }

        let sum: Decimal = original.iter().map(|ratio| ratio.value()).sum();
        if sum != Decimal::ONE {
            return Err(AllocationError::RatioSumNotOne { sum });
        }

        debug!(count = original.len(), ordering = ?ordering, "Building ratio collection");
        let ordered = ordering.apply(original.clone())?;

        Ok(Self { original, ordered })
    }

    /// Ratios in input order.
    #[must_use]
    pub fn original(&self) -> &[Ratio] {
        &self.original
    }

    /// Ratios in policy order.
    #[must_use]
    pub fn ordered(&self) -> &[Ratio] {
        &self.ordered
    }

    /// Number of ratios.
    #[must_use]
    pub fn len(&self) -> usize {
        self.original.len()
    }

    /// Always false; construction rejects empty input.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.original.is_empty()
    }

    /// Iterates in input order.
    pub fn iter(&self) -> std::slice::Iter<'_, Ratio> {
        self.original.iter()
    }
}

impl<'a> IntoIterator for &'a RatioCollection {
    type Item = &'a Ratio;
    type IntoIter = std::slice::Iter<'a, Ratio>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
