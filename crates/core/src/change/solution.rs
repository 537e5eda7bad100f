//! Change-making results.

use coinage_shared::Money;
use serde::Serialize;

use super::denomination::QuantifiedDenomination;

/// Result of greedy change-making: the pieces used plus what is left over.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChangeSolution {
    denominations: Vec<QuantifiedDenomination>,
    remainder: Option<Money>,
}

impl ChangeSolution {
    /// Creates a solution. A zero remainder is stored as `None`.
    #[must_use]
    pub fn new(denominations: Vec<QuantifiedDenomination>, remainder: Option<Money>) -> Self {
        Self {
            denominations,
            remainder: remainder.filter(|money| !money.is_zero()),
        }
    }

    /// Pieces used, one entry per distinct denomination.
    #[must_use]
    pub fn denominations(&self) -> &[QuantifiedDenomination] {
        &self.denominations
    }

    /// Amount that could not be covered, if any.
    #[must_use]
    pub const fn remainder(&self) -> Option<&Money> {
        self.remainder.as_ref()
    }

    /// True when at least one denomination was used.
    #[must_use]
    pub fn is_solution(&self) -> bool {
        !self.denominations.is_empty()
    }

    /// True when a positive remainder is left.
    #[must_use]
    pub fn is_partial(&self) -> bool {
        self.remainder.is_some_and(|money| money.is_positive())
    }

    /// Total number of pieces.
    #[must_use]
    pub fn total_count(&self) -> u64 {
        self.denominations.iter().map(QuantifiedDenomination::quantity).sum()
    }
}

impl std::fmt::Display for ChangeSolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write_pieces(f, &self.denominations)?;
        if let Some(remainder) = &self.remainder {
            write!(f, " (remainder {remainder})")?;
        }
        Ok(())
    }
}

/// Result of optimal change-making: the fewest pieces that make exact change.
///
/// Empty when no exact solution exists; never partial.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OptimalChangeSolution {
    denominations: Vec<QuantifiedDenomination>,
}

impl OptimalChangeSolution {
    /// Wraps an exact solution.
    #[must_use]
    pub const fn new(denominations: Vec<QuantifiedDenomination>) -> Self {
        Self { denominations }
    }

    /// The "no exact change" result.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            denominations: Vec::new(),
        }
    }

    /// Pieces used, one entry per distinct denomination.
    #[must_use]
    pub fn denominations(&self) -> &[QuantifiedDenomination] {
        &self.denominations
    }

    /// True when exact change was found.
    #[must_use]
    pub fn is_solution(&self) -> bool {
        !self.denominations.is_empty()
    }

    /// Total number of pieces.
    #[must_use]
    pub fn total_count(&self) -> u64 {
        self.denominations.iter().map(QuantifiedDenomination::quantity).sum()
    }
}

impl std::fmt::Display for OptimalChangeSolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write_pieces(f, &self.denominations)
    }
}

fn write_pieces(
    f: &mut std::fmt::Formatter<'_>,
    pieces: &[QuantifiedDenomination],
) -> std::fmt::Result {
    for (i, piece) in pieces.iter().enumerate() {
        if i > 0 {
            f.write_str(" | ")?;
        }
        write!(f, "{piece}")?;
    }
    Ok(())
}
