//! Currency catalog.
//!
//! Every supported ISO 4217 code maps to static metadata through a constant
//! table indexed by the enum ordinal. The table is read-only and never
//! mutated after startup.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::error::MoneyError;

/// ISO 4217 currency codes supported by the system.
///
/// Variant order must match `CATALOG`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// US Dollar
    Usd,
    /// Euro
    Eur,
    /// Pound Sterling
    Gbp,
    /// Swiss Franc
    Chf,
    /// Danish Krone
    Dkk,
    /// Swedish Krona
    Sek,
    /// Norwegian Krone
    Nok,
    /// Singapore Dollar
    Sgd,
    /// Indonesian Rupiah
    Idr,
    /// Japanese Yen
    Jpy,
    /// Kuwaiti Dinar
    Kwd,
    /// Bahraini Dinar
    Bhd,
}

/// Static metadata for a currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrencyInfo {
    /// ISO 4217 alphabetic code.
    pub code: &'static str,
    /// English name.
    pub name: &'static str,
    /// Number of digits after the decimal point of the minimal unit.
    pub decimal_places: u32,
}

static CATALOG: [CurrencyInfo; 12] = [
    CurrencyInfo { code: "USD", name: "US Dollar", decimal_places: 2 },
    CurrencyInfo { code: "EUR", name: "Euro", decimal_places: 2 },
    CurrencyInfo { code: "GBP", name: "Pound Sterling", decimal_places: 2 },
    CurrencyInfo { code: "CHF", name: "Swiss Franc", decimal_places: 2 },
    CurrencyInfo { code: "DKK", name: "Danish Krone", decimal_places: 2 },
    CurrencyInfo { code: "SEK", name: "Swedish Krona", decimal_places: 2 },
    CurrencyInfo { code: "NOK", name: "Norwegian Krone", decimal_places: 2 },
    CurrencyInfo { code: "SGD", name: "Singapore Dollar", decimal_places: 2 },
    // IDR is officially 2 digits but sub-rupiah amounts are not in circulation.
    CurrencyInfo { code: "IDR", name: "Indonesian Rupiah", decimal_places: 0 },
    CurrencyInfo { code: "JPY", name: "Yen", decimal_places: 0 },
    CurrencyInfo { code: "KWD", name: "Kuwaiti Dinar", decimal_places: 3 },
    CurrencyInfo { code: "BHD", name: "Bahraini Dinar", decimal_places: 3 },
];

impl Currency {
    /// Every currency in catalog order.
    pub const ALL: [Self; 12] = [
        Self::Usd,
        Self::Eur,
        Self::Gbp,
        Self::Chf,
        Self::Dkk,
        Self::Sek,
        Self::Nok,
        Self::Sgd,
        Self::Idr,
        Self::Jpy,
        Self::Kwd,
        Self::Bhd,
    ];

    /// Returns the static metadata for this currency.
    #[must_use]
    pub fn info(self) -> &'static CurrencyInfo {
        &CATALOG[self as usize]
    }

    /// ISO 4217 alphabetic code.
    #[must_use]
    pub fn code(self) -> &'static str {
        self.info().code
    }

    /// Digits after the decimal point of the minimal unit.
    #[must_use]
    pub fn decimal_places(self) -> u32 {
        self.info().decimal_places
    }

    /// Smallest non-zero representable amount, e.g. `0.01` for USD or `1` for JPY.
    #[must_use]
    pub fn minimal_unit(self) -> Decimal {
        Decimal::new(1, self.decimal_places())
    }

    /// Rounds to the currency's decimal places using banker's rounding.
    #[must_use]
    pub fn round(self, amount: Decimal) -> Decimal {
        self.round_with(amount, RoundingStrategy::MidpointNearestEven)
    }

    /// Rounds to the currency's decimal places using the given strategy.
    #[must_use]
    pub fn round_with(self, amount: Decimal, strategy: RoundingStrategy) -> Decimal {
        amount.round_dp_with_strategy(self.decimal_places(), strategy)
    }

    /// Returns true if `amount` is a whole number of minimal units.
    ///
    /// Compares decimal scales, so it holds for amounts too large to be
    /// counted in minimal units.
    #[must_use]
    pub fn is_representable(self, amount: Decimal) -> bool {
        amount.normalize().scale() <= self.decimal_places()
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for Currency {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|currency| currency.code().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| MoneyError::UnknownCurrency(s.to_string()))
    }
}
