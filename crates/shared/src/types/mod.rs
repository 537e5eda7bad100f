//! Common types used across the workspace.

pub mod currency;
pub mod money;

pub use currency::{Currency, CurrencyInfo};
pub use money::Money;
