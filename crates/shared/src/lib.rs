//! Shared types, errors, and configuration for Coinage.
//!
//! This crate provides common types used across all other crates:
//! - Money and the currency catalog with decimal precision
//! - Money error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::{AppConfig, ChangeConfig, LoggingConfig};
pub use error::{MoneyError, MoneyResult};
pub use types::{Currency, CurrencyInfo, Money};
