//! Command-line arguments.

use clap::{Args, Parser, Subcommand, ValueEnum};
use coinage_shared::Currency;
use rust_decimal::Decimal;

/// Split money and make change without losing a cent.
#[derive(Parser, Debug)]
#[command(name = "coinage", version)]
#[command(about = "Split money and make change without losing a cent", long_about = None)]
pub struct Cli {
    /// Seed for the random ordering and remainder strategies.
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Split an amount into equal parts.
    Even {
        #[command(flatten)]
        money: MoneyArgs,

        /// Number of recipients.
        #[arg(short, long)]
        parts: usize,

        /// How to hand out the leftover minimal units.
        #[arg(short, long, value_enum, default_value_t = RemainderArg::FirstToLast)]
        remainder: RemainderArg,
    },
    /// Split an amount by ratios that sum to one.
    Split {
        #[command(flatten)]
        money: MoneyArgs,

        /// Comma-separated ratios, e.g. 0.3,0.7.
        #[arg(long, value_delimiter = ',', required = true)]
        ratios: Vec<Decimal>,

        /// Ordering applied to the ratio view.
        #[arg(short, long, value_enum, default_value_t = OrderArg::AsIs)]
        order: OrderArg,

        /// How to hand out the leftover minimal units.
        #[arg(short, long, value_enum, default_value_t = RemainderArg::FirstToLast)]
        remainder: RemainderArg,
    },
    /// Make change from a set of denominations.
    Change {
        #[command(flatten)]
        money: MoneyArgs,

        /// Comma-separated face values, e.g. 25,10,5,1.
        #[arg(short, long, value_delimiter = ',', required = true)]
        denominations: Vec<Decimal>,

        /// Use the fewest pieces instead of the greedy algorithm.
        #[arg(long)]
        optimal: bool,
    },
    /// Count the ways to make exact change.
    Count {
        #[command(flatten)]
        money: MoneyArgs,

        /// Comma-separated face values.
        #[arg(short, long, value_delimiter = ',', required = true)]
        denominations: Vec<Decimal>,
    },
    /// Convert an amount at a fixed exchange rate.
    Convert {
        /// Amount to convert.
        #[arg(short, long, allow_negative_numbers = true)]
        amount: Decimal,

        /// Source currency.
        #[arg(long)]
        from: Currency,

        /// Target currency.
        #[arg(long)]
        to: Currency,

        /// Units of the target currency per unit of the source.
        #[arg(long, allow_negative_numbers = true)]
        rate: Decimal,
    },
}

/// Amount and optional currency shared by most subcommands.
#[derive(Args, Debug, Clone, Copy)]
pub struct MoneyArgs {
    /// Amount, e.g. 100.00.
    #[arg(short, long, allow_negative_numbers = true)]
    pub amount: Decimal,

    /// ISO 4217 code; falls back to the configured default.
    #[arg(short, long)]
    pub currency: Option<Currency>,
}

/// Remainder strategy names.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemainderArg {
    /// Leave the remainder unallocated.
    None,
    /// First recipient first.
    FirstToLast,
    /// Last recipient first.
    LastToFirst,
    /// Random recipients.
    Random,
}

/// Ratio ordering names.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderArg {
    /// Keep input order.
    AsIs,
    /// Smallest ratio first.
    Ascending,
    /// Largest ratio first.
    Descending,
    /// Shuffled.
    Random,
}
