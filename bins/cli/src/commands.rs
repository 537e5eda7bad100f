//! Subcommand execution.
//!
//! Every command renders its result to a `String` so `main` only prints.

use anyhow::Context;
use coinage_core::allocation::{
    Allocation, AllocationError, AllocationOrdering, EvenAllocator, FirstToLast, LastToFirst,
    ProRataAllocator, RandomOrder, RatioCollection,
};
use coinage_core::change::{ChangeMaker, Denomination};
use coinage_core::exchange::ExchangeRate;
use coinage_shared::{AppConfig, Money};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use rust_decimal::Decimal;
use tracing::info;

use crate::args::{Cli, Commands, MoneyArgs, OrderArg, RemainderArg};

/// Runs the parsed command and returns its rendered output.
pub fn run(cli: &Cli, config: &AppConfig) -> anyhow::Result<String> {
    let mut rng = rng(cli.seed);

    match &cli.command {
        Commands::Even {
            money,
            parts,
            remainder,
        } => {
            let money = resolve(money, config);
            info!(money = %money, parts, "Even split");
            let allocation = EvenAllocator::new(money).allocate(*parts)?;
            let allocation = distribute(&allocation, *remainder, rng.as_mut())?;
            Ok(render_allocation(&allocation))
        }
        Commands::Split {
            money,
            ratios,
            order,
            remainder,
        } => {
            let money = resolve(money, config);
            info!(money = %money, ratios = ratios.len(), "Pro-rata split");
            let ordering = match order {
                OrderArg::AsIs => AllocationOrdering::AsIs,
                OrderArg::Ascending => AllocationOrdering::Ascending,
                OrderArg::Descending => AllocationOrdering::Descending,
                OrderArg::Random => AllocationOrdering::Random(rng.as_mut()),
            };
            let ratios = RatioCollection::with_ordering(ratios.iter().copied(), ordering)?;
            let ordered = ratios
                .ordered()
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(" | ");

            let allocation = ProRataAllocator::new(money).allocate(&ratios)?;
            let allocation = distribute(&allocation, *remainder, rng.as_mut())?;

            let mut out = format!("ordered ratios: {ordered}\n");
            out.push_str(&render_allocation(&allocation));
            Ok(out)
        }
        Commands::Change {
            money,
            denominations,
            optimal,
        } => {
            let money = resolve(money, config);
            let denominations = parse_denominations(denominations)?;
            let maker = ChangeMaker::new(config.change);
            info!(money = %money, optimal, "Making change");

            if *optimal {
                let solution = maker.make_optimal_change(&money, &denominations)?;
                if !solution.is_solution() {
                    return Ok(format!("no exact change for {money}"));
                }
                Ok(format!("{solution}\npieces: {}", solution.total_count()))
            } else {
                let solution = maker.make_change(&money, &denominations)?;
                Ok(format!("{solution}\npieces: {}", solution.total_count()))
            }
        }
        Commands::Count {
            money,
            denominations,
        } => {
            let money = resolve(money, config);
            let denominations = parse_denominations(denominations)?;
            let maker = ChangeMaker::new(config.change);

            let ways = maker.count_ways_to_make_change(&money, &denominations)?;
            let fewest = maker.min_change_count(&money, &denominations)?;
            Ok(format!("ways: {ways}\nfewest pieces: {fewest}"))
        }
        Commands::Convert {
            amount,
            from,
            to,
            rate,
        } => {
            let rate = ExchangeRate::new(*from, *to, *rate)?;
            let converted = rate.apply(&Money::new(*amount, *from))?;
            Ok(format!("{converted} (at {rate})"))
        }
    }
}

fn rng(seed: Option<u64>) -> Box<dyn RngCore> {
    match seed {
        Some(seed) => Box::new(StdRng::seed_from_u64(seed)),
        None => Box::new(rand::rng()),
    }
}

fn resolve(args: &MoneyArgs, config: &AppConfig) -> Money {
    Money::new(args.amount, args.currency.unwrap_or(config.default_currency))
}

fn parse_denominations(values: &[Decimal]) -> anyhow::Result<Vec<Denomination>> {
    values
        .iter()
        .map(|&value| Denomination::new(value).with_context(|| format!("invalid denomination {value}")))
        .collect()
}

fn distribute(
    allocation: &Allocation,
    strategy: RemainderArg,
    rng: &mut dyn RngCore,
) -> Result<Allocation, AllocationError> {
    match strategy {
        RemainderArg::None => Ok(allocation.clone()),
        RemainderArg::FirstToLast => allocation.distribute_remainder(&mut FirstToLast),
        RemainderArg::LastToFirst => allocation.distribute_remainder(&mut LastToFirst),
        RemainderArg::Random => allocation.distribute_remainder(&mut RandomOrder::new(rng)),
    }
}

fn render_allocation(allocation: &Allocation) -> String {
    let status = if allocation.is_complete() { " (complete)" } else { "" };
    format!(
        "shares: {allocation}\nallocated: {}\nremainder: {}{status}",
        allocation.total_allocated(),
        allocation.remainder(),
    )
}
