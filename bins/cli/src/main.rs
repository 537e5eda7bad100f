//! Coinage command-line tool.
//!
//! Splits amounts evenly or by ratio, makes change and converts currencies.

use clap::Parser;
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use coinage_shared::AppConfig;

mod args;
mod commands;

use args::Cli;

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = AppConfig::load()?;

    // Logs go to stderr so results on stdout stay pipeable
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.filter));
    let registry = tracing_subscriber::registry().with(filter);
    if config.logging.json {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry.with(fmt::layer().with_writer(std::io::stderr)).init();
    }

    let cli = Cli::parse();
    debug!(command = ?cli.command, "Parsed arguments");

    println!("{}", commands::run(&cli, &config)?);

    Ok(())
}
