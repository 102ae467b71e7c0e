//! Bucketwise CLI - Needs / Wants / Future You budget insights
//!
//! Usage:
//!   bucketwise serve --port 8000                         Start web server
//!   bucketwise categorize "Roth IRA"                     Classify a merchant
//!   bucketwise insights --income 4000 --file txns.csv    Offline insights
//!   bucketwise config                                    Show budget config

mod cli;
mod commands;

#[cfg(test)]
mod tests;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    let config = commands::load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Serve {
            port,
            host,
            allowed_origins,
        } => commands::cmd_serve(&config, &host, port, allowed_origins.as_deref()).await,
        Commands::Categorize { merchants } => commands::cmd_categorize(&config, &merchants),
        Commands::Insights {
            income,
            file,
            needs,
            wants,
            future,
            json,
        } => {
            let overrides = commands::SplitOverrides {
                needs,
                wants,
                future,
            };
            commands::cmd_insights(&config, income, &file, overrides, json)
        }
        Commands::Config => commands::cmd_config(&config),
    }
}
