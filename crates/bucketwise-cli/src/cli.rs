//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI arguments.
//! The actual command implementations are in the `commands` module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Bucketwise - Needs, Wants, and Future You budget insights
#[derive(Parser)]
#[command(name = "bucketwise")]
#[command(about = "Sort spending into Needs, Wants, and Future You", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Budget config file (TOML). Defaults to the data dir override, then built-in values
    #[arg(long, env = "BUCKETWISE_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the web server
    Serve {
        /// Port to listen on
        #[arg(short, long, env = "BUCKETWISE_PORT", default_value = "8000")]
        port: u16,

        /// Host to bind to
        #[arg(long, env = "BUCKETWISE_HOST", default_value = "127.0.0.1")]
        host: String,

        /// Comma-separated CORS origins allowed to call the API
        ///
        /// Defaults to the local dev frontends and the hosted frontend.
        /// Pass an empty string to allow same-origin requests only.
        #[arg(long, env = "BUCKETWISE_ALLOWED_ORIGINS")]
        allowed_origins: Option<String>,
    },

    /// Show which bucket a merchant falls into
    Categorize {
        /// Merchant names to classify
        #[arg(required = true)]
        merchants: Vec<String>,
    },

    /// Summarize a transaction file against an income
    Insights {
        /// Monthly income
        #[arg(short, long, allow_negative_numbers = true)]
        income: f64,

        /// Transaction file (.json array or .csv with date,merchant,amount[,category])
        #[arg(short, long)]
        file: PathBuf,

        /// Share of income for Needs (default from config, 0.5)
        #[arg(long)]
        needs: Option<f64>,

        /// Share of income for Wants (default from config, 0.3)
        #[arg(long)]
        wants: Option<f64>,

        /// Share of income for Future You (default from config, 0.2)
        #[arg(long)]
        future: Option<f64>,

        /// Print the API response JSON instead of a report
        #[arg(long)]
        json: bool,
    },

    /// Show the effective budget configuration
    Config,
}
