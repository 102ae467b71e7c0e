//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `categorize` - Merchant classification
//! - `config` - Config loading shared by all commands, `config` command
//! - `insights` - Offline insights from a transaction file
//! - `serve` - Web server command

pub mod categorize;
pub mod config;
pub mod insights;
pub mod serve;

// Re-export command functions for main.rs
pub use categorize::*;
pub use config::*;
pub use insights::*;
pub use serve::*;

/// Format an amount as whole-cent dollars
pub fn format_money(amount: f64) -> String {
    if amount < 0.0 {
        format!("-${:.2}", -amount)
    } else {
        format!("${:.2}", amount)
    }
}
