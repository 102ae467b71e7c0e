//! Config command implementation and shared config loading
//!
//! This module contains:
//! - `load_config` - Shared utility to resolve the budget config
//! - `cmd_config` - Print the effective config

use std::path::Path;

use anyhow::{Context, Result};
use bucketwise_core::config::default_config_path;
use bucketwise_core::BudgetConfig;

/// Load the budget config from an explicit path or the default locations
pub fn load_config(path: Option<&Path>) -> Result<BudgetConfig> {
    let config = BudgetConfig::load(path).context("Failed to load budget config")?;
    tracing::debug!(source = %config.source, "Budget config loaded");
    Ok(config)
}

pub fn cmd_config(config: &BudgetConfig) -> Result<()> {
    println!();
    println!("⚙️  Budget Config");
    println!("   Source: {}", config.source);
    if let Some(path) = default_config_path() {
        println!("   Override path: {}", path.display());
    }
    println!("   ─────────────────────────────────────────────");
    println!("   Needs target:      {:>5.1}%", config.split.needs * 100.0);
    println!("   Wants target:      {:>5.1}%", config.split.wants * 100.0);
    println!("   Future You target: {:>5.1}%", config.split.future * 100.0);

    let total = config.split.needs + config.split.wants + config.split.future;
    if (total - 1.0).abs() > f64::EPSILON {
        println!(
            "   ⚠️  Targets add up to {:.1}% of income (used as given)",
            total * 100.0
        );
    }

    println!("   Summary label: {}", config.month_label);
    println!();
    println!(
        "   Future You keywords: {}",
        config.rules.future_keywords().join(", ")
    );
    println!(
        "   Needs keywords:      {}",
        config.rules.needs_keywords().join(", ")
    );
    println!("   Everything else counts as Wants.");

    Ok(())
}
