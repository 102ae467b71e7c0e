//! Insights command implementation

use std::path::Path;

use anyhow::{Context, Result};
use bucketwise_core::import::load_transactions;
use bucketwise_core::{BudgetConfig, InsightEngine, InsightRequest, InsightResponse};

use super::format_money;

/// Percentages given on the command line
#[derive(Debug, Clone, Copy, Default)]
pub struct SplitOverrides {
    pub needs: Option<f64>,
    pub wants: Option<f64>,
    pub future: Option<f64>,
}

/// Load a transaction file and run the insight engine on it
pub fn run_insights(
    config: &BudgetConfig,
    income: f64,
    file: &Path,
    overrides: SplitOverrides,
) -> Result<InsightResponse> {
    let transactions = load_transactions(file)
        .with_context(|| format!("Failed to load transactions from {}", file.display()))?;

    let request = InsightRequest {
        income,
        transactions,
        budget_needs_pct: overrides.needs,
        budget_wants_pct: overrides.wants,
        budget_future_pct: overrides.future,
    };

    Ok(InsightEngine::from_config(config).generate(request))
}

pub fn cmd_insights(
    config: &BudgetConfig,
    income: f64,
    file: &Path,
    overrides: SplitOverrides,
    json: bool,
) -> Result<()> {
    let response = run_insights(config, income, file, overrides)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(());
    }

    let summary = &response.summary;
    println!();
    println!("📊 Budget Summary ({})", summary.month);
    println!("   Income: {}", format_money(summary.income));
    println!("   ─────────────────────────────────────────────");
    println!("   Needs       {:>12}", format_money(summary.needs_spent));
    println!("   Wants       {:>12}", format_money(summary.wants_spent));
    println!("   Future You  {:>12}", format_money(summary.future_spent));
    println!();
    println!("💡 Insights");
    for insight in &response.insights {
        println!("   • {}", insight);
    }

    Ok(())
}
