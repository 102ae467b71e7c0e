//! Categorize command implementation

use anyhow::Result;
use bucketwise_core::{Bucket, BudgetConfig};

/// Classify each merchant, returning the bucket and deciding keyword
pub fn classify_merchants<'a>(
    config: &'a BudgetConfig,
    merchants: &[String],
) -> Vec<(Bucket, Option<&'a str>)> {
    merchants
        .iter()
        .map(|m| config.rules.matched_keyword(m))
        .collect()
}

pub fn cmd_categorize(config: &BudgetConfig, merchants: &[String]) -> Result<()> {
    let results = classify_merchants(config, merchants);

    println!();
    for (merchant, (bucket, keyword)) in merchants.iter().zip(results) {
        let reason = match keyword {
            Some(k) => format!("matched \"{}\"", k),
            None => "no keyword, default".to_string(),
        };
        println!("   {:<32} {:<10} ({})", merchant, bucket.as_str(), reason);
    }

    Ok(())
}
