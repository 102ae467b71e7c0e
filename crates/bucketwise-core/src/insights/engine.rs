//! Insight Engine - categorizes, aggregates, and narrates a budget

use tracing::debug;

use crate::categorize::KeywordRules;
use crate::config::BudgetConfig;
use crate::models::{
    Bucket, BudgetSplit, BudgetSummary, InsightRequest, InsightResponse, Transaction,
};

use super::narrative::narrate;
use super::types::{BucketComparison, BucketTotals};

/// Default label for the summary period
pub const DEFAULT_MONTH_LABEL: &str = "Current Month";

/// Produces budget summaries and bucket insights
///
/// Holds only read-only configuration, so one engine can serve any number
/// of requests.
#[derive(Debug, Clone)]
pub struct InsightEngine {
    rules: KeywordRules,
    split: BudgetSplit,
    month_label: String,
}

impl Default for InsightEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl InsightEngine {
    /// Create an engine with the built-in keywords and the 50/30/20 split
    pub fn new() -> Self {
        Self {
            rules: KeywordRules::default(),
            split: BudgetSplit::default(),
            month_label: DEFAULT_MONTH_LABEL.to_string(),
        }
    }

    /// Create an engine from a loaded budget config
    pub fn from_config(config: &BudgetConfig) -> Self {
        Self {
            rules: config.rules.clone(),
            split: config.split,
            month_label: config.month_label.clone(),
        }
    }

    pub fn rules(&self) -> &KeywordRules {
        &self.rules
    }

    /// Split applied when a request omits percentages
    pub fn default_split(&self) -> BudgetSplit {
        self.split
    }

    /// Fill in missing categories
    pub fn categorize_all(&self, transactions: Vec<Transaction>) -> Vec<Transaction> {
        self.rules.categorize_all(transactions)
    }

    /// Answer an insights request
    pub fn generate(&self, request: InsightRequest) -> InsightResponse {
        let split = request.split_or(self.split);
        self.generate_with_split(request.income, request.transactions, split)
    }

    /// Categorize, total, and compare each bucket against `income * pct`
    pub fn generate_with_split(
        &self,
        income: f64,
        transactions: Vec<Transaction>,
        split: BudgetSplit,
    ) -> InsightResponse {
        let transactions = self.categorize_all(transactions);
        let totals = BucketTotals::from_transactions(&transactions);
        let comparisons = compare_buckets(income, &totals, split);

        debug!(
            income,
            needs = totals.needs,
            wants = totals.wants,
            future = totals.future,
            off_target = comparisons
                .iter()
                .filter(|c| c.status.is_off_target())
                .count(),
            "Generated budget insights"
        );

        InsightResponse {
            summary: BudgetSummary {
                month: self.month_label.clone(),
                income,
                needs_spent: totals.needs,
                wants_spent: totals.wants,
                future_spent: totals.future,
            },
            insights: comparisons.iter().map(narrate).collect(),
        }
    }
}

/// Compare every bucket against its target, in Needs, Wants, Future You order
pub fn compare_buckets(
    income: f64,
    totals: &BucketTotals,
    split: BudgetSplit,
) -> Vec<BucketComparison> {
    Bucket::all()
        .iter()
        .map(|&bucket| {
            BucketComparison::compare(bucket, totals.get(bucket), income * split.pct_for(bucket))
        })
        .collect()
}

/// Generate insights with the built-in keyword rules
pub fn generate_insights(
    income: f64,
    transactions: Vec<Transaction>,
    split: BudgetSplit,
) -> InsightResponse {
    InsightEngine::new().generate_with_split(income, transactions, split)
}
