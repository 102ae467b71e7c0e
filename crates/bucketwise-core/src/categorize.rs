//! Keyword categorizer for budget buckets
//!
//! Merchant names are lower-cased and checked for keyword substrings. The
//! Future You set is checked before Needs, so a merchant matching both (e.g.
//! "Chase Insurance 401k Transfer") is treated as saving. Anything that
//! matches neither set falls back to Wants.

use std::sync::OnceLock;

use tracing::debug;

use crate::models::{Bucket, Category, Transaction};

/// Built-in Needs keywords
pub const NEEDS_KEYWORDS: &[&str] = &[
    "rent",
    "mortgage",
    "electric",
    "gas",
    "water",
    "grocery",
    "utilities",
    "insurance",
];

/// Built-in Future You keywords
pub const FUTURE_KEYWORDS: &[&str] = &[
    "roth",
    "ira",
    "401k",
    "investment",
    "savings",
    "extra payment",
];

/// Ordered keyword sets used to classify merchants
///
/// Keywords are stored lower-cased. Built once and only read afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordRules {
    future: Vec<String>,
    needs: Vec<String>,
}

impl Default for KeywordRules {
    fn default() -> Self {
        Self::new(FUTURE_KEYWORDS, NEEDS_KEYWORDS)
    }
}

impl KeywordRules {
    /// Build rules from keyword lists, normalizing case and dropping blanks
    pub fn new<F, N>(future: F, needs: N) -> Self
    where
        F: IntoIterator,
        F::Item: AsRef<str>,
        N: IntoIterator,
        N::Item: AsRef<str>,
    {
        Self {
            future: normalize(future),
            needs: normalize(needs),
        }
    }

    /// Shared instance of the built-in rules
    pub fn builtin() -> &'static KeywordRules {
        static BUILTIN: OnceLock<KeywordRules> = OnceLock::new();
        BUILTIN.get_or_init(KeywordRules::default)
    }

    pub fn future_keywords(&self) -> &[String] {
        &self.future
    }

    pub fn needs_keywords(&self) -> &[String] {
        &self.needs
    }

    /// Classify a merchant name
    pub fn categorize(&self, merchant: &str) -> Bucket {
        self.matched_keyword(merchant).0
    }

    /// Classify a merchant name and report the keyword that decided it
    ///
    /// The keyword is `None` when the merchant fell through to Wants.
    pub fn matched_keyword(&self, merchant: &str) -> (Bucket, Option<&str>) {
        let m = merchant.to_lowercase();

        if let Some(k) = self.future.iter().find(|k| m.contains(k.as_str())) {
            return (Bucket::FutureYou, Some(k.as_str()));
        }
        if let Some(k) = self.needs.iter().find(|k| m.contains(k.as_str())) {
            return (Bucket::Needs, Some(k.as_str()));
        }
        (Bucket::Wants, None)
    }

    /// Fill in the category of every transaction that lacks one
    ///
    /// Transactions that already carry a category (canonical or not) are
    /// returned untouched, so running this twice is a no-op.
    pub fn categorize_all(&self, transactions: Vec<Transaction>) -> Vec<Transaction> {
        let mut filled = 0usize;
        let result: Vec<Transaction> = transactions
            .into_iter()
            .map(|mut tx| {
                if tx.needs_category() {
                    tx.category = Some(Category::from(self.categorize(&tx.merchant)));
                    filled += 1;
                }
                tx
            })
            .collect();

        debug!(total = result.len(), filled, "Categorized transactions");
        result
    }
}

fn normalize<I>(keywords: I) -> Vec<String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    keywords
        .into_iter()
        .map(|k| k.as_ref().trim().to_lowercase())
        .filter(|k| !k.is_empty())
        .collect()
}

/// Classify a merchant name with the built-in keyword sets
pub fn categorize(merchant: &str) -> Bucket {
    KeywordRules::builtin().categorize(merchant)
}

/// Fill in missing categories with the built-in keyword sets
pub fn categorize_all(transactions: Vec<Transaction>) -> Vec<Transaction> {
    KeywordRules::builtin().categorize_all(transactions)
}
