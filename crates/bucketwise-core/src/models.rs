//! Domain models for Bucketwise

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

/// One of the three budget buckets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Bucket {
    /// Essential or fixed expenses
    Needs,
    /// Discretionary spend (the fallback bucket)
    Wants,
    /// Savings and investment contributions
    #[serde(rename = "Future You")]
    FutureYou,
}

impl Bucket {
    /// Wire label for this bucket
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Needs => "Needs",
            Self::Wants => "Wants",
            Self::FutureYou => "Future You",
        }
    }

    /// All buckets in reporting order
    pub fn all() -> &'static [Bucket] {
        &[Self::Needs, Self::Wants, Self::FutureYou]
    }
}

impl std::str::FromStr for Bucket {
    type Err = String;

    /// Labels are matched exactly; anything else is a caller-defined category.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "Needs" => Ok(Self::Needs),
            "Wants" => Ok(Self::Wants),
            "Future You" => Ok(Self::FutureYou),
            _ => Err(format!("Unknown bucket: {}", s)),
        }
    }
}

impl std::fmt::Display for Bucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Category carried on a transaction
///
/// Callers may send any label. Canonical labels map to a [`Bucket`]; anything
/// else is kept verbatim and ignored by aggregation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    Bucket(Bucket),
    Other(String),
}

impl Category {
    /// The canonical bucket, if this is one
    pub fn bucket(&self) -> Option<Bucket> {
        match self {
            Self::Bucket(bucket) => Some(*bucket),
            Self::Other(_) => None,
        }
    }

    /// An empty label counts as "no category"
    pub fn is_blank(&self) -> bool {
        matches!(self, Self::Other(label) if label.is_empty())
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Bucket(bucket) => bucket.as_str(),
            Self::Other(label) => label,
        }
    }
}

impl From<Bucket> for Category {
    fn from(bucket: Bucket) -> Self {
        Self::Bucket(bucket)
    }
}

impl From<String> for Category {
    fn from(label: String) -> Self {
        match label.parse::<Bucket>() {
            Ok(bucket) => Self::Bucket(bucket),
            Err(_) => Self::Other(label),
        }
    }
}

impl From<&str> for Category {
    fn from(label: &str) -> Self {
        Self::from(label.to_string())
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        match category {
            Category::Bucket(bucket) => bucket.as_str().to_string(),
            Category::Other(label) => label,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single spend record supplied by the caller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(default)]
    pub id: Option<i64>,
    pub date: NaiveDate,
    pub merchant: String,
    /// Spend magnitude; no sign convention is enforced
    pub amount: f64,
    #[serde(default)]
    pub category: Option<Category>,
}

impl Transaction {
    /// Create an uncategorized transaction
    pub fn new(date: NaiveDate, merchant: impl Into<String>, amount: f64) -> Self {
        Self {
            id: None,
            date,
            merchant: merchant.into(),
            amount,
            category: None,
        }
    }

    /// Builder-style category assignment
    pub fn with_category(mut self, category: impl Into<Category>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// True when the categorizer should fill in the category
    pub fn needs_category(&self) -> bool {
        match &self.category {
            None => true,
            Some(category) => category.is_blank(),
        }
    }

    /// The canonical bucket, if categorized into one
    pub fn bucket(&self) -> Option<Bucket> {
        self.category.as_ref().and_then(Category::bucket)
    }
}

/// Target share of income for each bucket
///
/// Values are used as given; nothing forces them to add up to 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BudgetSplit {
    pub needs: f64,
    pub wants: f64,
    pub future: f64,
}

impl Default for BudgetSplit {
    /// The 50/30/20 rule
    fn default() -> Self {
        Self {
            needs: 0.5,
            wants: 0.3,
            future: 0.2,
        }
    }
}

impl BudgetSplit {
    pub fn pct_for(&self, bucket: Bucket) -> f64 {
        match bucket {
            Bucket::Needs => self.needs,
            Bucket::Wants => self.wants,
            Bucket::FutureYou => self.future,
        }
    }
}

/// Body of an insights request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsightRequest {
    pub income: f64,
    pub transactions: Vec<Transaction>,
    #[serde(
        default,
        deserialize_with = "non_null_pct",
        skip_serializing_if = "Option::is_none"
    )]
    pub budget_needs_pct: Option<f64>,
    #[serde(
        default,
        deserialize_with = "non_null_pct",
        skip_serializing_if = "Option::is_none"
    )]
    pub budget_wants_pct: Option<f64>,
    #[serde(
        default,
        deserialize_with = "non_null_pct",
        skip_serializing_if = "Option::is_none"
    )]
    pub budget_future_pct: Option<f64>,
}

impl InsightRequest {
    pub fn new(income: f64, transactions: Vec<Transaction>) -> Self {
        Self {
            income,
            transactions,
            budget_needs_pct: None,
            budget_wants_pct: None,
            budget_future_pct: None,
        }
    }

    /// Resolve the request's percentages, filling omitted ones from `defaults`
    pub fn split_or(&self, defaults: BudgetSplit) -> BudgetSplit {
        BudgetSplit {
            needs: self.budget_needs_pct.unwrap_or(defaults.needs),
            wants: self.budget_wants_pct.unwrap_or(defaults.wants),
            future: self.budget_future_pct.unwrap_or(defaults.future),
        }
    }
}

/// A percentage may be omitted but not sent as `null`
fn non_null_pct<'de, D>(deserializer: D) -> std::result::Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    f64::deserialize(deserializer).map(Some)
}

/// Per-bucket spend totals for one request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetSummary {
    /// Free-text period label; not derived from transaction dates
    pub month: String,
    pub income: f64,
    pub needs_spent: f64,
    pub wants_spent: f64,
    pub future_spent: f64,
}

impl BudgetSummary {
    pub fn spent_for(&self, bucket: Bucket) -> f64 {
        match bucket {
            Bucket::Needs => self.needs_spent,
            Bucket::Wants => self.wants_spent,
            Bucket::FutureYou => self.future_spent,
        }
    }
}

/// Summary plus one narrative line per bucket (Needs, Wants, Future You)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsightResponse {
    pub summary: BudgetSummary,
    pub insights: Vec<String>,
}
