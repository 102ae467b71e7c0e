//! Core types for the Insight Engine

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::{Bucket, Transaction};

/// Spend summed per canonical bucket
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BucketTotals {
    pub needs: f64,
    pub wants: f64,
    pub future: f64,
}

impl BucketTotals {
    /// Sum amounts of categorized transactions
    ///
    /// Transactions without a canonical bucket are skipped.
    pub fn from_transactions(transactions: &[Transaction]) -> Self {
        transactions
            .iter()
            .fold(Self::default(), |mut totals, tx| {
                if let Some(bucket) = tx.bucket() {
                    totals.add(bucket, tx.amount);
                }
                totals
            })
    }

    pub fn add(&mut self, bucket: Bucket, amount: f64) {
        match bucket {
            Bucket::Needs => self.needs += amount,
            Bucket::Wants => self.wants += amount,
            Bucket::FutureYou => self.future += amount,
        }
    }

    pub fn get(&self, bucket: Bucket) -> f64 {
        match bucket {
            Bucket::Needs => self.needs,
            Bucket::Wants => self.wants,
            Bucket::FutureYou => self.future,
        }
    }
}

/// Outcome of comparing a bucket against its target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BucketStatus {
    /// Spending bucket above its target
    Over,
    /// Spending bucket at or below its target
    Within,
    /// Saving bucket below its goal
    Short,
    /// Saving bucket at or above its goal
    OnTrack,
}

impl BucketStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BucketStatus::Over => "over",
            BucketStatus::Within => "within",
            BucketStatus::Short => "short",
            BucketStatus::OnTrack => "on_track",
        }
    }

    /// Whether this outcome needs the user's attention
    pub fn is_off_target(&self) -> bool {
        matches!(self, BucketStatus::Over | BucketStatus::Short)
    }
}

impl fmt::Display for BucketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Actual vs. target for a single bucket
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BucketComparison {
    pub bucket: Bucket,
    pub spent: f64,
    pub target: f64,
    pub status: BucketStatus,
    /// How far off target, zero when on target
    pub difference: f64,
}

impl BucketComparison {
    /// Compare spend against target
    ///
    /// Needs and Wants are spending buckets: going above the target is the
    /// problem. Future You is a saving bucket: falling below the goal is.
    /// Equality counts as on target for both.
    pub fn compare(bucket: Bucket, spent: f64, target: f64) -> Self {
        let (status, difference) = match bucket {
            Bucket::Needs | Bucket::Wants => {
                if spent > target {
                    (BucketStatus::Over, spent - target)
                } else {
                    (BucketStatus::Within, 0.0)
                }
            }
            Bucket::FutureYou => {
                if spent < target {
                    (BucketStatus::Short, target - spent)
                } else {
                    (BucketStatus::OnTrack, 0.0)
                }
            }
        };

        Self {
            bucket,
            spent,
            target,
            status,
            difference,
        }
    }

    /// Difference in whole dollars, cents dropped
    ///
    /// Stays an `f64` so differences beyond the `i64` range are not clamped.
    pub fn whole_dollars(&self) -> f64 {
        self.difference.floor()
    }
}
