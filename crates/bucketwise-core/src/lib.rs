//! Bucketwise Core Library
//!
//! Shared functionality for the Bucketwise budgeting service:
//! - Transaction and budget models
//! - Keyword categorizer for the Needs / Wants / Future You buckets
//! - Insight engine comparing bucket spend against income targets
//! - Budget configuration (splits and keyword sets)
//! - Transaction file loading (JSON and CSV)

pub mod categorize;
pub mod config;
pub mod error;
pub mod import;
pub mod insights;
pub mod models;

pub use categorize::{categorize, categorize_all, KeywordRules};
pub use config::{BudgetConfig, ConfigSource};
pub use error::{Error, Result};
pub use insights::{generate_insights, BucketComparison, BucketStatus, InsightEngine};
pub use models::{
    Bucket, BudgetSplit, BudgetSummary, Category, InsightRequest, InsightResponse, Transaction,
};
