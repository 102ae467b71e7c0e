//! Insight Engine - Budget Bucket Insights
//!
//! Compares what was spent in each bucket against a share of income and
//! turns each comparison into one plain-language sentence.
//!
//! ## Pipeline
//!
//! - **Categorize** - fill missing categories with the keyword rules
//! - **Aggregate** - sum amounts per canonical bucket
//! - **Compare** - derive targets from income and the budget split
//! - **Narrate** - one fixed-template sentence per bucket
//!
//! ## Usage
//!
//! ```rust,ignore
//! use bucketwise_core::insights::InsightEngine;
//!
//! let engine = InsightEngine::new();
//! let response = engine.generate(request);
//! ```

pub mod engine;
pub mod narrative;
pub mod types;

pub use engine::{generate_insights, InsightEngine};
pub use narrative::narrate;
pub use types::{BucketComparison, BucketStatus, BucketTotals};
