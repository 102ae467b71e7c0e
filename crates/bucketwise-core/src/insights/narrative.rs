//! Fixed-template sentences for bucket comparisons

use super::types::{BucketComparison, BucketStatus};
use crate::models::Bucket;

/// Render a comparison as a sentence
///
/// Amounts are whole dollars, floored, never rounded.
pub fn narrate(comparison: &BucketComparison) -> String {
    let dollars = format!("{:.0}", comparison.whole_dollars());

    match (comparison.bucket, comparison.status) {
        (Bucket::Needs, BucketStatus::Over) => format!(
            "Your Needs spending is about ${} above your target this month.",
            dollars
        ),
        (Bucket::Needs, _) => {
            "Your Needs spending is within your target. Essentials are under control.".to_string()
        }
        (Bucket::Wants, BucketStatus::Over) => format!(
            "You're overspending on Wants by roughly ${}. \
             Cutting one or two habits could bring you back on track.",
            dollars
        ),
        (Bucket::Wants, _) => {
            "Your Wants spending is reasonable. You're enjoying life without overdoing it."
                .to_string()
        }
        (Bucket::FutureYou, BucketStatus::Short) => format!(
            "You\u{2019}re putting about ${} less toward Future You than your goal. \
             Even an extra $50\u{2013}$100 a month could help you catch up.",
            dollars
        ),
        (Bucket::FutureYou, _) => {
            "You\u{2019}re meeting or beating your Future You goal. Keep that momentum going \u{1f4aa}"
                .to_string()
        }
    }
}
