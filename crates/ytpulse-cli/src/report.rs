//! Recommendation verdict printed after classification.

use ytpulse_core::{Recommendation, Tally};

/// The single stdout line for a verdict, if any. An even split produces no
/// line; the tally is still visible in the logs.
pub(crate) fn recommendation_message(tally: &Tally) -> Option<&'static str> {
    match tally.recommendation() {
        Recommendation::Recommend => {
            Some("This YouTube channel is recommended based on positive comments.")
        }
        Recommendation::DoNotRecommend => {
            Some("This YouTube channel is not recommended based on negative comments.")
        }
        Recommendation::Split => None,
    }
}

pub(crate) fn print_recommendation(tally: &Tally) {
    match recommendation_message(tally) {
        Some(message) => println!("{message}"),
        None => {
            tracing::info!(
                positive = tally.positive,
                negative = tally.negative,
                "sentiment split evenly; no recommendation"
            );
        }
    }
}
