//! Threshold classification over scored comments.

use ytpulse_core::{CommentRecord, SentimentCategory, Tally};

use crate::scorer::polarity_score;

/// Polarity at or above this value classifies as Positive.
pub const POSITIVE_THRESHOLD: f32 = 0.2;

/// Polarity at or below this value classifies as Negative.
pub const NEGATIVE_THRESHOLD: f32 = -0.2;

/// Bucket a polarity score into a sentiment category.
///
/// The thresholds are inclusive toward their sentiment: exactly `0.2` is
/// Positive and exactly `-0.2` is Negative. Everything strictly between is
/// Neutral.
#[must_use]
pub fn classify(polarity: f32) -> SentimentCategory {
    if polarity >= POSITIVE_THRESHOLD {
        SentimentCategory::Positive
    } else if polarity <= NEGATIVE_THRESHOLD {
        SentimentCategory::Negative
    } else {
        SentimentCategory::Neutral
    }
}

/// Score and classify every record, returning the run tally.
///
/// A single fold both stores each record's category and accumulates the
/// tally, so the per-record field and the counters always agree.
pub fn classify_comments(records: &mut [CommentRecord]) -> Tally {
    records.iter_mut().fold(Tally::default(), |tally, record| {
        let category = classify(polarity_score(&record.text));
        record.sentiment = Some(category);
        tally.with(category)
    })
}
