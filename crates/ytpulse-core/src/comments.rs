//! Comment records, sentiment categories, and the run tally.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Sentiment bucket for a single comment. Closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SentimentCategory {
    Positive,
    Negative,
    Neutral,
}

impl std::fmt::Display for SentimentCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SentimentCategory::Positive => write!(f, "Positive"),
            SentimentCategory::Negative => write!(f, "Negative"),
            SentimentCategory::Neutral => write!(f, "Neutral"),
        }
    }
}

/// One top-level comment thread, flattened for scoring and export.
///
/// `updated_at` equals `published_at` when the API sent no edit time.
/// `sentiment` is `None` until classification runs.
#[derive(Debug, Clone)]
pub struct CommentRecord {
    pub published_at: DateTime<Utc>,
    pub author: String,
    pub video_id: String,
    pub text: String,
    pub updated_at: DateTime<Utc>,
    pub sentiment: Option<SentimentCategory>,
}

/// Per-category comment counts for one run.
///
/// Built as the result of folding classification over the record sequence,
/// so the counters cannot drift from the per-record categories.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
}

impl Tally {
    /// Returns a copy of the tally with the given category incremented.
    #[must_use]
    pub fn with(self, category: SentimentCategory) -> Self {
        match category {
            SentimentCategory::Positive => Self {
                positive: self.positive + 1,
                ..self
            },
            SentimentCategory::Negative => Self {
                negative: self.negative + 1,
                ..self
            },
            SentimentCategory::Neutral => Self {
                neutral: self.neutral + 1,
                ..self
            },
        }
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.positive + self.negative + self.neutral
    }

    /// Derives the channel recommendation from the positive/negative counts.
    /// Neutral comments carry no weight.
    #[must_use]
    pub fn recommendation(&self) -> Recommendation {
        match self.positive.cmp(&self.negative) {
            std::cmp::Ordering::Greater => Recommendation::Recommend,
            std::cmp::Ordering::Less => Recommendation::DoNotRecommend,
            std::cmp::Ordering::Equal => Recommendation::Split,
        }
    }
}

/// Verdict derived from a [`Tally`]. `Split` means positive and negative
/// counts are equal and no recommendation line is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recommendation {
    Recommend,
    DoNotRecommend,
    Split,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_increments_only_the_given_category() {
        let tally = Tally::default()
            .with(SentimentCategory::Positive)
            .with(SentimentCategory::Positive)
            .with(SentimentCategory::Negative)
            .with(SentimentCategory::Neutral);
        assert_eq!(tally.positive, 2);
        assert_eq!(tally.negative, 1);
        assert_eq!(tally.neutral, 1);
        assert_eq!(tally.total(), 4);
    }

    #[test]
    fn more_positive_than_negative_recommends() {
        let tally = Tally {
            positive: 5,
            negative: 2,
            neutral: 0,
        };
        assert_eq!(tally.recommendation(), Recommendation::Recommend);
    }

    #[test]
    fn more_negative_than_positive_does_not_recommend() {
        let tally = Tally {
            positive: 2,
            negative: 5,
            neutral: 0,
        };
        assert_eq!(tally.recommendation(), Recommendation::DoNotRecommend);
    }

    #[test]
    fn equal_counts_are_a_split() {
        let tally = Tally {
            positive: 3,
            negative: 3,
            neutral: 10,
        };
        assert_eq!(tally.recommendation(), Recommendation::Split);
    }

    #[test]
    fn neutral_comments_do_not_affect_the_recommendation() {
        let tally = Tally {
            positive: 1,
            negative: 0,
            neutral: 100,
        };
        assert_eq!(tally.recommendation(), Recommendation::Recommend);
    }

    #[test]
    fn sentiment_category_display_matches_export_labels() {
        assert_eq!(SentimentCategory::Positive.to_string(), "Positive");
        assert_eq!(SentimentCategory::Negative.to_string(), "Negative");
        assert_eq!(SentimentCategory::Neutral.to_string(), "Neutral");
    }
}
