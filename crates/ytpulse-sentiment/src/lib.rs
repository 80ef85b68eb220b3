//! Sentiment scoring and classification for ytpulse.
//!
//! Scores comment text against a word lexicon to get a polarity in
//! `[-1.0, 1.0]`, then buckets each comment into Positive, Negative, or
//! Neutral by fixed thresholds. Classification over a record sequence is a
//! fold that returns the run [`Tally`](ytpulse_core::Tally).

pub mod classify;
pub mod scorer;

pub use classify::{classify, classify_comments, NEGATIVE_THRESHOLD, POSITIVE_THRESHOLD};
pub use scorer::polarity_score;
