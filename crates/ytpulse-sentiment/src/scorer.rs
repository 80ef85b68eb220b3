//! Lexicon polarity scorer for video comment text.

/// Word weights tuned for the register of YouTube comment sections.
///
/// Keys are lowercase single words. Values in `(0.0, 1.0]` are positive,
/// in `[-1.0, 0.0)` are negative. The final score is clamped to `[-1.0, 1.0]`.
pub(crate) const LEXICON: &[(&str, f32)] = &[
    // Positive signals
    ("great", 0.4),
    ("good", 0.3),
    ("excellent", 0.5),
    ("amazing", 0.5),
    ("awesome", 0.5),
    ("love", 0.5),
    ("loved", 0.5),
    ("best", 0.5),
    ("perfect", 0.5),
    ("helpful", 0.4),
    ("useful", 0.4),
    ("clear", 0.3),
    ("thanks", 0.4),
    ("thank", 0.4),
    ("brilliant", 0.5),
    ("fantastic", 0.5),
    ("wonderful", 0.5),
    ("recommend", 0.4),
    ("subscribed", 0.4),
    ("enjoyed", 0.4),
    ("learned", 0.3),
    ("quality", 0.3),
    // Negative signals
    ("bad", -0.4),
    ("terrible", -0.6),
    ("worst", -0.6),
    ("awful", -0.6),
    ("horrible", -0.6),
    ("hate", -0.6),
    ("hated", -0.6),
    ("boring", -0.5),
    ("useless", -0.5),
    ("waste", -0.5),
    ("wrong", -0.3),
    ("confusing", -0.4),
    ("misleading", -0.6),
    ("clickbait", -0.6),
    ("outdated", -0.4),
    ("disappointed", -0.5),
    ("disappointing", -0.5),
    ("unsubscribed", -0.5),
    ("dislike", -0.4),
    ("scam", -0.7),
];

/// Score a text string using the comment lexicon.
///
/// Splits text into lowercase words, sums matching weights, and clamps
/// the result to `[-1.0, 1.0]`. Returns `0.0` for empty or unknown text.
#[must_use]
pub fn polarity_score(text: &str) -> f32 {
    let mut score = 0.0_f32;
    for word in text.split_whitespace() {
        let w = word
            .trim_matches(|c: char| !c.is_alphabetic())
            .to_lowercase();
        for &(lex_word, weight) in LEXICON {
            if w == lex_word {
                score += weight;
                break;
            }
        }
    }
    score.clamp(-1.0, 1.0)
}
