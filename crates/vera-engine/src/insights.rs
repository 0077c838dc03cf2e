//! Insight generator: short observations explaining a score.

use crate::detector::Features;

pub const SHORT_TEXT: &str = "Text too short for full analysis";
pub const FACTUAL_CLAIMS: &str = "Factual claims detected requiring verification";
pub const SUBJECTIVE: &str = "Text contains subjective assessments";
pub const LENGTHY: &str = "Lengthy text with extended context";
pub const NEUTRAL: &str = "Neutral text with no explicit markers";

/// Fewer words than this is too short for a full analysis.
pub const SHORT_TEXT_WORDS: usize = 20;

/// More words than this counts as extended context.
pub const LENGTHY_TEXT_WORDS: usize = 100;

/// Observations in fixed order; never empty.
#[must_use]
pub fn generate(features: &Features) -> Vec<String> {
    let mut insights = Vec::new();

    if features.word_count < SHORT_TEXT_WORDS {
        insights.push(SHORT_TEXT.to_string());
    }
    if features.has_factual_words {
        insights.push(FACTUAL_CLAIMS.to_string());
    }
    if features.has_opinion_words {
        insights.push(SUBJECTIVE.to_string());
    }
    if features.word_count > LENGTHY_TEXT_WORDS {
        insights.push(LENGTHY.to_string());
    }

    if insights.is_empty() {
        insights.push(NEUTRAL.to_string());
    }
    insights
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn features(factual: bool, opinion: bool, words: usize) -> Features {
        Features {
            has_factual_words: factual,
            has_opinion_words: opinion,
            word_count: words,
            ..Features::default()
        }
    }

    #[test]
    fn short_factual_opinion_text_lists_in_order() {
        assert_eq!(
            generate(&features(true, true, 10)),
            vec![SHORT_TEXT, FACTUAL_CLAIMS, SUBJECTIVE]
        );
    }

    #[test]
    fn long_factual_text() {
        assert_eq!(generate(&features(true, false, 150)), vec![FACTUAL_CLAIMS, LENGTHY]);
    }

    #[test]
    fn medium_unmarked_text_falls_back_to_neutral() {
        assert_eq!(generate(&features(false, false, 40)), vec![NEUTRAL]);
    }

    #[test]
    fn boundaries_are_exclusive() {
        assert_eq!(generate(&features(false, false, 20)), vec![NEUTRAL]);
        assert_eq!(generate(&features(false, false, 100)), vec![NEUTRAL]);
        assert_eq!(generate(&features(false, false, 19)), vec![SHORT_TEXT]);
        assert_eq!(generate(&features(false, false, 101)), vec![LENGTHY]);
    }
}
