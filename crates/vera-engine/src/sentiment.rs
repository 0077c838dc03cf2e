//! Sentiment policy: positive/negative word counts -> label and score.

use vera_core::entities::MAX_SENTIMENT_MAGNITUDE;
use vera_core::enums::Sentiment;

/// Points each lexicon hit adds to the score magnitude.
const POINTS_PER_WORD: usize = 2;

/// Output of the sentiment policy. `score` is within `-10..=10`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SentimentScore {
    pub sentiment: Sentiment,
    pub score: i8,
}

/// Classify by whichever lexicon has more hits; ties are neutral.
#[must_use]
pub fn classify(positive_count: usize, negative_count: usize) -> SentimentScore {
    if positive_count > negative_count {
        SentimentScore {
            sentiment: Sentiment::Positive,
            score: magnitude(positive_count),
        }
    } else if negative_count > positive_count {
        SentimentScore {
            sentiment: Sentiment::Negative,
            score: -magnitude(negative_count),
        }
    } else {
        SentimentScore {
            sentiment: Sentiment::Neutral,
            score: 0,
        }
    }
}

fn magnitude(count: usize) -> i8 {
    let cap = MAX_SENTIMENT_MAGNITUDE.unsigned_abs();
    let points = count.saturating_mul(POINTS_PER_WORD).min(usize::from(cap));
    // Bounded by `cap` above, so the conversion cannot fail.
    i8::try_from(points).unwrap_or(MAX_SENTIMENT_MAGNITUDE)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(0, 0, Sentiment::Neutral, 0)]
    #[case(3, 3, Sentiment::Neutral, 0)]
    #[case(2, 0, Sentiment::Positive, 4)]
    #[case(3, 1, Sentiment::Positive, 6)]
    #[case(0, 1, Sentiment::Negative, -2)]
    #[case(1, 4, Sentiment::Negative, -8)]
    #[case(5, 0, Sentiment::Positive, 10)]
    #[case(40, 2, Sentiment::Positive, 10)]
    #[case(0, 9, Sentiment::Negative, -10)]
    #[case(0, usize::MAX, Sentiment::Negative, -10)]
    fn classifies(
        #[case] positive: usize,
        #[case] negative: usize,
        #[case] sentiment: Sentiment,
        #[case] score: i8,
    ) {
        assert_eq!(classify(positive, negative), SentimentScore { sentiment, score });
    }
}
