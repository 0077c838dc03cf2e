//! Scoring policy: features -> confidence, verdict, sources, AI score.
//!
//! A first-match decision table. Factual markers take precedence over opinion
//! markers, which take precedence over text length:
//!
//! ```text
//! factual  -> verified    confidence 70..=89  aiScore 75..=89  3 reputable sources
//! opinion  -> warning     confidence 30..=44  aiScore 35..=44  2 weak sources
//! > 50 words -> unverified confidence 55..=74 aiScore 50..=64  2 generic sources
//! otherwise -> warning    confidence 40..=54  aiScore 40..=49  "Insufficient Data"
//! ```

use std::fmt;

use vera_core::entities::MAX_SCORE;
use vera_core::enums::Verdict;

use crate::detector::Features;
use crate::jitter::JitterSource;

/// Word count above which unmarked text is scored as substantive.
pub const LONG_TEXT_WORDS: usize = 50;

/// Source placeholder used when nothing could be inferred.
pub const INSUFFICIENT_DATA: &str = "Insufficient Data";

/// Which row of the decision table applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Branch {
    Factual,
    Opinion,
    Lengthy,
    Insufficient,
}

impl Branch {
    /// First matching row for the given features.
    #[must_use]
    pub const fn select(features: &Features) -> Self {
        if features.has_factual_words {
            Self::Factual
        } else if features.has_opinion_words {
            Self::Opinion
        } else if features.word_count > LONG_TEXT_WORDS {
            Self::Lengthy
        } else {
            Self::Insufficient
        }
    }

    const fn rule(self) -> &'static Rule {
        match self {
            Self::Factual => &FACTUAL,
            Self::Opinion => &OPINION,
            Self::Lengthy => &LENGTHY,
            Self::Insufficient => &INSUFFICIENT,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Factual => "factual",
            Self::Opinion => "opinion",
            Self::Lengthy => "lengthy",
            Self::Insufficient => "insufficient",
        }
    }
}

impl fmt::Display for Branch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A base value plus a jitter drawn from `0..=spread`.
struct Range {
    base: u8,
    spread: u8,
}

struct Rule {
    verdict: Verdict,
    confidence: Range,
    ai_score: Range,
    sources: &'static [&'static str],
}

const FACTUAL: Rule = Rule {
    verdict: Verdict::Verified,
    confidence: Range { base: 70, spread: 19 },
    ai_score: Range { base: 75, spread: 14 },
    sources: &["Reuters", "Associated Press", "Encyclopaedia Britannica"],
};

const OPINION: Rule = Rule {
    verdict: Verdict::Warning,
    confidence: Range { base: 30, spread: 14 },
    ai_score: Range { base: 35, spread: 9 },
    sources: &["Social media posts", "Personal blogs"],
};

const LENGTHY: Rule = Rule {
    verdict: Verdict::Unverified,
    confidence: Range { base: 55, spread: 19 },
    ai_score: Range { base: 50, spread: 14 },
    sources: &["News aggregators", "Public forums"],
};

const INSUFFICIENT: Rule = Rule {
    verdict: Verdict::Warning,
    confidence: Range { base: 40, spread: 14 },
    ai_score: Range { base: 40, spread: 9 },
    sources: &[INSUFFICIENT_DATA],
};

/// Output of the scoring policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Score {
    pub branch: Branch,
    pub confidence: u8,
    pub verdict: Verdict,
    pub sources: Vec<String>,
    pub ai_score: u8,
}

/// Apply the decision table. Confidence is drawn before the AI score.
pub fn score<J: JitterSource + ?Sized>(features: &Features, jitter: &mut J) -> Score {
    let branch = Branch::select(features);
    let rule = branch.rule();
    let confidence = draw(&rule.confidence, jitter);
    let ai_score = draw(&rule.ai_score, jitter);

    tracing::debug!(%branch, confidence, ai_score, "scored text");

    Score {
        branch,
        confidence,
        verdict: rule.verdict,
        sources: rule.sources.iter().map(|s| (*s).to_string()).collect(),
        ai_score,
    }
}

fn draw<J: JitterSource + ?Sized>(range: &Range, jitter: &mut J) -> u8 {
    // Sources may hand back anything; keep the draw inside the spread.
    let offset = jitter.draw(0, range.spread).min(range.spread);
    range.base.saturating_add(offset).min(MAX_SCORE)
}
