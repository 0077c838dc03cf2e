//! Entity structs for analysis results.
//!
//! Field names serialize in `camelCase` because the history slot and the
//! remote payload both use that shape (`sentimentScore`, `aiScore`,
//! `aiInsights`).

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{Sentiment, Verdict};
use crate::errors::CoreError;
use crate::ids::next_result_id;
use crate::text::preview;

/// Upper bound of `confidence` and `ai_score`.
pub const MAX_SCORE: u8 = 100;

/// Bound of `sentiment_score` in both directions.
pub const MAX_SENTIMENT_MAGNITUDE: i8 = 10;

/// Scores and observations for one text, before it is stamped with an ID,
/// a timestamp and the stored preview.
///
/// Both the local heuristic analyzer and a remote analyzer produce this shape.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Assessment {
    pub confidence: u8,
    pub verdict: Verdict,
    pub sources: Vec<String>,
    pub sentiment: Sentiment,
    pub sentiment_score: i8,
    pub ai_score: u8,
    pub ai_insights: Vec<String>,
}

/// The outcome of analysing one text. Immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub id: String,
    /// Input text cut to the preview length, with `...` when longer.
    pub text: String,
    pub confidence: u8,
    pub verdict: Verdict,
    pub sources: Vec<String>,
    pub sentiment: Sentiment,
    pub sentiment_score: i8,
    pub ai_score: u8,
    pub ai_insights: Vec<String>,
    pub timestamp: DateTime<Utc>,
}

impl AnalysisResult {
    /// Stamp an assessment with a fresh ID, the given instant and the text
    /// preview. Scores are clamped into their documented ranges.
    #[must_use]
    pub fn from_assessment(
        raw_text: &str,
        assessment: Assessment,
        timestamp: DateTime<Utc>,
        preview_chars: usize,
    ) -> Self {
        Self {
            id: next_result_id(timestamp),
            text: preview(raw_text, preview_chars),
            confidence: assessment.confidence.min(MAX_SCORE),
            verdict: assessment.verdict,
            sources: assessment.sources,
            sentiment: assessment.sentiment,
            sentiment_score: assessment
                .sentiment_score
                .clamp(-MAX_SENTIMENT_MAGNITUDE, MAX_SENTIMENT_MAGNITUDE),
            ai_score: assessment.ai_score.min(MAX_SCORE),
            ai_insights: assessment.ai_insights,
            timestamp,
        }
    }

    /// Check the documented ranges: scores within `0..=100`, sentiment within
    /// `-10..=10`, at least one insight.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` naming the first field out of range.
    pub fn check_ranges(&self) -> Result<(), CoreError> {
        if self.confidence > MAX_SCORE {
            return Err(out_of_range("confidence", self.confidence));
        }
        if self.ai_score > MAX_SCORE {
            return Err(out_of_range("aiScore", self.ai_score));
        }
        if self.sentiment_score.unsigned_abs() > MAX_SENTIMENT_MAGNITUDE.unsigned_abs() {
            return Err(out_of_range("sentimentScore", self.sentiment_score));
        }
        if self.ai_insights.is_empty() {
            return Err(CoreError::Validation("aiInsights is empty".to_string()));
        }
        Ok(())
    }
}

fn out_of_range(field: &str, value: impl std::fmt::Display) -> CoreError {
    CoreError::Validation(format!("{field} {value} is out of range"))
}
