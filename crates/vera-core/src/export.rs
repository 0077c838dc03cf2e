//! Downloadable summary of a single analysis result.

use serde::{Deserialize, Serialize};

use crate::entities::AnalysisResult;
use crate::enums::{Sentiment, Verdict};

/// Score block of an [`ExportDocument`]. Percent scores are rendered as
/// strings such as `"87%"`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ExportAnalysis {
    pub confidence: String,
    pub verdict: Verdict,
    pub sentiment: Sentiment,
    pub sentiment_score: i8,
    pub ai_score: String,
}

/// JSON document summarising one result for export to a file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ExportDocument {
    pub text: String,
    pub analysis: ExportAnalysis,
    pub sources: Vec<String>,
    pub ai_insights: Vec<String>,
    /// ISO 8601 creation timestamp.
    pub timestamp: String,
}

impl ExportDocument {
    #[must_use]
    pub fn from_result(result: &AnalysisResult) -> Self {
        Self {
            text: result.text.clone(),
            analysis: ExportAnalysis {
                confidence: format!("{}%", result.confidence),
                verdict: result.verdict,
                sentiment: result.sentiment,
                sentiment_score: result.sentiment_score,
                ai_score: format!("{}%", result.ai_score),
            },
            sources: result.sources.clone(),
            ai_insights: result.ai_insights.clone(),
            timestamp: result
                .timestamp
                .to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
        }
    }

    /// Default file name for an exported result.
    #[must_use]
    pub fn file_name(result: &AnalysisResult) -> String {
        format!("analysis-{}.json", result.id)
    }
}
