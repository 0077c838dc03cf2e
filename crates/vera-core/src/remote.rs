//! Decoding of the remote analysis payload.
//!
//! A remote analyzer answers `{ "text": ... }` with an object carrying the
//! same fields as [`Assessment`]. Remote services are loose about ranges and
//! sometimes wrap the object in a Markdown code fence, so the body is decoded
//! into a permissive shape first and then normalised.

use serde::Deserialize;

use crate::entities::{Assessment, MAX_SCORE, MAX_SENTIMENT_MAGNITUDE};
use crate::enums::{Sentiment, Verdict};
use crate::errors::CoreError;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RemotePayload {
    confidence: f64,
    verdict: Verdict,
    #[serde(default)]
    sources: Vec<String>,
    sentiment: Sentiment,
    sentiment_score: f64,
    ai_score: f64,
    ai_insights: Vec<String>,
}

impl Assessment {
    /// Decode a remote response body.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Malformed` when the body is not JSON of the
    /// expected shape and `CoreError::Validation` when a score is not a
    /// finite number or no insights were returned.
    pub fn from_remote_json(body: &str) -> Result<Self, CoreError> {
        let payload: RemotePayload = serde_json::from_str(strip_code_fence(body))?;

        let ai_insights: Vec<String> = payload
            .ai_insights
            .into_iter()
            .map(|insight| insight.trim().to_string())
            .filter(|insight| !insight.is_empty())
            .collect();
        if ai_insights.is_empty() {
            return Err(CoreError::Validation(
                "remote payload has no aiInsights".to_string(),
            ));
        }

        Ok(Self {
            confidence: percent(payload.confidence, "confidence")?,
            verdict: payload.verdict,
            sources: payload.sources,
            sentiment: payload.sentiment,
            sentiment_score: sentiment_score(payload.sentiment_score)?,
            ai_score: percent(payload.ai_score, "aiScore")?,
            ai_insights,
        })
    }
}

fn strip_code_fence(body: &str) -> &str {
    let trimmed = body.trim();
    let trimmed = trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .unwrap_or(trimmed);
    trimmed.strip_suffix("```").unwrap_or(trimmed).trim()
}

fn finite(value: f64, field: &str) -> Result<f64, CoreError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CoreError::Validation(format!("{field} is not a finite number")))
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn percent(value: f64, field: &str) -> Result<u8, CoreError> {
    let value = finite(value, field)?;
    Ok(value.round().clamp(0.0, f64::from(MAX_SCORE)) as u8)
}

#[allow(clippy::cast_possible_truncation)]
fn sentiment_score(value: f64) -> Result<i8, CoreError> {
    let value = finite(value, "sentimentScore")?;
    let bound = f64::from(MAX_SENTIMENT_MAGNITUDE);
    Ok(value.round().clamp(-bound, bound) as i8)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const BODY: &str = r#"{
        "confidence": 82,
        "verdict": "verified",
        "sources": ["Reuters", "BBC"],
        "sentiment": "neutral",
        "sentimentScore": 0,
        "aiScore": 77.6,
        "aiInsights": ["Claims cite official statistics", "  "]
    }"#;

    #[test]
    fn decodes_well_formed_body() {
        let assessment = Assessment::from_remote_json(BODY).unwrap();
        assert_eq!(assessment.confidence, 82);
        assert_eq!(assessment.verdict, Verdict::Verified);
        assert_eq!(assessment.ai_score, 78);
        assert_eq!(assessment.ai_insights, vec!["Claims cite official statistics"]);
    }

    #[test]
    fn strips_markdown_fence() {
        let fenced = format!("```json\n{BODY}\n```");
        assert!(Assessment::from_remote_json(&fenced).is_ok());
    }

    #[test]
    fn clamps_out_of_range_scores() {
        let body = r#"{"confidence": 140, "verdict": "warning", "sentiment": "negative",
            "sentimentScore": -65, "aiScore": -3, "aiInsights": ["x"]}"#;
        let assessment = Assessment::from_remote_json(body).unwrap();
        assert_eq!(assessment.confidence, 100);
        assert_eq!(assessment.sentiment_score, -10);
        assert_eq!(assessment.ai_score, 0);
        assert!(assessment.sources.is_empty());
    }

    #[test]
    fn rejects_malformed_body() {
        let err = Assessment::from_remote_json("<html>502</html>").unwrap_err();
        assert!(matches!(err, CoreError::Malformed(_)));
    }

    #[test]
    fn rejects_missing_insights() {
        let body = r#"{"confidence": 50, "verdict": "unverified", "sentiment": "neutral",
            "sentimentScore": 0, "aiScore": 50, "aiInsights": []}"#;
        let err = Assessment::from_remote_json(body).unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }
}
