//! The analysis contract and the local heuristic implementation.

use std::future::Future;
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use chrono::{DateTime, Utc};
use vera_core::entities::{AnalysisResult, Assessment};
use vera_core::text::{PREVIEW_CHARS, is_blank};

use crate::detector::Features;
use crate::error::EngineError;
use crate::insights;
use crate::jitter::{JitterSource, RandomJitter};
use crate::lexicon::Lexicon;
use crate::scoring;
use crate::sentiment;

/// Maps raw text to an analysis result.
///
/// Blank input is a no-op and yields `Ok(None)`. Implementations must not
/// touch any shared state before the returned future completes, so dropping
/// the future cancels the analysis cleanly.
pub trait Analyzer {
    fn analyze(
        &self,
        raw_text: &str,
    ) -> impl Future<Output = Result<Option<AnalysisResult>, EngineError>> + Send;
}

/// Heuristic analyzer driven by lexical pattern matching.
#[derive(Debug)]
pub struct LocalAnalyzer<J = RandomJitter> {
    lexicon: Lexicon,
    jitter: Mutex<J>,
    latency: Option<Duration>,
    preview_chars: usize,
}

impl LocalAnalyzer<RandomJitter> {
    /// Analyzer with an entropy-seeded jitter source and no latency.
    #[must_use]
    pub fn new(lexicon: Lexicon) -> Self {
        Self::with_jitter(lexicon, RandomJitter::from_entropy())
    }
}

impl<J: JitterSource> LocalAnalyzer<J> {
    #[must_use]
    pub fn with_jitter(lexicon: Lexicon, jitter: J) -> Self {
        Self {
            lexicon,
            jitter: Mutex::new(jitter),
            latency: None,
            preview_chars: PREVIEW_CHARS,
        }
    }

    /// Simulated "thinking" delay awaited before each analysis. It never
    /// changes the produced values. `None` or a zero duration disables it.
    #[must_use]
    pub fn with_latency(mut self, latency: Option<Duration>) -> Self {
        self.latency = latency.filter(|d| !d.is_zero());
        self
    }

    /// Characters of input kept in the stored preview.
    #[must_use]
    pub fn with_preview_chars(mut self, preview_chars: usize) -> Self {
        self.preview_chars = preview_chars;
        self
    }

    #[must_use]
    pub const fn latency(&self) -> Option<Duration> {
        self.latency
    }

    #[must_use]
    pub const fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Score a text without stamping it. `None` for blank input.
    #[must_use]
    pub fn assess(&self, raw_text: &str) -> Option<Assessment> {
        if is_blank(raw_text) {
            return None;
        }

        let features = Features::detect(&self.lexicon, raw_text);
        let score = {
            let mut jitter = self.jitter.lock().unwrap_or_else(PoisonError::into_inner);
            scoring::score(&features, &mut *jitter)
        };
        let sentiment = sentiment::classify(features.positive_count, features.negative_count);
        let ai_insights = insights::generate(&features);

        Some(Assessment {
            confidence: score.confidence,
            verdict: score.verdict,
            sources: score.sources,
            sentiment: sentiment.sentiment,
            sentiment_score: sentiment.score,
            ai_score: score.ai_score,
            ai_insights,
        })
    }

    /// Synchronous analysis at a given instant, without the simulated latency.
    #[must_use]
    pub fn analyze_at(&self, raw_text: &str, now: DateTime<Utc>) -> Option<AnalysisResult> {
        let assessment = self.assess(raw_text)?;
        let result = AnalysisResult::from_assessment(raw_text, assessment, now, self.preview_chars);
        tracing::debug!(
            id = %result.id,
            verdict = %result.verdict,
            sentiment = %result.sentiment,
            "analysis complete"
        );
        Some(result)
    }
}

impl<J: JitterSource + Send> Analyzer for LocalAnalyzer<J> {
    async fn analyze(&self, raw_text: &str) -> Result<Option<AnalysisResult>, EngineError> {
        if is_blank(raw_text) {
            tracing::debug!("skipping blank input");
            return Ok(None);
        }

        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }

        Ok(self.analyze_at(raw_text, Utc::now()))
    }
}
