//! Analysis engine configuration.

use serde::{Deserialize, Serialize};

/// Default number of characters kept in the stored text preview.
const fn default_preview_chars() -> usize {
    100
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct AnalysisConfig {
    /// Simulated "thinking" delay before a result is produced, in milliseconds.
    /// Zero disables it.
    #[serde(default)]
    pub latency_ms: u64,

    /// Seed for the scoring jitter. Unset means a fresh entropy-seeded source.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Characters of input text kept in a stored result.
    #[serde(default = "default_preview_chars")]
    pub preview_chars: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            latency_ms: 0,
            seed: None,
            preview_chars: default_preview_chars(),
        }
    }
}
