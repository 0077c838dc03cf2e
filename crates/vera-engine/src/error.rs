//! Engine error types.

use thiserror::Error;
use vera_core::CoreError;

use crate::lexicon::Category;

/// Errors from building or running an analyzer.
#[derive(Debug, Error)]
pub enum EngineError {
    /// A lexicon category has no patterns at all.
    #[error("Lexicon category '{category}' has no patterns")]
    EmptyCategory { category: Category },

    /// A lexicon pattern is not a valid regex.
    #[error("Invalid {category} pattern '{pattern}': {source}")]
    InvalidPattern {
        category: Category,
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// A lexicon pattern matches the empty string and would count everywhere.
    #[error("{category} pattern '{pattern}' matches empty text")]
    EmptyMatch { category: Category, pattern: String },

    /// An analyzer backed by another data source returned an unusable answer.
    #[error("Analysis source failed: {0}")]
    Source(#[from] CoreError),
}
