//! Lexicon overrides.
//!
//! Each list holds case-insensitive regex fragments. An empty list keeps the
//! built-in English set for that category, so a config file can replace one
//! category without restating the others.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct LexiconConfig {
    #[serde(default)]
    pub factual: Vec<String>,
    #[serde(default)]
    pub opinion: Vec<String>,
    #[serde(default)]
    pub positive: Vec<String>,
    #[serde(default)]
    pub negative: Vec<String>,
}

impl LexiconConfig {
    /// Whether any category is overridden.
    #[must_use]
    pub fn is_customized(&self) -> bool {
        !(self.factual.is_empty()
            && self.opinion.is_empty()
            && self.positive.is_empty()
            && self.negative.is_empty())
    }
}
