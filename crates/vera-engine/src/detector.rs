//! Lexical feature detection.

use vera_core::text::word_count;

use crate::lexicon::{Category, Lexicon};

/// Everything the policies need to know about a text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Features {
    pub has_factual_words: bool,
    pub has_opinion_words: bool,
    pub positive_count: usize,
    pub negative_count: usize,
    pub word_count: usize,
}

impl Features {
    /// Scan `text` against every lexicon category.
    #[must_use]
    pub fn detect(lexicon: &Lexicon, text: &str) -> Self {
        Self {
            has_factual_words: lexicon.matches(Category::Factual, text),
            has_opinion_words: lexicon.matches(Category::Opinion, text),
            positive_count: lexicon.count(Category::Positive, text),
            negative_count: lexicon.count(Category::Negative, text),
            word_count: word_count(text),
        }
    }
}
