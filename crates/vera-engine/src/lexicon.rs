//! Lexicon: the swappable word lists the detector matches against.
//!
//! A lexicon maps each [`Category`] to a set of regex fragments. Fragments are
//! stems rather than whole words, so `statistic` also matches `statistics`.
//! All matching is case-insensitive. Categories are designed to be disjoint.

use std::fmt;
use std::sync::LazyLock;

use regex::{Regex, RegexBuilder};

use crate::error::EngineError;

/// Pattern classes the detector looks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Factual,
    Opinion,
    Positive,
    Negative,
}

impl Category {
    pub const ALL: [Self; 4] = [Self::Factual, Self::Opinion, Self::Positive, Self::Negative];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Factual => "factual",
            Self::Opinion => "opinion",
            Self::Positive => "positive",
            Self::Negative => "negative",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

const ENGLISH_FACTUAL: &[&str] = &[
    "[0-9]+",
    "percent",
    "statistic",
    "research",
    "stud(?:y|ies)",
    "scientist",
    "expert",
];

const ENGLISH_OPINION: &[&str] = &[
    r"\bi\s+think",
    r"\bi\s+believe",
    "possibly",
    "probably",
    "maybe",
];

const ENGLISH_POSITIVE: &[&str] = &["good", "excellent", "wonderful", "remarkable", "success"];

const ENGLISH_NEGATIVE: &[&str] = &["bad", "terrible", "failure", "catastroph", "problem"];

/// Uncompiled pattern lists, one per category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexiconPatterns {
    pub factual: Vec<String>,
    pub opinion: Vec<String>,
    pub positive: Vec<String>,
    pub negative: Vec<String>,
}

impl LexiconPatterns {
    /// The built-in English pattern set.
    #[must_use]
    pub fn english() -> Self {
        let owned = |patterns: &[&str]| -> Vec<String> {
            patterns.iter().map(|p| (*p).to_string()).collect()
        };
        Self {
            factual: owned(ENGLISH_FACTUAL),
            opinion: owned(ENGLISH_OPINION),
            positive: owned(ENGLISH_POSITIVE),
            negative: owned(ENGLISH_NEGATIVE),
        }
    }

    /// Replace one category's patterns. An empty list leaves it unchanged.
    #[must_use]
    pub fn with_category(mut self, category: Category, patterns: Vec<String>) -> Self {
        if !patterns.is_empty() {
            *self.get_mut(category) = patterns;
        }
        self
    }

    #[must_use]
    pub fn get(&self, category: Category) -> &[String] {
        match category {
            Category::Factual => &self.factual,
            Category::Opinion => &self.opinion,
            Category::Positive => &self.positive,
            Category::Negative => &self.negative,
        }
    }

    fn get_mut(&mut self, category: Category) -> &mut Vec<String> {
        match category {
            Category::Factual => &mut self.factual,
            Category::Opinion => &mut self.opinion,
            Category::Positive => &mut self.positive,
            Category::Negative => &mut self.negative,
        }
    }
}

/// Compiled lexicon. Cloning is cheap; compiled regexes are shared.
#[derive(Debug, Clone)]
pub struct Lexicon {
    factual: Regex,
    opinion: Regex,
    positive: Regex,
    negative: Regex,
}

static ENGLISH: LazyLock<Lexicon> = LazyLock::new(|| {
    Lexicon::compile(&LexiconPatterns::english()).expect("built-in lexicon patterns are valid")
});

impl Default for Lexicon {
    fn default() -> Self {
        Self::english()
    }
}

impl Lexicon {
    /// The built-in English lexicon.
    #[must_use]
    pub fn english() -> Self {
        ENGLISH.clone()
    }

    /// Compile a pattern set.
    ///
    /// # Errors
    ///
    /// Returns `EngineError` if a category is empty, a fragment is not a valid
    /// regex, or a fragment matches the empty string.
    pub fn compile(patterns: &LexiconPatterns) -> Result<Self, EngineError> {
        Ok(Self {
            factual: compile_category(Category::Factual, patterns.get(Category::Factual))?,
            opinion: compile_category(Category::Opinion, patterns.get(Category::Opinion))?,
            positive: compile_category(Category::Positive, patterns.get(Category::Positive))?,
            negative: compile_category(Category::Negative, patterns.get(Category::Negative))?,
        })
    }

    #[must_use]
    pub const fn regex(&self, category: Category) -> &Regex {
        match category {
            Category::Factual => &self.factual,
            Category::Opinion => &self.opinion,
            Category::Positive => &self.positive,
            Category::Negative => &self.negative,
        }
    }

    /// Whether any pattern of `category` occurs in `text`.
    #[must_use]
    pub fn matches(&self, category: Category, text: &str) -> bool {
        self.regex(category).is_match(text)
    }

    /// Number of non-overlapping matches of `category` in `text`.
    #[must_use]
    pub fn count(&self, category: Category, text: &str) -> usize {
        self.regex(category).find_iter(text).count()
    }
}

fn compile_category(category: Category, patterns: &[String]) -> Result<Regex, EngineError> {
    if patterns.is_empty() {
        return Err(EngineError::EmptyCategory { category });
    }

    for pattern in patterns {
        let single = build(pattern).map_err(|source| EngineError::InvalidPattern {
            category,
            pattern: pattern.clone(),
            source,
        })?;
        if single.is_match("") {
            return Err(EngineError::EmptyMatch {
                category,
                pattern: pattern.clone(),
            });
        }
    }

    let alternation = patterns
        .iter()
        .map(|p| format!("(?:{p})"))
        .collect::<Vec<_>>()
        .join("|");
    build(&alternation).map_err(|source| EngineError::InvalidPattern {
        category,
        pattern: alternation,
        source,
    })
}

fn build(pattern: &str) -> Result<Regex, regex::Error> {
    RegexBuilder::new(pattern).case_insensitive(true).build()
}
