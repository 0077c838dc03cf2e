//! # vera-engine
//!
//! Heuristic text analysis for Vera.
//!
//! The pipeline is leaf-first:
//! - [`lexicon`]: category -> pattern set, compiled to case-insensitive regexes
//! - [`detector`]: scans text into [`Features`]
//! - [`scoring`], [`sentiment`], [`insights`]: independent policies over the
//!   same features
//! - [`analyzer`]: the [`Analyzer`] contract and the [`LocalAnalyzer`] that
//!   composes the policies
//!
//! Randomness only enters through a [`JitterSource`], so a fixed source makes
//! every output reproducible.

pub mod analyzer;
pub mod detector;
pub mod error;
pub mod insights;
pub mod jitter;
pub mod lexicon;
pub mod scoring;
pub mod sentiment;

pub use analyzer::{Analyzer, LocalAnalyzer};
pub use detector::Features;
pub use error::EngineError;
pub use jitter::{JitterSource, MaximumJitter, MinimumJitter, RandomJitter};
pub use lexicon::{Category, Lexicon, LexiconPatterns};
