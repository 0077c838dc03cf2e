//! # vera-core
//!
//! Core types, ID generation, and error types for Vera.
//!
//! This crate provides the foundational types shared across all Vera crates:
//! - `AnalysisResult`, the stamped and immutable output of one analysis
//! - `Assessment`, the un-stamped score shape produced by any analyzer
//! - `Verdict` and `Sentiment` classification enums
//! - Monotonic result ID generation
//! - Preview truncation for stored text
//! - The export document and remote payload decoding
//! - Cross-cutting error types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod export;
pub mod ids;
pub mod remote;
pub mod text;

pub use entities::{AnalysisResult, Assessment};
pub use enums::{Sentiment, Verdict};
pub use errors::CoreError;
