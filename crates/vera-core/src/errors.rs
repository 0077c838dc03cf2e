//! Cross-cutting error types for Vera.
//!
//! Domain-specific errors (`EngineError`, `HistoryError`, `ConfigError`) are
//! defined in their respective crates and converge into `anyhow` in `vera-cli`.

use thiserror::Error;

/// Errors that can be raised by any Vera crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Data failed validation (shape, range, required content).
    #[error("Validation error: {0}")]
    Validation(String),

    /// A payload could not be decoded as JSON of the expected shape.
    #[error("Malformed payload: {0}")]
    Malformed(#[from] serde_json::Error),
}
