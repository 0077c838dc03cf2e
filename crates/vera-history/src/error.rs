//! History error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from reading or writing the history slot.
#[derive(Debug, Error)]
pub enum HistoryError {
    /// Filesystem access failed.
    #[error("History I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The history could not be encoded.
    #[error("History serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The storage key cannot name a slot.
    #[error("Invalid storage key '{0}'")]
    InvalidKey(String),

    /// Another writer holds the slot's lock file.
    #[error("History slot is locked by {holder} ({})", path.display())]
    Locked { path: PathBuf, holder: String },

    /// A storage backend refused the operation.
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}
