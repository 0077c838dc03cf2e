//! History storage configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Default name of the storage slot.
fn default_storage_key() -> String {
    "analysis_history".to_string()
}

/// Default number of retained results.
const fn default_capacity() -> usize {
    50
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct HistoryConfig {
    /// Directory holding the history slot. Empty means the platform data
    /// directory (`~/.local/share/vera` on Linux).
    #[serde(default)]
    pub dir: String,

    /// Name of the storage slot; the file is `{dir}/{storage_key}.json`.
    #[serde(default = "default_storage_key")]
    pub storage_key: String,

    /// Maximum number of results kept, newest first.
    #[serde(default = "default_capacity")]
    pub capacity: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            dir: String::new(),
            storage_key: default_storage_key(),
            capacity: default_capacity(),
        }
    }
}

impl HistoryConfig {
    /// Directory the history slot lives in, with the platform default filled in.
    #[must_use]
    pub fn resolved_dir(&self) -> PathBuf {
        if self.dir.is_empty() {
            dirs::data_dir()
                .map_or_else(|| PathBuf::from(".vera"), |p| p.join("vera"))
        } else {
            PathBuf::from(&self.dir)
        }
    }
}
