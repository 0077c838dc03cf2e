//! Storage backends for the history slot.

use std::collections::HashMap;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use crate::error::HistoryError;

/// A set of named text slots.
///
/// Implementations may use files, a key-value store, or memory.
pub trait Storage: Send + Sync {
    /// Contents of a slot, or `None` if it was never written.
    ///
    /// # Errors
    ///
    /// Returns `HistoryError` if the slot exists but cannot be read.
    fn read(&self, key: &str) -> Result<Option<String>, HistoryError>;

    /// Replace the contents of a slot.
    ///
    /// # Errors
    ///
    /// Returns `HistoryError` if the slot cannot be written.
    fn write(&self, key: &str, contents: &str) -> Result<(), HistoryError>;
}

impl<S: Storage + ?Sized> Storage for Arc<S> {
    fn read(&self, key: &str) -> Result<Option<String>, HistoryError> {
        (**self).read(key)
    }

    fn write(&self, key: &str, contents: &str) -> Result<(), HistoryError> {
        (**self).write(key, contents)
    }
}

// ---------------------------------------------------------------------------
// FileStorage
// ---------------------------------------------------------------------------

/// One JSON file per slot: `{dir}/{key}.json`.
///
/// Writes go to a temporary file in the same directory which is then renamed
/// over the slot, so readers see either the old or the new contents.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File backing a slot.
    ///
    /// # Errors
    ///
    /// Returns `HistoryError::InvalidKey` for keys that are empty or would
    /// escape the storage directory.
    pub fn slot_path(&self, key: &str) -> Result<PathBuf, HistoryError> {
        self.key_path(key, "json")
    }

    /// `{dir}/{key}.{extension}` for a validated key.
    pub(crate) fn key_path(&self, key: &str, extension: &str) -> Result<PathBuf, HistoryError> {
        if key.is_empty() || key.contains(['/', '\\']) || key == "." || key == ".." {
            return Err(HistoryError::InvalidKey(key.to_string()));
        }
        Ok(self.dir.join(format!("{key}.{extension}")))
    }
}

impl Storage for FileStorage {
    fn read(&self, key: &str) -> Result<Option<String>, HistoryError> {
        let path = self.slot_path(key)?;
        match std::fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&self, key: &str, contents: &str) -> Result<(), HistoryError> {
        let path = self.slot_path(key)?;
        std::fs::create_dir_all(&self.dir)?;

        let mut tmp = tempfile::NamedTempFile::new_in(&self.dir)?;
        tmp.write_all(contents.as_bytes())?;
        tmp.as_file().sync_all()?;
        tmp.persist(&path).map_err(|e| HistoryError::Io(e.error))?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// MemoryStorage
// ---------------------------------------------------------------------------

/// Process-local slots, for tests and throwaway sessions.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    slots: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>, HistoryError> {
        let slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(slots.get(key).cloned())
    }

    fn write(&self, key: &str, contents: &str) -> Result<(), HistoryError> {
        let mut slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
        slots.insert(key.to_string(), contents.to_string());
        Ok(())
    }
}
