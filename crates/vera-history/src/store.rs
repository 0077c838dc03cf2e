//! The bounded history store.

use std::sync::{Mutex, MutexGuard, PoisonError};

use vera_core::entities::AnalysisResult;

use crate::error::HistoryError;
use crate::storage::Storage;

/// Slot name used when none is configured.
pub const DEFAULT_STORAGE_KEY: &str = "analysis_history";

/// Number of results kept when no capacity is configured.
pub const DEFAULT_CAPACITY: usize = 50;

/// Construction-time settings of a [`HistoryStore`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryOptions {
    pub storage_key: String,
    /// Maximum number of entries; values below 1 are treated as 1.
    pub capacity: usize,
}

impl Default for HistoryOptions {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            capacity: DEFAULT_CAPACITY,
        }
    }
}

impl HistoryOptions {
    #[must_use]
    pub fn new(storage_key: impl Into<String>, capacity: usize) -> Self {
        Self {
            storage_key: storage_key.into(),
            capacity: capacity.max(1),
        }
    }
}

#[derive(Debug, Default)]
struct State {
    entries: Vec<AnalysisResult>,
    last_persist_error: Option<String>,
}

/// Newest-first, capacity-bounded history persisted after every mutation.
///
/// ```text
/// Empty --record--> NonEmpty --record--> NonEmpty
///   ^                  |
///   +------clear-------+
/// ```
///
/// `record` and `clear` hold an internal lock across update and persist, so a
/// reader never observes more than `capacity` entries or a gap in the middle.
/// Persistence is best effort: a failed write is logged and reported through
/// [`HistoryStore::last_persist_error`], and the in-memory history stands.
#[derive(Debug)]
pub struct HistoryStore<S> {
    storage: S,
    options: HistoryOptions,
    state: Mutex<State>,
}

impl<S: Storage> HistoryStore<S> {
    /// Store with an empty in-memory history. Call [`Self::load`] to read the
    /// persisted one.
    #[must_use]
    pub fn new(storage: S, options: HistoryOptions) -> Self {
        let options = HistoryOptions::new(options.storage_key, options.capacity);
        Self {
            storage,
            options,
            state: Mutex::new(State::default()),
        }
    }

    /// Store initialised from the persisted history.
    #[must_use]
    pub fn open(storage: S, options: HistoryOptions) -> Self {
        let store = Self::new(storage, options);
        store.load();
        store
    }

    #[must_use]
    pub const fn options(&self) -> &HistoryOptions {
        &self.options
    }

    #[must_use]
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    /// Replace the in-memory history with the persisted one and return it.
    ///
    /// Entries that fail to decode (for example an unparsable timestamp) or
    /// hold values outside the documented ranges are dropped individually. A missing, unreadable or corrupt slot yields an
    /// empty history. Never fails.
    pub fn load(&self) -> Vec<AnalysisResult> {
        let entries = self.read_persisted();
        let mut state = self.lock();
        state.entries.clone_from(&entries);
        entries
    }

    /// Prepend `result`, trim to capacity, persist, and return the new history.
    pub fn record(&self, result: AnalysisResult) -> Vec<AnalysisResult> {
        let mut state = self.lock();
        state.entries.insert(0, result);
        state.entries.truncate(self.options.capacity);
        self.persist(&mut state);
        state.entries.clone()
    }

    /// Empty the history, persist, and return the (empty) history.
    pub fn clear(&self) -> Vec<AnalysisResult> {
        let mut state = self.lock();
        state.entries.clear();
        self.persist(&mut state);
        Vec::new()
    }

    /// Snapshot of the current history, newest first.
    #[must_use]
    pub fn entries(&self) -> Vec<AnalysisResult> {
        self.lock().entries.clone()
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<AnalysisResult> {
        self.lock().entries.iter().find(|entry| entry.id == id).cloned()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().entries.is_empty()
    }

    /// Error message of the most recent mutation's write, if it failed.
    #[must_use]
    pub fn last_persist_error(&self) -> Option<String> {
        self.lock().last_persist_error.clone()
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn persist(&self, state: &mut State) {
        match self.write_entries(&state.entries) {
            Ok(()) => state.last_persist_error = None,
            Err(error) => {
                tracing::warn!(
                    %error,
                    key = %self.options.storage_key,
                    "failed to persist history; keeping in-memory state"
                );
                state.last_persist_error = Some(error.to_string());
            }
        }
    }

    fn write_entries(&self, entries: &[AnalysisResult]) -> Result<(), HistoryError> {
        let json = serde_json::to_string(entries)?;
        self.storage.write(&self.options.storage_key, &json)
    }

    fn read_persisted(&self) -> Vec<AnalysisResult> {
        let key = &self.options.storage_key;
        let raw = match self.storage.read(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(error) => {
                tracing::warn!(%error, %key, "failed to read history; starting empty");
                return Vec::new();
            }
        };

        let values: Vec<serde_json::Value> = match serde_json::from_str(&raw) {
            Ok(values) => values,
            Err(error) => {
                tracing::warn!(%error, %key, "history slot is corrupt; starting empty");
                return Vec::new();
            }
        };

        let total = values.len();
        let mut entries: Vec<AnalysisResult> = values
            .into_iter()
            .filter_map(|value| match serde_json::from_value::<AnalysisResult>(value) {
                Ok(entry) => match entry.check_ranges() {
                    Ok(()) => Some(entry),
                    Err(error) => {
                        tracing::warn!(
                            %error,
                            %key,
                            id = %entry.id,
                            "dropping out-of-range history entry"
                        );
                        None
                    }
                },
                Err(error) => {
                    tracing::warn!(%error, %key, "dropping malformed history entry");
                    None
                }
            })
            .collect();

        if entries.len() < total {
            tracing::debug!(
                kept = entries.len(),
                dropped = total - entries.len(),
                "loaded history with dropped entries"
            );
        }

        entries.truncate(self.options.capacity);
        entries
    }
}
