//! # vera-history
//!
//! Bounded, newest-first history of analysis results.
//!
//! The [`HistoryStore`] is the only writer of a history. Every mutation
//! persists the whole sequence into one named slot of a [`Storage`] backend as
//! a JSON array. Reads are lenient: malformed entries are dropped one by one
//! and an unreadable slot loads as an empty history.
//!
//! A [`HistoryStore`] only serialises writers inside one process. Separate
//! processes sharing a [`FileStorage`] slot hold a [`SlotLock`] around each
//! mutation.

mod error;
mod lock;
mod storage;
mod store;

pub use error::HistoryError;
pub use lock::{STALE_LOCK_AGE, SlotLock};
pub use storage::{FileStorage, MemoryStorage, Storage};
pub use store::{DEFAULT_CAPACITY, DEFAULT_STORAGE_KEY, HistoryOptions, HistoryStore};
