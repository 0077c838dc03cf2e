//! Cross-process exclusion for a file-backed history slot.

use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant, SystemTime};

use crate::error::HistoryError;
use crate::storage::FileStorage;

/// Age after which a lock file is treated as left behind by a crashed writer.
/// Holders keep the lock only across one reload and slot rewrite.
pub const STALE_LOCK_AGE: Duration = Duration::from_secs(60);

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Exclusive hold on `{dir}/{key}.lock`. The file is removed on drop.
#[derive(Debug)]
pub struct SlotLock {
    path: PathBuf,
}

impl SlotLock {
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for SlotLock {
    fn drop(&mut self) {
        if let Err(error) = std::fs::remove_file(&self.path) {
            tracing::warn!(%error, path = %self.path.display(), "failed to release history lock");
        }
    }
}

impl FileStorage {
    /// Lock file guarding a slot, next to the slot file.
    ///
    /// # Errors
    ///
    /// Returns `HistoryError::InvalidKey` for the keys [`Self::slot_path`]
    /// rejects.
    pub fn lock_path(&self, key: &str) -> Result<PathBuf, HistoryError> {
        self.key_path(key, "lock")
    }

    /// Take the slot lock without waiting. A stale lock file is reclaimed.
    ///
    /// # Errors
    ///
    /// Returns `HistoryError::Locked` while another writer holds the slot,
    /// `HistoryError::InvalidKey` for a bad key, and `HistoryError::Io` when
    /// the lock file cannot be created.
    pub fn try_lock(&self, key: &str) -> Result<SlotLock, HistoryError> {
        let path = self.lock_path(key)?;
        std::fs::create_dir_all(self.dir())?;

        match create_lock_file(&path) {
            Err(HistoryError::Locked { holder, .. }) if is_stale(&path) => {
                tracing::debug!(%holder, path = %path.display(), "reclaiming stale history lock");
                match std::fs::remove_file(&path) {
                    Ok(()) => {}
                    Err(e) if e.kind() == ErrorKind::NotFound => {}
                    Err(e) => return Err(e.into()),
                }
                create_lock_file(&path)
            }
            other => other,
        }
    }

    /// Take the slot lock, polling until `wait` has elapsed.
    ///
    /// # Errors
    ///
    /// Returns the last `HistoryError::Locked` if the slot stays held for the
    /// whole wait, or any other error from [`Self::try_lock`] immediately.
    pub fn lock(&self, key: &str, wait: Duration) -> Result<SlotLock, HistoryError> {
        let deadline = Instant::now() + wait;
        loop {
            match self.try_lock(key) {
                Err(HistoryError::Locked { path, holder }) if Instant::now() < deadline => {
                    tracing::debug!(%holder, path = %path.display(), "history slot busy; waiting");
                    std::thread::sleep(POLL_INTERVAL);
                }
                result => return result,
            }
        }
    }
}

fn create_lock_file(path: &Path) -> Result<SlotLock, HistoryError> {
    match OpenOptions::new().create_new(true).write(true).open(path) {
        Ok(mut file) => {
            let lock = SlotLock {
                path: path.to_path_buf(),
            };
            writeln!(file, "pid {}", std::process::id())?;
            Ok(lock)
        }
        Err(e) if e.kind() == ErrorKind::AlreadyExists => Err(HistoryError::Locked {
            path: path.to_path_buf(),
            holder: std::fs::read_to_string(path)
                .map(|contents| contents.trim().to_string())
                .ok()
                .filter(|holder| !holder.is_empty())
                .unwrap_or_else(|| "an unknown writer".to_string()),
        }),
        Err(e) => Err(e.into()),
    }
}

fn is_stale(path: &Path) -> bool {
    std::fs::metadata(path)
        .and_then(|meta| meta.modified())
        .ok()
        .and_then(|modified| SystemTime::now().duration_since(modified).ok())
        .is_some_and(|age| age > STALE_LOCK_AGE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lock_sits_next_to_slot_and_is_released_on_drop() {
        let temp = tempfile::tempdir().expect("tempdir should create");
        let storage = FileStorage::new(temp.path().join("history"));

        let lock = storage.try_lock("analysis_history").expect("lock should acquire");
        assert_eq!(lock.path(), temp.path().join("history/analysis_history.lock"));
        assert!(lock.path().is_file());

        let path = lock.path().to_path_buf();
        drop(lock);
        assert!(!path.exists());
    }

    #[test]
    fn held_lock_reports_holder() {
        let temp = tempfile::tempdir().expect("tempdir should create");
        let storage = FileStorage::new(temp.path());
        let _held = storage.try_lock("analysis_history").expect("lock should acquire");

        match storage.try_lock("analysis_history") {
            Err(HistoryError::Locked { holder, .. }) => {
                assert_eq!(holder, format!("pid {}", std::process::id()));
            }
            other => panic!("expected Locked, got {other:?}"),
        }
    }

    #[test]
    fn keys_lock_independently() {
        let temp = tempfile::tempdir().expect("tempdir should create");
        let storage = FileStorage::new(temp.path());
        let _left = storage.try_lock("left").expect("left should lock");
        assert!(storage.try_lock("right").is_ok());
    }

    #[test]
    fn stale_lock_is_reclaimed() {
        let temp = tempfile::tempdir().expect("tempdir should create");
        let storage = FileStorage::new(temp.path());
        let path = storage.lock_path("analysis_history").unwrap();
        std::fs::write(&path, "pid 999999\n").unwrap();
        let old = SystemTime::now() - STALE_LOCK_AGE - Duration::from_secs(5);
        std::fs::File::options()
            .write(true)
            .open(&path)
            .unwrap()
            .set_modified(old)
            .unwrap();

        let lock = storage.try_lock("analysis_history").expect("stale lock should be reclaimed");
        let contents = std::fs::read_to_string(lock.path()).unwrap();
        assert_eq!(contents.trim(), format!("pid {}", std::process::id()));
    }

    #[test]
    fn lock_waits_for_release() {
        let temp = tempfile::tempdir().expect("tempdir should create");
        let storage = FileStorage::new(temp.path());
        let held = storage.try_lock("analysis_history").expect("lock should acquire");

        let releaser = std::thread::spawn(move || {
            std::thread::sleep(Duration::from_millis(150));
            drop(held);
        });

        let lock = storage.lock("analysis_history", Duration::from_secs(5));
        releaser.join().unwrap();
        assert!(lock.is_ok());
    }

    #[test]
    fn lock_gives_up_after_wait() {
        let temp = tempfile::tempdir().expect("tempdir should create");
        let storage = FileStorage::new(temp.path());
        let _held = storage.try_lock("analysis_history").expect("lock should acquire");

        let result = storage.lock("analysis_history", Duration::from_millis(120));
        assert!(matches!(result, Err(HistoryError::Locked { .. })));
    }

    #[test]
    fn lock_rejects_escaping_key() {
        let storage = FileStorage::new("/tmp");
        assert!(matches!(
            storage.try_lock("../outside"),
            Err(HistoryError::InvalidKey(_))
        ));
    }
}
