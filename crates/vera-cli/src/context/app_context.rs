use std::time::Duration;

use anyhow::Context;
use vera_config::VeraConfig;
use vera_engine::{LocalAnalyzer, RandomJitter};
use vera_history::{FileStorage, HistoryOptions, HistoryStore, SlotLock};

use crate::bootstrap;

/// How long a mutating command waits for another `vera` process to finish.
const HISTORY_LOCK_WAIT: Duration = Duration::from_secs(30);

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub analyzer: LocalAnalyzer,
    pub history: HistoryStore<FileStorage>,
}

impl AppContext {
    /// Build the analyzer and open the persisted history.
    pub fn init(config: &VeraConfig) -> anyhow::Result<Self> {
        let lexicon = bootstrap::build_lexicon(&config.lexicon)?;

        let jitter = config
            .analysis
            .seed
            .map_or_else(RandomJitter::from_entropy, RandomJitter::seeded);
        let analyzer = LocalAnalyzer::with_jitter(lexicon, jitter)
            .with_latency(Some(Duration::from_millis(config.analysis.latency_ms)))
            .with_preview_chars(config.analysis.preview_chars);

        let storage = FileStorage::new(config.history.resolved_dir());
        let options = HistoryOptions::new(&config.history.storage_key, config.history.capacity);
        let history = HistoryStore::open(storage, options);

        tracing::debug!(
            dir = %history.storage().dir().display(),
            entries = history.len(),
            "history opened"
        );

        Ok(Self { analyzer, history })
    }

    /// Take the cross-process slot lock, then reload the history so the
    /// caller mutates what other processes last wrote.
    pub async fn lock_history(&self) -> anyhow::Result<SlotLock> {
        let storage = self.history.storage().clone();
        let key = self.history.options().storage_key.clone();
        let lock = tokio::task::spawn_blocking(move || storage.lock(&key, HISTORY_LOCK_WAIT))
            .await
            .context("history lock task failed")?
            .context("failed to lock history")?;

        self.history.load();
        Ok(lock)
    }
}
