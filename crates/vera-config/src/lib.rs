//! # vera-config
//!
//! Layered configuration loading for Vera using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`VERA_*` prefix, `__` as separator)
//! 2. Project-level `.vera/config.toml`
//! 3. User-level `~/.config/vera/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `VERA_HISTORY__CAPACITY` -> `history.capacity`,
//! `VERA_ANALYSIS__SEED` -> `analysis.seed`, etc. The `__` (double underscore)
//! separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use vera_config::VeraConfig;
//!
//! let config = VeraConfig::load_with_dotenv().expect("config");
//! println!("history slot: {}", config.history.storage_key);
//! ```

mod analysis;
mod error;
mod history;
mod lexicon;

pub use analysis::AnalysisConfig;
pub use error::ConfigError;
pub use history::HistoryConfig;
pub use lexicon::LexiconConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct VeraConfig {
    #[serde(default)]
    pub history: HistoryConfig,
    #[serde(default)]
    pub analysis: AnalysisConfig,
    #[serde(default)]
    pub lexicon: LexiconConfig,
}

impl VeraConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a source fails to parse or a value is out of range.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load configuration with `.env` file support from the current directory.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a source fails to parse or a value is out of range.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Extract and validate a config from an arbitrary figment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if extraction fails or a value is out of range.
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".vera/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("VERA_").split("__"))
    }

    /// Reject values the engine and history store cannot work with.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.history.capacity == 0 {
            return Err(ConfigError::InvalidValue {
                field: "history.capacity".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        if self.history.storage_key.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "history.storage_key".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        if self
            .history
            .storage_key
            .contains(|c: char| c == '/' || c == '\\')
        {
            return Err(ConfigError::InvalidValue {
                field: "history.storage_key".to_string(),
                reason: "must not contain path separators".to_string(),
            });
        }
        if self.analysis.preview_chars == 0 {
            return Err(ConfigError::InvalidValue {
                field: "analysis.preview_chars".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("vera").join("config.toml"))
    }
}
