use anyhow::Context;
use vera_config::{LexiconConfig, VeraConfig};
use vera_engine::{Category, Lexicon, LexiconPatterns};

/// Load `.env` from the current directory, then the layered configuration.
pub fn load_config() -> anyhow::Result<VeraConfig> {
    VeraConfig::load_with_dotenv().context("failed to load vera configuration")
}

/// Compile the configured lexicon. Categories left empty keep the English
/// defaults.
pub fn build_lexicon(config: &LexiconConfig) -> anyhow::Result<Lexicon> {
    if !config.is_customized() {
        return Ok(Lexicon::english());
    }

    let patterns = LexiconPatterns::english()
        .with_category(Category::Factual, config.factual.clone())
        .with_category(Category::Opinion, config.opinion.clone())
        .with_category(Category::Positive, config.positive.clone())
        .with_category(Category::Negative, config.negative.clone());

    tracing::debug!("compiling customized lexicon");
    Lexicon::compile(&patterns).context("invalid [lexicon] configuration")
}
