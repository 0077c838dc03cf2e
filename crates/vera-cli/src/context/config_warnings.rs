use vera_config::VeraConfig;

/// Emit warnings for likely mistyped env var keys that silently fell back to defaults.
pub fn warn_unconfigured(config: &VeraConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &VeraConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let defaults = VeraConfig::default();
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();

    let sections = [
        ("HISTORY", config.history == defaults.history, "VERA_HISTORY__CAPACITY"),
        ("ANALYSIS", config.analysis == defaults.analysis, "VERA_ANALYSIS__SEED"),
        ("LEXICON", !config.lexicon.is_customized(), "VERA_LEXICON__POSITIVE"),
    ];

    sections
        .into_iter()
        .filter(|(section, unchanged, _)| {
            *unchanged && has_single_underscore_key(&env_keys, section)
        })
        .map(|(section, _, example)| {
            format!(
                "{} config appears default while VERA_{section}_* env vars exist. Use double underscores (example: {example}).",
                section.to_ascii_lowercase()
            )
        })
        .collect()
}

fn has_single_underscore_key(env_keys: &[String], section: &str) -> bool {
    let prefix = format!("VERA_{section}_");
    let nested = format!("VERA_{section}__");
    env_keys
        .iter()
        .any(|key| key.starts_with(&prefix) && !key.starts_with(&nested))
}

#[cfg(test)]
mod tests {
    use super::collect_unconfigured_warnings;
    use vera_config::VeraConfig;

    fn env(keys: &[&str]) -> Vec<(String, String)> {
        keys.iter().map(|key| ((*key).to_string(), "1".to_string())).collect()
    }

    #[test]
    fn single_underscore_key_warns() {
        let warnings =
            collect_unconfigured_warnings(&VeraConfig::default(), env(&["VERA_HISTORY_CAPACITY"]));
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("VERA_HISTORY__CAPACITY"));
    }

    #[test]
    fn double_underscore_key_is_quiet() {
        let warnings = collect_unconfigured_warnings(
            &VeraConfig::default(),
            env(&["VERA_ANALYSIS__SEED", "VERA_LOG"]),
        );
        assert!(warnings.is_empty());
    }

    #[test]
    fn configured_section_is_quiet() {
        let mut config = VeraConfig::default();
        config.analysis.latency_ms = 1500;
        let warnings = collect_unconfigured_warnings(&config, env(&["VERA_ANALYSIS_SEED"]));
        assert!(warnings.is_empty());
    }
}
