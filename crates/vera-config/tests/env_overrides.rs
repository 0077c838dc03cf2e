use figment::Jail;
use vera_config::VeraConfig;

#[test]
fn env_sets_nested_values() {
    Jail::expect_with(|jail| {
        jail.set_env("VERA_ANALYSIS__SEED", "7");
        jail.set_env("VERA_ANALYSIS__LATENCY_MS", "250");
        jail.set_env("VERA_HISTORY__STORAGE_KEY", "scratch");

        let config = VeraConfig::load().expect("config loads");
        assert_eq!(config.analysis.seed, Some(7));
        assert_eq!(config.analysis.latency_ms, 250);
        assert_eq!(config.history.storage_key, "scratch");
        Ok(())
    });
}

#[test]
fn env_beats_project_file() {
    Jail::expect_with(|jail| {
        jail.create_dir(".vera")?;
        jail.create_file(".vera/config.toml", "[history]\ncapacity = 5\n")?;
        jail.set_env("VERA_HISTORY__CAPACITY", "12");

        let config = VeraConfig::load().expect("config loads");
        assert_eq!(config.history.capacity, 12);
        Ok(())
    });
}

#[test]
fn defaults_apply_without_sources() {
    Jail::expect_with(|_jail| {
        let config = VeraConfig::load().expect("config loads");
        assert_eq!(config.history.storage_key, "analysis_history");
        assert_eq!(config.analysis.preview_chars, 100);
        assert!(config.analysis.seed.is_none());
        Ok(())
    });
}
