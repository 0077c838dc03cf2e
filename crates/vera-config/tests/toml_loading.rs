//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for safe, sandboxed env var manipulation.

use figment::{
    Figment, Jail,
    providers::{Env, Format, Serialized, Toml},
};
use vera_config::VeraConfig;

#[test]
fn loads_history_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[history]
dir = "/var/lib/vera"
storage_key = "team_history"
capacity = 10
"#,
        )?;

        let config: VeraConfig = Figment::from(Serialized::defaults(VeraConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.history.dir, "/var/lib/vera");
        assert_eq!(config.history.storage_key, "team_history");
        assert_eq!(config.history.capacity, 10);
        Ok(())
    });
}

#[test]
fn loads_analysis_and_lexicon_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[analysis]
latency_ms = 1500
seed = 42

[lexicon]
positive = ["great", "superb"]
"#,
        )?;

        let config: VeraConfig = Figment::from(Serialized::defaults(VeraConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.analysis.latency_ms, 1500);
        assert_eq!(config.analysis.seed, Some(42));
        assert_eq!(config.analysis.preview_chars, 100);
        assert_eq!(config.lexicon.positive, vec!["great", "superb"]);
        assert!(config.lexicon.negative.is_empty());
        assert!(config.lexicon.is_customized());
        Ok(())
    });
}

#[test]
fn project_file_is_picked_up_by_default_chain() {
    Jail::expect_with(|jail| {
        jail.create_dir(".vera")?;
        jail.create_file(
            ".vera/config.toml",
            r#"
[history]
capacity = 7
"#,
        )?;

        let config = VeraConfig::load().expect("config loads");
        assert_eq!(config.history.capacity, 7);
        Ok(())
    });
}

#[test]
fn env_overrides_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[history]
capacity = 10
"#,
        )?;
        jail.set_env("VERA_HISTORY__CAPACITY", "25");

        let config: VeraConfig = Figment::from(Serialized::defaults(VeraConfig::default()))
            .merge(Toml::file("config.toml"))
            .merge(Env::prefixed("VERA_").split("__"))
            .extract()?;

        assert_eq!(config.history.capacity, 25);
        Ok(())
    });
}

#[test]
fn invalid_capacity_fails_validation() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[history]
capacity = 0
"#,
        )?;

        let figment = Figment::from(Serialized::defaults(VeraConfig::default()))
            .merge(Toml::file("config.toml"));
        assert!(VeraConfig::from_figment(&figment).is_err());
        Ok(())
    });
}
