use std::path::Path;

use figment::{Figment, Jail};
use figment::providers::{Format, Serialized, Toml};
use tempfile::tempdir;

use crate::config::{self, ContentMode, EditorConfig, PathPolicy};

fn layered(toml: &str) -> Figment {
    Figment::from(Serialized::defaults(EditorConfig::default())).merge(Toml::string(toml))
}

#[test]
fn test_defaults() {
    let config = EditorConfig::from_figment(layered("")).unwrap();
    assert_eq!(config, EditorConfig::default());
    assert_eq!(config.max_command_len, 9);
    assert_eq!(config.max_filename_len, 999);
    assert_eq!(config.block_len(), 9_999);
    assert_eq!(config.content_mode, ContentMode::LastLine);
    assert_eq!(config.path_policy, PathPolicy::Join);
}

#[test]
fn test_toml_overrides_defaults() {
    let toml = r#"
        log = "debug"
        content_mode = "full"
        path_policy = "reject-separators"
        max_filename_len = 64
    "#;
    let config = EditorConfig::from_figment(layered(toml)).unwrap();
    assert_eq!(config.log, "debug");
    assert_eq!(config.content_mode, ContentMode::Full);
    assert_eq!(config.path_policy, PathPolicy::RejectSeparators);
    assert_eq!(config.max_filename_len, 64);
    assert_eq!(config.content_capacity, 10_000);
}

#[test]
fn test_invalid_values_rejected() {
    assert!(EditorConfig::from_figment(layered("content_capacity = 1")).is_err());
    assert!(EditorConfig::from_figment(layered("max_command_len = 0")).is_err());
    assert!(EditorConfig::from_figment(layered(r#"content_mode = "sometimes""#)).is_err());
}

#[test]
fn test_load_from_file_with_log_override() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("tinyedit.toml");
    std::fs::write(&path, "log = \"info\"\nmax_command_len = 12\n").unwrap();

    let config = config::load(Some(&path), Some("trace")).unwrap();
    assert_eq!(config.log, "trace");
    assert_eq!(config.max_command_len, 12);
}

#[test]
fn test_load_missing_file_uses_defaults() {
    let dir = tempdir().unwrap();
    let config = config::load(Some(&dir.path().join("absent.toml")), None).unwrap();
    assert_eq!(config.max_filename_len, 999);
}

#[test]
fn test_env_beats_file_and_cli_beats_env() {
    Jail::expect_with(|jail| {
        jail.create_file(
            config::DEFAULT_CONFIG_FILE,
            "content_mode = \"last-line\"\nlog = \"info\"\nmax_filename_len = 50\n",
        )?;
        jail.set_env("TINYEDIT_CONTENT_MODE", "full");
        jail.set_env("TINYEDIT_LOG", "debug");

        let config = config::load(None, None).map_err(|e| format!("{:#}", e))?;
        assert_eq!(config.content_mode, ContentMode::Full);
        assert_eq!(config.log, "debug");
        assert_eq!(config.max_filename_len, 50);

        let path = Path::new(config::DEFAULT_CONFIG_FILE);
        let config = config::load(Some(path), Some("trace")).map_err(|e| format!("{:#}", e))?;
        assert_eq!(config.log, "trace");
        assert_eq!(config.content_mode, ContentMode::Full);
        Ok(())
    });
}
