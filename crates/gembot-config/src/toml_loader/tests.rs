//! Tests for TOML config loading, creation, and path resolution.

use super::*;
use std::path::Path;

#[test]
fn load_from_nonexistent_returns_file_not_found() {
    let result = load_from_path(Path::new("/tmp/nonexistent_gembot_config.toml"));
    assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
}

#[test]
fn load_valid_partial_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[gemini]
model = "gemini-1.5-pro"

[clock]
timezone = "Europe/Paris"
"#,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.gemini.model, "gemini-1.5-pro");
    assert_eq!(config.clock.timezone, "Europe/Paris");
    // Defaults preserved
    assert_eq!(config.gemini.max_tokens, 4096);
    assert_eq!(config.smtp.host, "smtp.gmail.com");
    assert_eq!(config.console.quit_command, "quit");
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "this is not valid toml {{{").unwrap();

    let result = load_from_path(&path);
    assert!(matches!(result, Err(ConfigError::ParseError(_))));
}

#[test]
fn load_config_with_invalid_values_falls_back_to_default() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[gemini]
model = "gemini-1.5-pro"
temperature = 9.0
"#,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.gemini.model, "gemini-2.0-flash");
    assert!((config.gemini.temperature - 0.7).abs() < f64::EPSILON);
}

#[test]
fn secrets_in_toml_are_ignored() {
    let config = parse_str(
        r#"
[gemini]
api_key = "from-file"

[smtp]
password = "from-file"
"#,
    )
    .unwrap();
    assert!(config.gemini.api_key.is_none());
    assert!(config.smtp.password.is_none());
}

#[test]
fn default_toml_parses_to_defaults() {
    let config = parse_str(default_config_toml()).unwrap();
    assert_eq!(config.gemini.model, "gemini-2.0-flash");
    assert_eq!(config.smtp.port, 465);
    assert!(validation::validate(&config).is_ok());
}

#[test]
fn create_default_config_writes_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.toml");
    create_default_config(&path).unwrap();
    assert!(path.exists());

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.clock.timezone, "Asia/Jakarta");
}

#[test]
fn default_config_path_ends_with_gembot() {
    if let Ok(path) = default_config_path() {
        assert!(path.ends_with("gembot/config.toml"));
    }
}
