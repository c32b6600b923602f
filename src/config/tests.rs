//! Tests for config module.

use super::*;
use std::io::Write;
use tempfile::NamedTempFile;

// ==================== Environment parsing tests ====================

#[test]
fn test_parse_valid_environments() {
    assert_eq!(
        "development".parse::<Environment>().unwrap(),
        Environment::Development
    );
    assert_eq!("qa".parse::<Environment>().unwrap(), Environment::Qa);
    assert_eq!("homolog".parse::<Environment>().unwrap(), Environment::Homolog);
    assert_eq!(
        "production".parse::<Environment>().unwrap(),
        Environment::Production
    );
}

#[test]
fn test_parse_environment_case_insensitive() {
    assert_eq!("QA".parse::<Environment>().unwrap(), Environment::Qa);
    assert_eq!(
        "Production".parse::<Environment>().unwrap(),
        Environment::Production
    );
}

#[test]
fn test_parse_environment_trims_whitespace() {
    assert_eq!(
        "  homolog \n".parse::<Environment>().unwrap(),
        Environment::Homolog
    );
}

#[test]
fn test_parse_environment_invalid() {
    let err = "staging".parse::<Environment>().unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("staging"));
    assert!(msg.contains("development"));
    assert!(msg.contains("qa"));
    assert!(msg.contains("homolog"));
    assert!(msg.contains("production"));
}

#[test]
fn test_parse_environment_idempotent() {
    let first = "qa".parse::<Environment>().unwrap();
    let second = "qa".parse::<Environment>().unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_environment_display_roundtrip() {
    for environment in Environment::ALL {
        assert_eq!(
            environment.to_string().parse::<Environment>().unwrap(),
            environment
        );
    }
}

// ==================== Settings loading tests ====================

fn write_env_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_required_keys() {
    let file = write_env_file("API_BASE_URL=https://x\nAUTH_TOKEN=tok\n");
    let settings = Settings::load_from_path(file.path(), Environment::Qa).unwrap();

    assert_eq!(settings.api_base_url, "https://x");
    assert_eq!(settings.auth_token, "tok");
}

#[test]
fn test_load_defaults_log_level_to_info() {
    let file = write_env_file("API_BASE_URL=https://x\n");
    let settings = Settings::load_from_path(file.path(), Environment::Qa).unwrap();

    assert_eq!(settings.log_level, "INFO");
}

#[test]
fn test_load_default_log_file_path_uses_environment_name() {
    let file = write_env_file("API_BASE_URL=https://x\n");
    let settings = Settings::load_from_path(file.path(), Environment::Development).unwrap();

    assert_eq!(
        settings.log_file_path,
        PathBuf::from("logs/development_project.log")
    );
}

#[test]
fn test_load_explicit_log_settings() {
    let file = write_env_file(
        "API_BASE_URL=https://x\nLOG_LEVEL=debug\nLOG_FILE_PATH=logs/custom.log\n",
    );
    let settings = Settings::load_from_path(file.path(), Environment::Qa).unwrap();

    assert_eq!(settings.log_level, "debug");
    assert_eq!(settings.log_file_path, PathBuf::from("logs/custom.log"));
}

#[test]
fn test_load_ignores_comments_and_blank_lines() {
    let file = write_env_file("# staging credentials\n\nAPI_BASE_URL=https://x\n");
    let settings = Settings::load_from_path(file.path(), Environment::Qa).unwrap();

    assert_eq!(settings.api_base_url, "https://x");
}

#[test]
fn test_load_strips_quotes() {
    let file = write_env_file("API_BASE_URL=\"https://x\"\nAUTH_TOKEN='tok'\n");
    let settings = Settings::load_from_path(file.path(), Environment::Qa).unwrap();

    assert_eq!(settings.api_base_url, "https://x");
    assert_eq!(settings.auth_token, "tok");
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("qa.env");

    let err = Settings::load_from_path(&path, Environment::Qa).unwrap_err();

    match err {
        ConfigError::FileNotFound(reported) => assert_eq!(reported, path),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_load_requires_api_base_url() {
    let file = write_env_file("AUTH_TOKEN=tok\n");
    let err = Settings::load_from_path(file.path(), Environment::Qa).unwrap_err();

    assert!(err.to_string().contains("API_BASE_URL"));
}

// ==================== Path computation tests ====================

#[test]
fn test_env_file_path_per_environment() {
    assert_eq!(
        env_file_path(Environment::Qa),
        PathBuf::from("config/environments/qa.env")
    );
    assert_eq!(
        env_file_path(Environment::Production),
        PathBuf::from("config/environments/production.env")
    );
}
