use super::*;
use clap::Parser;
use crate::primitives::ColorIntent;
use std::io::Write;
use tempfile::TempDir;

fn write_file(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(content.as_bytes()).unwrap();
    path
}

#[test]
fn test_missing_env_files_are_skipped() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join(".env.local");
    assert!(load_env_files(&[missing]).is_ok());
}

#[test]
fn test_env_file_first_wins() {
    let dir = TempDir::new().unwrap();
    let local = write_file(&dir, ".env.local", "AFFIMATCH_LOADER_TEST_VALUE=local\n");
    let shared = write_file(&dir, ".env", "AFFIMATCH_LOADER_TEST_VALUE=shared\n");

    load_env_files(&[local, shared]).unwrap();
    assert_eq!(
        std::env::var("AFFIMATCH_LOADER_TEST_VALUE").as_deref(),
        Ok("local")
    );
}

#[test]
fn test_malformed_env_file_errors() {
    let dir = TempDir::new().unwrap();
    let broken = write_file(&dir, ".env", "AFFIMATCH_LOADER_BROKEN='unterminated\n");
    let err = load_env_files(&[broken]).unwrap_err();
    assert!(matches!(err, ConfigError::EnvFileError { .. }));
}

#[test]
fn test_resolve_without_config_file() {
    let config = AppConfig::default()
        .resolve(&EnvironmentConfig::default())
        .unwrap();
    assert_eq!(config.color, ColorIntent::Auto);
    assert_eq!(config.to_match_config().unwrap().threshold(), 30);
}

#[test]
fn test_resolve_applies_color_environment() {
    let env_config = EnvironmentConfig {
        no_color: Some("1".to_string()),
        ..EnvironmentConfig::default()
    };
    let config = AppConfig::default().resolve(&env_config).unwrap();
    assert_eq!(config.color, ColorIntent::Never);
}

#[test]
fn test_resolve_reads_config_file_below_cli() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        &dir,
        "affimatch.toml",
        "threshold = 60\nstopwords = [\"angebot\"]\n\n[weights]\ntitle = 3.0\ndescription = 1.0\n",
    );

    let config = AppConfig {
        config_file: Some(path),
        weight_title: Some(1.0),
        weight_category: Some(0.0),
        weight_merchant: Some(0.0),
        weight_keywords: Some(0.0),
        ..AppConfig::default()
    }
    .resolve(&EnvironmentConfig::default())
    .unwrap();

    // title comes from the CLI layer, description from the file
    let match_config = config.to_match_config().unwrap();
    assert_eq!(match_config.threshold(), 60);
    assert_eq!(match_config.weights().title, 0.5);
    assert_eq!(match_config.weights().description, 0.5);
    assert!(match_config.tokenizer().is_stopword("angebot"));
}

#[test]
fn test_resolve_missing_config_file() {
    let config = AppConfig {
        config_file: Some("/nonexistent/affimatch.toml".into()),
        ..AppConfig::default()
    };
    assert!(matches!(
        config.resolve(&EnvironmentConfig::default()),
        Err(ConfigError::ConfigFileRead { .. })
    ));
}

#[test]
fn test_resolve_rejects_invalid_file_weights() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "affimatch.toml", "[weights]\nmerchant = -1.0\n");
    let config = AppConfig {
        config_file: Some(path),
        ..AppConfig::default()
    };
    assert!(matches!(
        config.resolve(&EnvironmentConfig::default()),
        Err(ConfigError::InvalidMatchConfig { .. })
    ));
}

#[test]
fn test_env_file_values_outrank_config_file() {
    let dir = TempDir::new().unwrap();
    let dotenv = write_file(&dir, ".env", "AFFIMATCH_WEIGHT_MERCHANT=0.25\n");
    let file = write_file(&dir, "affimatch.toml", "[weights]\nmerchant = 0.9\n");
    load_env_files(&[dotenv]).unwrap();

    let config_arg = file.to_str().unwrap();
    let from_env = AppConfig::try_parse_from(["affimatch", "--config", config_arg])
        .unwrap()
        .resolve(&EnvironmentConfig::default())
        .unwrap();
    assert_eq!(from_env.weight_merchant, Some(0.25));

    let from_cli = AppConfig::try_parse_from([
        "affimatch",
        "--config",
        config_arg,
        "--weight-merchant",
        "0.5",
    ])
    .unwrap()
    .resolve(&EnvironmentConfig::default())
    .unwrap();
    assert_eq!(from_cli.weight_merchant, Some(0.5));
}
