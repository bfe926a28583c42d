use super::*;
use crate::matching::config::defaults as weight_defaults;

#[test]
fn test_config_defaults() {
    let config = AppConfig::default();
    assert_eq!(config.log_level, 0);
    assert_eq!(config.jobs, 0);
    assert_eq!(config.color, ColorIntent::Auto);
    assert!(config.threshold.is_none());
    assert!(config.extra_stopwords.is_empty());

    let match_config = config.to_match_config().unwrap();
    assert_eq!(match_config.threshold(), 30);
    assert_eq!(match_config.weight(FieldName::Title), weight_defaults::WEIGHT_TITLE);
}

#[test]
fn test_parse_matches_defaults() {
    let parsed = AppConfig::try_parse_from(["affimatch"]).unwrap();
    assert_eq!(parsed.log_level, AppConfig::default().log_level);
    assert_eq!(parsed.log_format, LogFormat::Text);
    assert_eq!(parsed.log_output, LogOutput::Stderr);
    assert_eq!(parsed.threshold, None);
}

#[test]
fn test_parse_weight_flags_and_stopwords() {
    let parsed = AppConfig::try_parse_from([
        "affimatch",
        "--weight-title",
        "2",
        "--weight-keywords",
        "0",
        "--threshold",
        "55",
        "--stopwords",
        "angebot, neu",
    ])
    .unwrap();

    assert_eq!(parsed.weight_title, Some(2.0));
    assert_eq!(parsed.weight_keywords, Some(0.0));
    assert_eq!(parsed.threshold, Some(55));
    assert_eq!(parsed.extra_stopwords, vec!["angebot", " neu"]);
}

#[test]
fn test_field_weights_apply_overrides() {
    let config = AppConfig {
        weight_title: Some(0.8),
        weight_merchant: Some(0.0),
        ..AppConfig::default()
    };
    let weights = config.field_weights();
    assert_eq!(weights.title, 0.8);
    assert_eq!(weights.merchant, 0.0);
    assert_eq!(weights.description, weight_defaults::WEIGHT_DESCRIPTION);
}

#[test]
fn test_match_config_renormalizes_weights() {
    let config = AppConfig {
        weight_title: Some(1.0),
        weight_description: Some(1.0),
        weight_category: Some(0.0),
        weight_merchant: Some(0.0),
        weight_keywords: Some(0.0),
        ..AppConfig::default()
    };
    let match_config = config.to_match_config().unwrap();
    assert_eq!(match_config.weight(FieldName::Title), 0.5);
    assert_eq!(match_config.weight(FieldName::Description), 0.5);
}

#[test]
fn test_threshold_is_clamped() {
    let high = AppConfig {
        threshold: Some(250),
        ..AppConfig::default()
    };
    assert_eq!(high.to_match_config().unwrap().threshold(), 100);

    let low = AppConfig {
        threshold: Some(-5),
        ..AppConfig::default()
    };
    assert_eq!(low.to_match_config().unwrap().threshold(), 0);
}

#[test]
fn test_merge_file_fills_unset_values_only() {
    let config = AppConfig {
        weight_title: Some(0.9),
        extra_stopwords: vec!["cli".to_string()],
        ..AppConfig::default()
    };
    let file = MatchFileConfig {
        weights: FileWeights {
            title: Some(0.1),
            description: Some(0.3),
            ..FileWeights::default()
        },
        threshold: Some(45),
        stopwords: vec!["datei".to_string()],
    };

    let merged = config.merge_file(file);
    assert_eq!(merged.weight_title, Some(0.9));
    assert_eq!(merged.weight_description, Some(0.3));
    assert_eq!(merged.weight_category, None);
    assert_eq!(merged.threshold, Some(45));
    assert_eq!(merged.extra_stopwords, vec!["datei", "cli"]);
}

#[test]
fn test_file_config_parses_toml() {
    let content = r#"
threshold = 40
stopwords = ["angebot"]

[weights]
title = 0.5
tags = 0.2
"#;
    let file = MatchFileConfig::parse(content, Path::new("affimatch.toml")).unwrap();
    assert_eq!(file.threshold, Some(40));
    assert_eq!(file.stopwords, vec!["angebot"]);
    assert_eq!(file.weights.title, Some(0.5));
    assert_eq!(file.weights.keywords, Some(0.2));
    assert_eq!(file.weights.merchant, None);
}

#[test]
fn test_file_config_rejects_unknown_keys() {
    let err = MatchFileConfig::parse("treshold = 40", Path::new("bad.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::ConfigFileParse { .. }));
    assert!(err.to_string().contains("bad.toml"));
}

#[test]
fn test_file_config_missing_file() {
    let err = MatchFileConfig::load(Path::new("/nonexistent/affimatch.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::ConfigFileRead { .. }));
}

#[test]
fn test_validate_trims_stopwords() {
    let mut config = AppConfig {
        extra_stopwords: vec![" angebot ".to_string(), "  ".to_string()],
        ..AppConfig::default()
    };
    config.validate().unwrap();
    assert_eq!(config.extra_stopwords, vec!["angebot"]);
}

#[test]
fn test_validate_rejects_negative_weight() {
    let mut config = AppConfig {
        weight_category: Some(-0.5),
        ..AppConfig::default()
    };
    let err = config.validate().unwrap_err();
    assert!(matches!(
        err,
        ConfigError::InvalidMatchConfig {
            source: MatchError::NegativeWeight {
                field: FieldName::Category,
                ..
            }
        }
    ));
}

#[test]
fn test_validate_rejects_log_level() {
    let mut config = AppConfig {
        log_level: 9,
        ..AppConfig::default()
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValidationFailed { .. })
    ));
}

#[test]
fn test_logger_config_from_app_config() {
    let config = AppConfig {
        log_level: 3,
        log_format: LogFormat::Json,
        color: ColorIntent::Never,
        ..AppConfig::default()
    };
    let logger = config.to_logger_config();
    assert_eq!(logger.level, LogLevel::Debug);
    assert_eq!(logger.format, LogFormat::Json);
    assert!(!logger.color);
}

#[test]
fn test_effective_match_config_serializes_to_toml() {
    let config = AppConfig {
        threshold: Some(40),
        extra_stopwords: vec!["angebot".to_string()],
        ..AppConfig::default()
    };
    let effective = config.effective_match_config().unwrap();
    let rendered = toml::to_string(&effective).unwrap();

    assert!(rendered.contains("threshold = 40"));
    assert!(rendered.contains("[weights]"));
    assert!(rendered.contains("title = 0.4"));
}
