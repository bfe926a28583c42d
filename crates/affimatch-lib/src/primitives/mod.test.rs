use super::*;

macro_rules! test_enum_completeness {
    ($enum_type:ty, $test_name:ident) => {
        #[test]
        fn $test_name() {
            for variant in <$enum_type>::value_variants() {
                let possible_value = variant
                    .to_possible_value()
                    .expect("PossibleValue should exist for all variants");

                let primary_name = possible_value.get_name();
                let parsed = primary_name.parse::<$enum_type>();
                assert_eq!(
                    parsed.ok(),
                    Some(*variant),
                    "Primary name '{}' should round-trip",
                    primary_name
                );
            }
        }
    };
}

test_enum_completeness!(FieldName, test_field_name_completeness);
test_enum_completeness!(LogLevel, test_log_level_completeness);
test_enum_completeness!(LogFormat, test_log_format_completeness);
test_enum_completeness!(LogOutput, test_log_output_completeness);
test_enum_completeness!(ColorIntent, test_color_intent_completeness);

#[test]
fn test_field_name_aliases() {
    assert_eq!("tags".parse::<FieldName>().ok(), Some(FieldName::Keywords));
    assert_eq!(
        "merchant_name".parse::<FieldName>().ok(),
        Some(FieldName::Merchant)
    );
    assert_eq!("TITLE".parse::<FieldName>().ok(), Some(FieldName::Title));
}

#[test]
fn test_field_name_display_matches_serde() {
    for field in FieldName::ALL {
        let json = serde_json::to_string(&field).unwrap();
        assert_eq!(json, format!("\"{}\"", field));
    }
}

#[test]
fn test_field_name_ordering_follows_breakdown_order() {
    let mut shuffled = vec![
        FieldName::Keywords,
        FieldName::Title,
        FieldName::Merchant,
        FieldName::Category,
        FieldName::Description,
    ];
    shuffled.sort();
    assert_eq!(shuffled, FieldName::ALL.to_vec());
}

#[test]
fn test_invalid_value_reports_reason() {
    let err = "xml".parse::<LogFormat>().unwrap_err();
    match err {
        ConfigError::ParseError { value, reason } => {
            assert_eq!(value, "xml");
            assert_eq!(reason, "invalid log format");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_log_format_pretty_aliases() {
    assert_eq!("pretty".parse::<LogFormat>().ok(), Some(LogFormat::Pretty));
    assert_eq!("yaml".parse::<LogFormat>().ok(), Some(LogFormat::Pretty));
    assert_eq!("yml".parse::<LogFormat>().ok(), Some(LogFormat::Pretty));
}

#[test]
fn test_log_level_from_verbosity() {
    assert_eq!(LogLevel::from_verbosity(0), LogLevel::Error);
    assert_eq!(LogLevel::from_verbosity(2), LogLevel::Info);
    assert_eq!(LogLevel::from_verbosity(4), LogLevel::Trace);
    assert_eq!(LogLevel::from_verbosity(200), LogLevel::Trace);
    assert_eq!(LogLevel::Warning.as_filter(), "warn");
}

#[test]
fn test_color_intent_explicit_values() {
    assert!(ColorIntent::Always.enabled());
    assert!(!ColorIntent::Never.enabled());
}

#[test]
fn test_match_error_messages() {
    let err = MatchError::NegativeWeight {
        field: FieldName::Title,
        value: -0.5,
    };
    assert_eq!(
        err.to_string(),
        "Weight for field 'title' must be non-negative, got -0.5"
    );

    let wrapped = ConfigError::from(MatchError::NonFiniteWeight {
        field: FieldName::Keywords,
    });
    assert!(wrapped.to_string().contains("'keywords'"));
}
