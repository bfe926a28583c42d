use super::*;

#[test]
fn test_default_config() {
    let config = MatchConfig::default();
    assert_eq!(config.threshold(), 30);
    assert_eq!(config.weight(FieldName::Title), 0.40);
    assert_eq!(config.weight(FieldName::Description), 0.25);
    assert_eq!(config.weight(FieldName::Category), 0.20);
    assert_eq!(config.weight(FieldName::Merchant), 0.10);
    assert_eq!(config.weight(FieldName::Keywords), 0.05);
    assert!((config.weights().sum() - 1.0).abs() < 1e-9);
}

#[test]
fn test_default_matches_validated_construction() {
    let built = MatchConfig::new(FieldWeights::default(), defaults::THRESHOLD).unwrap();
    assert_eq!(built, MatchConfig::default());
}

#[test]
fn test_weights_rescaled_to_unit_sum() {
    let weights = FieldWeights {
        title: 4.0,
        description: 3.0,
        category: 2.0,
        merchant: 1.0,
        keywords: 0.0,
    };
    let config = MatchConfig::new(weights, 30).unwrap();

    assert!((config.weights().sum() - 1.0).abs() < 1e-9);
    assert!((config.weight(FieldName::Title) - 0.4).abs() < 1e-9);
    assert!((config.weight(FieldName::Merchant) - 0.1).abs() < 1e-9);
    assert_eq!(config.weight(FieldName::Keywords), 0.0);
}

#[test]
fn test_weight_normalization_property() {
    let samples = [
        [0.1, 0.1, 0.1, 0.1, 0.1],
        [1.0, 0.0, 0.0, 0.0, 0.0],
        [3.3, 7.1, 0.01, 12.0, 5.5],
        [1e-6, 2e-6, 3e-6, 4e-6, 5e-6],
        [1e6, 1.0, 1.0, 1.0, 1.0],
    ];
    for values in samples {
        let mut weights = FieldWeights::zero();
        for (field, value) in FieldName::ALL.into_iter().zip(values) {
            weights.set(field, value);
        }
        let config = MatchConfig::new(weights, 30).unwrap();
        let sum = config.weights().sum();
        assert!((sum - 1.0).abs() < 1e-9, "{values:?} summed to {sum}");
    }
}

#[test]
fn test_zero_weights_are_kept() {
    let config = MatchConfig::new(FieldWeights::zero(), 30).unwrap();
    assert_eq!(config.weights().sum(), 0.0);
}

#[test]
fn test_negative_weight_rejected() {
    let weights = FieldWeights {
        merchant: -0.1,
        ..FieldWeights::default()
    };
    assert_eq!(
        MatchConfig::new(weights, 30).unwrap_err(),
        MatchError::NegativeWeight {
            field: FieldName::Merchant,
            value: -0.1
        }
    );
}

#[test]
fn test_non_finite_weight_rejected() {
    let weights = FieldWeights {
        title: f64::NAN,
        ..FieldWeights::default()
    };
    assert_eq!(
        MatchConfig::new(weights, 30).unwrap_err(),
        MatchError::NonFiniteWeight {
            field: FieldName::Title
        }
    );

    let weights = FieldWeights {
        keywords: f64::INFINITY,
        ..FieldWeights::default()
    };
    assert!(MatchConfig::new(weights, 30).is_err());
}

#[test]
fn test_threshold_clamped() {
    let weights = FieldWeights::default();
    assert_eq!(MatchConfig::new(weights, -5).unwrap().threshold(), 0);
    assert_eq!(MatchConfig::new(weights, 0).unwrap().threshold(), 0);
    assert_eq!(MatchConfig::new(weights, 100).unwrap().threshold(), 100);
    assert_eq!(MatchConfig::new(weights, 1000).unwrap().threshold(), 100);
}

#[test]
fn test_extra_stopwords_extend_builtin_set() {
    let config = MatchConfig::default().with_extra_stopwords(["Angebot"]);
    assert!(config.tokenizer().is_stopword("angebot"));
    assert!(config.tokenizer().is_stopword("und"));
    assert!(!MatchConfig::default().tokenizer().is_stopword("angebot"));
}

#[test]
fn test_field_weights_deserialize_partial() {
    let weights: FieldWeights = toml::from_str("title = 1.0\ntags = 0.5").unwrap();
    assert_eq!(weights.title, 1.0);
    assert_eq!(weights.keywords, 0.5);
    assert_eq!(weights.description, defaults::WEIGHT_DESCRIPTION);
}
