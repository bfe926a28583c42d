use super::*;
use crate::matching::FieldWeights;

fn only(field: FieldName) -> MatchConfig {
    let mut weights = FieldWeights::zero();
    weights.set(field, 1.0);
    MatchConfig::new(weights, 0).unwrap()
}

// ============================================================================
// calculate_score Tests
// ============================================================================

#[test]
fn test_empty_keyword_scores_zero() {
    let product = ProductRecord::titled("Laptop")
        .with_description("Laptop")
        .with_keywords(["laptop"]);
    for keyword in ["", "   ", "?!"] {
        let result = calculate_score(keyword, &product, &MatchConfig::default());
        assert_eq!(result.score, 0.0);
        assert!(result.field_matches.is_empty());
    }
}

#[test]
fn test_absent_fields_are_omitted() {
    let product = ProductRecord::titled("Laptop").with_merchant("");
    let result = calculate_score("laptop", &product, &MatchConfig::default());

    assert_eq!(
        result.field_matches.keys().copied().collect::<Vec<_>>(),
        vec![FieldName::Title]
    );
    assert_eq!(result.score, 40.0);
}

#[test]
fn test_empty_lists_are_omitted() {
    let product = ProductRecord::default()
        .with_categories(Vec::<String>::new())
        .with_keywords(Vec::<String>::new());
    let result = calculate_score("laptop", &product, &MatchConfig::default());
    assert!(result.field_matches.is_empty());
    assert_eq!(result.score, 0.0);
}

#[test]
fn test_scenario_title_with_stopwords() {
    let product = ProductRecord::titled("Dieser Laptop ist super");
    let config = MatchConfig::default();
    let result = calculate_score("laptop", &product, &config);

    let scorer = SimilarityScorer::new(config.tokenizer());
    assert_eq!(
        scorer.tokenizer().tokenize("dieser laptop ist super"),
        vec!["laptop", "super"]
    );
    assert_eq!(scorer.word_match_score("laptop", "dieser laptop ist super"), 1.0);

    let title = result.field(FieldName::Title).unwrap();
    assert!(title >= 0.95);
    assert!(result.score > config.threshold() as f64);
}

#[test]
fn test_perfect_match_scores_hundred() {
    let product = ProductRecord::titled("Laptop")
        .with_description("laptop")
        .with_merchant("LAPTOP")
        .with_categories(["Laptop"])
        .with_keywords(["laptop"]);
    let result = calculate_score("Laptop", &product, &MatchConfig::default());
    assert_eq!(result.score, 100.0);
    assert!(result.field_matches.values().all(|v| *v == 1.0));
}

#[test]
fn test_zero_weights_score_zero() {
    let config = MatchConfig::new(FieldWeights::zero(), 0).unwrap();
    let product = ProductRecord::titled("Laptop");
    let result = calculate_score("laptop", &product, &config);
    assert_eq!(result.score, 0.0);
    assert_eq!(result.field(FieldName::Title), Some(1.0));
}

#[test]
fn test_score_rounded_to_two_decimals() {
    let product = ProductRecord::titled("Notebook").with_description("Tragbarer Rechner");
    let result = calculate_score("laptop", &product, &MatchConfig::default());
    assert_eq!(result.score, (result.score * 100.0).round() / 100.0);
    assert!((0.0..=100.0).contains(&result.score));
}

#[test]
fn test_single_field_weight_maps_similarity_to_score() {
    let product = ProductRecord::titled("Gaming Laptop").with_merchant("Laptop Shop");
    let result = calculate_score("laptop", &product, &only(FieldName::Merchant));
    assert_eq!(result.score, 95.0);
    assert_eq!(result.field_matches.len(), 2);
}

#[test]
fn test_configured_stopwords_reach_field_scoring() {
    let product = ProductRecord::titled("Gaming Tastatur");
    let plain = calculate_score("gaming maus", &product, &only(FieldName::Title));
    let custom = calculate_score(
        "gaming maus",
        &product,
        &only(FieldName::Title).with_extra_stopwords(["gaming"]),
    );
    assert!(custom.score < plain.score);
}

// ============================================================================
// Category Tests
// ============================================================================

#[test]
fn test_category_exact_match_short_circuits() {
    let scorer = SimilarityScorer::default();
    assert_eq!(
        category_similarity(&scorer, "handys", &["Elektronik", "Handys"]),
        1.0
    );
}

#[test]
fn test_category_contains_keyword() {
    let scorer = SimilarityScorer::default();
    assert_eq!(
        category_similarity(&scorer, "handy", &["Handyzubehör"]),
        CATEGORY_CONTAINS_SCORE
    );
}

#[test]
fn test_category_token_overlap() {
    let scorer = SimilarityScorer::default();
    assert_eq!(
        category_similarity(&scorer, "rotes kleid", &["Kleid & Rock"]),
        CATEGORY_TOKEN_SCORE
    );
}

#[test]
fn test_category_fuzzy_fallback_below_factor() {
    let scorer = SimilarityScorer::default();
    let score = category_similarity(&scorer, "iphone", &["Elektronik", "Handys"]);
    assert!(score < CATEGORY_FUZZY_FACTOR);

    let expected = ["elektronik", "handys"]
        .iter()
        .map(|c| scorer.similarity("iphone", c) * CATEGORY_FUZZY_FACTOR)
        .fold(0.0, f64::max);
    assert_eq!(score, expected);
}

#[test]
fn test_category_takes_maximum() {
    let scorer = SimilarityScorer::default();
    let score = category_similarity(&scorer, "kleid", &["Mode", "Sommerkleider", "Schuhe"]);
    assert_eq!(score, CATEGORY_CONTAINS_SCORE);
}

// ============================================================================
// Keywords Tests
// ============================================================================

#[test]
fn test_keywords_exact_tag_short_circuits() {
    let scorer = SimilarityScorer::default();
    assert_eq!(
        keywords_similarity(&scorer, "smartphone", &["smartphone", "zubehoer"]),
        1.0
    );

    let product = ProductRecord::default().with_keywords(["smartphone", "zubehoer"]);
    let result = calculate_score("Smartphone", &product, &MatchConfig::default());
    assert_eq!(result.field(FieldName::Keywords), Some(1.0));
}

#[test]
fn test_keywords_counts_tags_inside_tokens() {
    let scorer = SimilarityScorer::default();
    // "phone" sits inside "smartphone", "huelle" equals a token, "kabel" misses
    let score = keywords_similarity(&scorer, "smartphone huelle", &["phone", "Hülle", "kabel"]);
    assert!((score - 2.0 / 3.0).abs() < 1e-9);
}

#[test]
fn test_keywords_no_tags() {
    let scorer = SimilarityScorer::default();
    assert_eq!(keywords_similarity::<&str>(&scorer, "laptop", &[]), 0.0);
}

#[test]
fn test_keywords_blank_tag_never_matches() {
    let scorer = SimilarityScorer::default();
    assert_eq!(keywords_similarity(&scorer, "laptop", &["", "?"]), 0.0);
}
