use affimatch_lib::catalog::{CatalogQuery, InMemoryCatalog, ProductRecord, ProductRepository};
use affimatch_lib::matching::{
    FieldWeights, MatchConfig, Matcher, SimilarityScorer, calculate_score, category_similarity,
    keywords_similarity, normalize, rank, rank_parallel, similarity,
};
use affimatch_lib::primitives::{FieldName, MatchError};

#[test]
fn test_title_with_stopwords_clears_default_threshold() {
    let product = ProductRecord::titled("Dieser Laptop ist super");
    let config = MatchConfig::default();

    let scorer = SimilarityScorer::new(config.tokenizer());
    assert_eq!(scorer.word_match_score("laptop", "dieser laptop ist super"), 1.0);

    let result = calculate_score("laptop", &product, &config);
    assert!(result.score > f64::from(config.threshold()));
    assert_eq!(result.field_matches.len(), 1);
}

#[test]
fn test_category_fuzzy_fallback_stays_below_factor() {
    let scorer = SimilarityScorer::default();
    let score = category_similarity(&scorer, "iphone", &["Elektronik", "Handys"]);
    assert!(score < 0.7);
    assert!(score >= 0.0);
}

#[test]
fn test_exact_tag_short_circuits_keywords() {
    let scorer = SimilarityScorer::default();
    let keyword = normalize("Smartphone");
    assert_eq!(
        keywords_similarity(&scorer, &keyword, &["smartphone", "zubehoer"]),
        1.0
    );
}

#[test]
fn test_similarity_properties() {
    for text in ["laptop", "kaffeemaschine", "gaming laptop 17 zoll"] {
        assert_eq!(similarity(text, text), 1.0);
        assert_eq!(similarity("", text), 0.0);
        assert_eq!(similarity(text, ""), 0.0);
    }

    let pairs = [
        ("laptop", "notebook"),
        ("handy", "smartphone huelle"),
        ("rotes kleid", "kleid rot sommer"),
        ("a", "b"),
        ("x", "xy"),
    ];
    for (search, target) in pairs {
        let score = similarity(search, target);
        assert!((0.0..=1.0).contains(&score), "{search} / {target}: {score}");
    }
}

#[test]
fn test_normalization_is_idempotent() {
    for text in ["Größe & Maße!", "  Äpfel -- Birnen  ", "Café Crème", "ÜBER 9000"] {
        let once = normalize(text);
        assert_eq!(normalize(&once), once);
        assert!(!once.starts_with(' ') && !once.ends_with(' '));
        assert!(!once.contains("  "));
    }
}

#[test]
fn test_scores_stay_in_range_for_any_weights() {
    let products = [
        ProductRecord::titled("Laptop")
            .with_description("Laptop")
            .with_merchant("Laptop")
            .with_categories(["Laptop"])
            .with_keywords(["laptop"]),
        ProductRecord::titled("Kaffeemaschine").with_keywords(["", "kaffee"]),
    ];
    let weight_sets = [
        FieldWeights::default(),
        FieldWeights {
            title: 5.0,
            keywords: 5.0,
            ..FieldWeights::zero()
        },
        FieldWeights::zero(),
    ];

    for weights in weight_sets {
        let config = MatchConfig::new(weights, 0).unwrap();
        for product in &products {
            let result = calculate_score("laptop", product, &config);
            assert!((0.0..=100.0).contains(&result.score));
            assert_eq!(result.score, (result.score * 100.0).round() / 100.0);
            for value in result.field_matches.values() {
                assert!((0.0..=1.0).contains(value));
            }
        }
    }
}

#[test]
fn test_invalid_weights_fail_construction() {
    let negative = FieldWeights {
        merchant: -0.1,
        ..FieldWeights::default()
    };
    assert_eq!(
        MatchConfig::new(negative, 30).unwrap_err(),
        MatchError::NegativeWeight {
            field: FieldName::Merchant,
            value: -0.1
        }
    );

    let infinite = FieldWeights {
        title: f64::INFINITY,
        ..FieldWeights::default()
    };
    assert!(matches!(
        MatchConfig::new(infinite, 30),
        Err(MatchError::NonFiniteWeight {
            field: FieldName::Title
        })
    ));
}

#[test]
fn test_ranking_over_repository_candidates() {
    let catalog = InMemoryCatalog::new(vec![
        ProductRecord::titled("Laptoptasche").with_categories(["Zubehör"]),
        ProductRecord::titled("Gaming Laptop")
            .with_categories(["Computer"])
            .with_merchant("TechShop"),
        ProductRecord::titled("Laptop Ständer").with_categories(["Zubehör"]),
        ProductRecord::titled("Kaffeemaschine").with_categories(["Küche"]),
    ]);

    let candidates = catalog
        .candidates(&CatalogQuery::all().in_category("zubehoer"))
        .unwrap();
    assert_eq!(candidates.len(), 2);

    let config = MatchConfig::default();
    let ranked = Matcher::new(&config).rank("laptop", &candidates);
    assert!(!ranked.is_empty());
    for pair in ranked.windows(2) {
        assert!(pair[0].score() >= pair[1].score());
    }
}

#[test]
fn test_equal_scores_keep_catalog_order() {
    let products: Vec<ProductRecord> = ["A", "B", "C", "D"]
        .iter()
        .map(|id| {
            let mut product = ProductRecord::titled("Gaming Laptop");
            product.extra.insert("id".to_string(), (*id).into());
            product
        })
        .collect();

    let config = MatchConfig::default();
    let order: Vec<&str> = rank("laptop", &products, &config)
        .iter()
        .map(|m| m.product.extra["id"].as_str().unwrap())
        .collect();
    assert_eq!(order, vec!["A", "B", "C", "D"]);
}

#[test]
fn test_parallel_ranking_is_identical() {
    let products: Vec<ProductRecord> = (0..500)
        .map(|i| {
            let noun = ["Laptop", "Kopfhörer", "Monitor", "Rucksack"][i % 4];
            let adjective = ["Gaming", "Kompakter", "Neuer"][i % 3];
            ProductRecord::titled(format!("{adjective} {noun} {i}"))
                .with_keywords(if i % 5 == 0 { vec!["angebot"] } else { vec![] })
        })
        .collect();
    let config = MatchConfig::new(FieldWeights::default(), 5).unwrap();

    for keyword in ["gaming laptop", "kopfhörer", "kompakter monitor", "angebot"] {
        assert_eq!(
            rank(keyword, &products, &config),
            rank_parallel(keyword, &products, &config)
        );
    }
}
