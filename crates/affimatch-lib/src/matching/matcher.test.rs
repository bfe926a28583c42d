use super::*;
use crate::matching::FieldWeights;
use crate::test_utils::sample_catalog as catalog;

fn indices(ranked: &[RankedMatch<'_>]) -> Vec<usize> {
    ranked.iter().map(|m| m.index).collect()
}

#[test]
fn test_rank_sorts_descending() {
    let products = catalog();
    let ranked = rank("laptop", &products, &MatchConfig::default());

    // title, description and category all hit on the gaming laptops
    assert_eq!(indices(&ranked), vec![1, 4, 2, 3]);
    for pair in ranked.windows(2) {
        assert!(pair[0].score() >= pair[1].score());
    }
}

#[test]
fn test_rank_filters_below_threshold() {
    let products = catalog();
    let config = MatchConfig::default();
    let ranked = rank("laptop", &products, &config);

    assert!(!indices(&ranked).contains(&0));
    assert!(
        ranked
            .iter()
            .all(|m| m.score() >= f64::from(config.threshold()))
    );
}

#[test]
fn test_rank_stable_for_equal_scores() {
    let products = catalog();
    let ranked = rank("laptop", &products, &MatchConfig::default());

    let twins: Vec<usize> = indices(&ranked)
        .into_iter()
        .filter(|i| *i == 1 || *i == 4)
        .collect();
    assert_eq!(twins, vec![1, 4]);

    let first = ranked.iter().find(|m| m.index == 1).unwrap();
    let second = ranked.iter().find(|m| m.index == 4).unwrap();
    assert_eq!(first.score(), second.score());
}

#[test]
fn test_rank_stable_when_every_score_ties() {
    let products: Vec<ProductRecord> = (0..20).map(|_| ProductRecord::titled("Laptop")).collect();
    let ranked = rank("laptop", &products, &MatchConfig::default());
    assert_eq!(indices(&ranked), (0..20).collect::<Vec<_>>());
}

#[test]
fn test_rank_threshold_hundred() {
    let products = catalog();
    let config = MatchConfig::new(FieldWeights::default(), 100).unwrap();
    assert!(rank("laptop", &products, &config).is_empty());

    let perfect = vec![
        ProductRecord::titled("Laptop"),
        ProductRecord::titled("laptop")
            .with_description("Laptop")
            .with_merchant("laptop")
            .with_categories(["laptop"])
            .with_keywords(["laptop"]),
    ];
    let ranked = rank("laptop", &perfect, &config);
    assert_eq!(indices(&ranked), vec![1]);
    assert_eq!(ranked[0].score(), 100.0);
}

#[test]
fn test_rank_threshold_zero_keeps_everything() {
    let products = catalog();
    let config = MatchConfig::new(FieldWeights::default(), 0).unwrap();
    assert_eq!(rank("laptop", &products, &config).len(), products.len());
}

#[test]
fn test_rank_empty_inputs() {
    assert!(rank("laptop", &[], &MatchConfig::default()).is_empty());

    let products = catalog();
    assert!(rank("", &products, &MatchConfig::default()).is_empty());
}

#[test]
fn test_rank_borrows_candidates() {
    let products = catalog();
    let ranked = rank("laptop", &products, &MatchConfig::default());
    for m in &ranked {
        assert!(std::ptr::eq(m.product, &products[m.index]));
    }
}

#[test]
fn test_parallel_matches_sequential() {
    let mut products = catalog();
    for i in 0..200 {
        products.push(
            ProductRecord::titled(format!("Laptop Modell {}", i % 7))
                .with_description(if i % 3 == 0 { "Notebook" } else { "Tasche" }),
        );
    }

    let config = MatchConfig::new(FieldWeights::default(), 10).unwrap();
    for keyword in ["laptop", "notebook tasche", "modell 3", "kaffee"] {
        assert_eq!(
            rank(keyword, &products, &config),
            rank_parallel(keyword, &products, &config),
            "keyword '{keyword}'"
        );
    }
}

#[test]
fn test_matcher_limit_and_best_match() {
    let products = catalog();
    let config = MatchConfig::default();
    let matcher = Matcher::new(&config);

    let all = matcher.rank("laptop", &products);
    let limited = matcher.with_limit(Some(2)).rank("laptop", &products);
    assert_eq!(limited.len(), 2.min(all.len()));
    assert_eq!(limited[..], all[..limited.len()]);

    let best = matcher.best_match("laptop", &products).unwrap();
    assert_eq!(best.index, 1);
    assert!(matcher.best_match("zzzz", &products).is_none());
}

#[test]
fn test_matcher_parallel_flag() {
    let products = catalog();
    let config = MatchConfig::default();
    let sequential = Matcher::new(&config).rank("laptop", &products);
    let parallel = Matcher::new(&config).parallel(true).rank("laptop", &products);
    assert_eq!(sequential, parallel);
}

#[test]
fn test_ranked_match_serializes_flat() {
    let products = vec![ProductRecord::titled("Laptop")];
    let ranked = rank("laptop", &products, &MatchConfig::default());
    let json = serde_json::to_value(&ranked[0]).unwrap();

    assert_eq!(json["index"], 0);
    assert_eq!(json["score"], 40.0);
    assert_eq!(json["field_matches"]["title"], 1.0);
    assert_eq!(json["product"]["title"], "Laptop");
}
