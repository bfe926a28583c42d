//! E2E tests for the rank command
//!
//! Runs real argument lists against feed fixtures and checks ordering,
//! filtering and configuration layering.

use affimatch_tests::{TestEnvironment, config_path, feed_path};
use anyhow::Result;
use serde_json::Value;

fn ids(report: &Value) -> Vec<String> {
    report["matches"]
        .as_array()
        .map(|matches| {
            matches
                .iter()
                .filter_map(|m| m["product"]["id"].as_str().map(String::from))
                .collect()
        })
        .unwrap_or_default()
}

#[test]
fn e2e_rank_orders_by_relevance() -> Result<()> {
    let env = TestEnvironment::new()?;
    let catalog = feed_path("electronics");

    let report = env.run_json([
        "rank",
        "smartphone",
        "--catalog",
        catalog.to_str().unwrap(),
        "--output",
        "json",
    ])?;

    assert_eq!(report["candidates"], 6);
    assert_eq!(report["threshold"], 30);
    let ids = ids(&report);
    assert_eq!(&ids[..2], ["awin-1002", "tradedoubler-77"]);
    assert!(!ids.contains(&"awin-2001".to_string()));

    let scores: Vec<f64> = report["matches"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["score"].as_f64().unwrap())
        .collect();
    assert!(scores.windows(2).all(|pair| pair[0] >= pair[1]));
    assert!(scores.iter().all(|score| *score >= 30.0));
    Ok(())
}

#[test]
fn e2e_rank_carries_feed_data_through() -> Result<()> {
    let env = TestEnvironment::new()?;
    let catalog = feed_path("electronics");

    let report = env.run_json([
        "rank",
        "smartphone",
        "--catalog",
        catalog.to_str().unwrap(),
        "--output",
        "json",
        "--limit",
        "1",
    ])?;

    let matches = report["matches"].as_array().unwrap();
    assert_eq!(matches.len(), 1);
    let product = &matches[0]["product"];
    assert_eq!(product["price"], 799.0);
    assert_eq!(product["merchant_name"], "Elektromarkt");
    assert_eq!(matches[0]["field_matches"]["keywords"], 1.0);
    Ok(())
}

#[test]
fn e2e_rank_filters_by_category_and_merchant() -> Result<()> {
    let env = TestEnvironment::new()?;
    let catalog = feed_path("electronics");
    let catalog = catalog.to_str().unwrap();

    let by_category = env.run_json([
        "rank", "smartphone", "--catalog", catalog, "--category", "Handys", "--output", "json",
    ])?;
    assert_eq!(by_category["candidates"], 2);

    let by_merchant = env.run_json([
        "rank", "laptop", "--catalog", catalog, "--merchant", "techshop", "--output", "json",
    ])?;
    assert_eq!(by_merchant["candidates"], 2);
    assert_eq!(ids(&by_merchant)[0], "adcell-5");
    Ok(())
}

#[test]
fn e2e_rank_text_output() -> Result<()> {
    let env = TestEnvironment::new()?;
    let catalog = feed_path("fashion");

    let output = env.run(["rank", "kleid", "--catalog", catalog.to_str().unwrap()])?;
    let lines: Vec<&str> = output.lines().collect();

    assert_eq!(lines[0], "→ Ranking 'kleid' over 4 candidates");
    assert!(lines[1].starts_with("   1. ") && lines[1].ends_with("Rotes Sommerkleid"));
    assert!(lines[2].starts_with("   2. ") && lines[2].ends_with("Abendkleid Schwarz"));
    assert!(!output.contains("Jeans"));
    assert!(output.ends_with("✓ 2 matches: threshold 30\n"));
    Ok(())
}

#[test]
fn e2e_rank_uses_config_file() -> Result<()> {
    let env = TestEnvironment::new()?;
    let catalog = feed_path("electronics");
    let config = config_path("title-heavy");

    let report = env.run_json([
        "--config",
        config.to_str().unwrap(),
        "rank",
        "laptop",
        "--catalog",
        catalog.to_str().unwrap(),
        "--output",
        "json",
    ])?;

    assert_eq!(report["threshold"], 50);
    assert_eq!(ids(&report), vec!["adcell-5", "adcell-6"]);
    assert_eq!(report["matches"][0]["score"], 95.0);
    Ok(())
}

#[test]
fn e2e_cli_threshold_overrides_config_file() -> Result<()> {
    let env = TestEnvironment::new()?;
    let catalog = feed_path("electronics");
    let config = config_path("title-heavy");

    let output = env.run([
        "rank",
        "laptop",
        "--catalog",
        catalog.to_str().unwrap(),
        "--config",
        config.to_str().unwrap(),
        "--threshold",
        "99",
    ])?;

    assert!(output.contains("! No product reached the threshold of 99"));
    Ok(())
}

#[test]
fn e2e_rank_parallel_matches_sequential() -> Result<()> {
    let env = TestEnvironment::new()?;
    let products = affimatch_lib::test_utils::synthetic_catalog(300);
    let catalog = env.write_catalog("synthetic.json", &products)?;
    let catalog = catalog.to_str().unwrap();

    let sequential = env.run_json(["rank", "gaming laptop", "--catalog", catalog, "--output", "json"])?;
    let parallel = env.run_json([
        "rank", "gaming laptop", "--catalog", catalog, "--output", "json", "--parallel", "-j", "3",
    ])?;

    assert_eq!(sequential, parallel);
    assert_eq!(sequential["candidates"], 300);
    Ok(())
}

#[test]
fn e2e_rank_rejects_broken_catalog() -> Result<()> {
    let env = TestEnvironment::new()?;
    let catalog = env.write_file("broken.json", "{ not json")?;

    let err = env
        .run(["rank", "laptop", "--catalog", catalog.to_str().unwrap()])
        .unwrap_err();
    let message = format!("{err:#}");
    assert!(message.contains("Failed to load catalog"));
    assert!(message.contains("broken.json"));
    Ok(())
}

#[test]
fn e2e_rank_rejects_negative_weight() -> Result<()> {
    let env = TestEnvironment::new()?;
    let catalog = feed_path("electronics");

    let result = env.run([
        "rank",
        "laptop",
        "--catalog",
        catalog.to_str().unwrap(),
        "--weight-title",
        "-1",
    ]);
    assert!(result.is_err());
    Ok(())
}
