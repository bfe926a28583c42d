//! E2E tests for the score command

use affimatch_tests::{TestEnvironment, feed_path};
use anyhow::Result;

#[test]
fn e2e_score_explains_fields() -> Result<()> {
    let env = TestEnvironment::new()?;
    let catalog = feed_path("electronics");

    let output = env.run([
        "score",
        "Smartphone",
        "--catalog",
        catalog.to_str().unwrap(),
        "--index",
        "2",
    ])?;

    assert!(output.starts_with("→ Scoring 'Smartphone' against #2 Schutzhülle für Smartphone\n"));
    assert!(output.contains("  title        0.9500 x 0.40 = 38.00\n"));
    assert!(output.contains("  keywords     1.0000 x 0.05 = 5.00\n"));
    assert!(!output.contains("absent"));
    assert!(output.contains("✓ score: "));
    Ok(())
}

#[test]
fn e2e_score_json_below_threshold() -> Result<()> {
    let env = TestEnvironment::new()?;
    let catalog = feed_path("electronics");

    let report = env.run_json([
        "score",
        "smartphone",
        "--catalog",
        catalog.to_str().unwrap(),
        "--index",
        "5",
        "--output",
        "json",
    ])?;

    assert_eq!(report["index"], 5);
    assert_eq!(report["product"]["id"], "awin-2001");
    assert_eq!(report["passes"], false);
    assert!(report["score"].as_f64().unwrap() < 30.0);
    assert_eq!(report["threshold"], 30);
    Ok(())
}

#[test]
fn e2e_score_untitled_product() -> Result<()> {
    let env = TestEnvironment::new()?;
    let catalog = feed_path("fashion");

    let output = env.run([
        "score",
        "kleid",
        "--catalog",
        catalog.to_str().unwrap(),
        "--index",
        "3",
    ])?;

    assert!(output.contains("#3 (untitled)"));
    assert!(output.contains("  title        absent\n"));
    assert!(output.contains("  keywords     absent\n"));
    assert!(output.contains("(below threshold 30)"));
    Ok(())
}

#[test]
fn e2e_score_index_out_of_range() -> Result<()> {
    let env = TestEnvironment::new()?;
    let catalog = feed_path("fashion");

    let err = env
        .run(["score", "kleid", "--catalog", catalog.to_str().unwrap(), "--index", "4"])
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Product index 4 is out of range for a catalog of 4 products"
    );
    Ok(())
}

#[test]
fn e2e_score_missing_catalog() -> Result<()> {
    let env = TestEnvironment::new()?;
    let missing = env.path().join("missing.json");

    let err = env
        .run(["score", "kleid", "--catalog", missing.to_str().unwrap(), "--index", "0"])
        .unwrap_err();
    assert!(format!("{err:#}").contains("Failed to load catalog"));
    Ok(())
}
