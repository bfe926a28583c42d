//! E2E tests for compare, normalize and config

use affimatch_lib::application::EnvironmentConfig;
use affimatch_tests::{TestEnvironment, config_path};
use anyhow::Result;

#[test]
fn e2e_normalize_german_text() -> Result<()> {
    let env = TestEnvironment::new()?;
    let output = env.run(["normalize", "Größe: Über-Maß für Schuhe!"])?;

    assert!(output.contains("groesse ueber mass fuer schuhe\n"));
    assert!(output.contains("  • groesse\n"));
    assert!(output.contains("  • schuhe\n"));
    Ok(())
}

#[test]
fn e2e_normalize_with_extra_stopwords() -> Result<()> {
    let env = TestEnvironment::new()?;
    let output = env.run(["--stopwords", "schuhe", "normalize", "Rote Schuhe"])?;

    assert!(output.contains("  • rote\n"));
    assert!(!output.contains("• schuhe"));
    Ok(())
}

#[test]
fn e2e_compare_contained() -> Result<()> {
    let env = TestEnvironment::new()?;
    let output = env.run(["compare", "Laptop", "Gaming Laptop 17 Zoll"])?;

    assert!(output.starts_with("→ Comparing 'laptop' with 'gaming laptop 17 zoll'\n"));
    assert!(output.contains("· target contains the search text\n"));
    assert!(output.ends_with("✓ similarity: 0.9500\n"));
    Ok(())
}

#[test]
fn e2e_compare_long_target_skips_levenshtein() -> Result<()> {
    let env = TestEnvironment::new()?;
    let output = env.run([
        "compare",
        "laptop",
        "Ein sehr langer Produkttitel mit vielen Wörtern über Notebooks",
    ])?;

    assert!(output.contains("levenshtein"));
    assert!(output.contains("skipped"));
    Ok(())
}

#[test]
fn e2e_compare_empty_side() -> Result<()> {
    let env = TestEnvironment::new()?;
    let output = env.run(["compare", "?!", "laptop"])?;

    assert!(output.contains("! one side is empty after normalization"));
    assert!(output.ends_with("✓ similarity: 0.0000\n"));
    Ok(())
}

#[test]
fn e2e_config_shows_layered_values() -> Result<()> {
    let env = TestEnvironment::new()?;
    let config = config_path("title-heavy");

    let output = env.run([
        "--config",
        config.to_str().unwrap(),
        "--weight-description",
        "0.8",
        "config",
    ])?;
    let effective: toml::Value = toml::from_str(&output)?;

    assert_eq!(effective["threshold"].as_integer(), Some(50));
    // title 0.8 from the file, description 0.8 from the CLI, renormalized
    assert_eq!(effective["weights"]["title"].as_float(), Some(0.5));
    assert_eq!(effective["weights"]["description"].as_float(), Some(0.5));

    let stopwords = effective["extra_stopwords"].as_array().unwrap();
    assert_eq!(stopwords.len(), 2);
    Ok(())
}

#[test]
fn e2e_config_defaults() -> Result<()> {
    let env = TestEnvironment::new()?.with_env_config(EnvironmentConfig {
        no_color: Some("1".to_string()),
        ..EnvironmentConfig::default()
    });
    let output = env.run(["config"])?;
    let effective: toml::Value = toml::from_str(&output)?;

    assert_eq!(effective["threshold"].as_integer(), Some(30));
    assert_eq!(effective["weights"]["title"].as_float(), Some(0.4));
    assert_eq!(effective["weights"]["keywords"].as_float(), Some(0.05));
    Ok(())
}

#[test]
fn e2e_config_rejects_malformed_file() -> Result<()> {
    let env = TestEnvironment::new()?;
    let broken = env.write_file("broken.toml", "[weights]\ntitle = \"heavy\"\n")?;

    let err = env
        .run(["--config", broken.to_str().unwrap(), "config"])
        .unwrap_err();
    assert!(err.to_string().contains("broken.toml"));
    Ok(())
}
