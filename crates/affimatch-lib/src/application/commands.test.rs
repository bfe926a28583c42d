use super::*;
use std::io::Write as _;
use tempfile::NamedTempFile;

fn catalog_file() -> NamedTempFile {
    let products = serde_json::json!([
        { "title": "Kaffeemaschine", "category": "Küche" },
        {
            "title": "Gaming Laptop 17 Zoll",
            "description": "Leistungsstarker Laptop",
            "categories": ["Computer", "Laptops"]
        },
        { "title": "Laptop", "category": ["Laptops"], "tags": "laptop, notebook" },
        { "title": "Laptoptasche", "category": "Zubehör" }
    ]);
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(products.to_string().as_bytes()).unwrap();
    file
}

fn run(command: Commands, config: &AppConfig) -> Result<String> {
    let mut display = StatusDisplay::new(Vec::new(), false);
    execute_command_with_display(command, config, &mut display)?;
    Ok(String::from_utf8(display.into_inner())?)
}

/// Optional flags for a rank command
#[derive(Default)]
struct RankFlags {
    category: Option<String>,
    prefilter: bool,
    limit: Option<usize>,
    parallel: bool,
    output: OutputFormat,
}

fn rank_with(catalog: &NamedTempFile, keyword: &str, flags: RankFlags) -> Commands {
    Commands::Rank {
        keyword: keyword.to_string(),
        catalog: catalog.path().to_path_buf(),
        category: flags.category,
        merchant: None,
        prefilter: flags.prefilter,
        limit: flags.limit,
        parallel: flags.parallel,
        output: flags.output,
    }
}

fn rank_command(catalog: &NamedTempFile, keyword: &str) -> Commands {
    rank_with(catalog, keyword, RankFlags::default())
}

fn score_command(catalog: &NamedTempFile, index: usize, output: OutputFormat) -> Commands {
    Commands::Score {
        keyword: "laptop".to_string(),
        catalog: catalog.path().to_path_buf(),
        index,
        output,
    }
}

// ===== RANK TESTS =====

mod handle_rank_tests {
    use super::*;

    #[test]
    fn it_lists_matches_best_first() {
        let catalog = catalog_file();
        let output = run(rank_command(&catalog, "laptop"), &AppConfig::default()).unwrap();

        assert!(output.starts_with("→ Ranking 'laptop' over 4 candidates\n"));
        assert!(output.contains("   1.  79.75  Gaming Laptop 17 Zoll\n"));
        assert!(output.contains("   2.  63.00  Laptop\n"));
        assert!(!output.contains("Kaffeemaschine"));
        assert!(output.ends_with("✓ 3 matches: threshold 30\n"));
    }

    #[test]
    fn it_writes_json_report() {
        let catalog = catalog_file();
        let command = rank_with(
            &catalog,
            "laptop",
            RankFlags {
                output: OutputFormat::Json,
                ..RankFlags::default()
            },
        );
        let output = run(command, &AppConfig::default()).unwrap();
        let report: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(report["keyword"], "laptop");
        assert_eq!(report["threshold"], 30);
        assert_eq!(report["candidates"], 4);
        let matches = report["matches"].as_array().unwrap();
        assert_eq!(matches.len(), 3);
        assert_eq!(matches[0]["index"], 1);
        assert_eq!(matches[0]["score"], 79.75);
        assert_eq!(matches[1]["field_matches"]["keywords"], 1.0);
    }

    #[test]
    fn it_filters_candidates_by_category() {
        let catalog = catalog_file();
        let command = rank_with(
            &catalog,
            "laptop",
            RankFlags {
                category: Some("laptops".to_string()),
                ..RankFlags::default()
            },
        );
        let output = run(command, &AppConfig::default()).unwrap();
        assert!(output.contains("over 2 candidates"));
        assert!(!output.contains("Laptoptasche"));
    }

    #[test]
    fn it_prefilters_on_keyword_tokens() {
        let catalog = catalog_file();
        let command = rank_with(
            &catalog,
            "kaffee",
            RankFlags {
                prefilter: true,
                ..RankFlags::default()
            },
        );
        let output = run(command, &AppConfig::default()).unwrap();
        assert!(output.contains("over 1 candidates"));
    }

    #[test]
    fn it_applies_limit() {
        let catalog = catalog_file();
        let command = rank_with(
            &catalog,
            "laptop",
            RankFlags {
                limit: Some(1),
                ..RankFlags::default()
            },
        );
        let output = run(command, &AppConfig::default()).unwrap();
        assert!(output.contains("Gaming Laptop 17 Zoll"));
        assert!(!output.contains("   2. "));
        assert!(output.contains("✓ 1 matches"));
    }

    #[test]
    fn it_ranks_identically_on_a_sized_pool() {
        let catalog = catalog_file();
        let config = AppConfig {
            jobs: 2,
            ..AppConfig::default()
        };
        let sequential = run(rank_command(&catalog, "laptop"), &config).unwrap();
        let parallel = run(
            rank_with(
                &catalog,
                "laptop",
                RankFlags {
                    parallel: true,
                    ..RankFlags::default()
                },
            ),
            &config,
        )
        .unwrap();
        assert_eq!(sequential, parallel);
    }

    #[test]
    fn it_warns_when_nothing_passes() {
        let catalog = catalog_file();
        let config = AppConfig {
            threshold: Some(100),
            ..AppConfig::default()
        };
        let output = run(rank_command(&catalog, "laptop"), &config).unwrap();
        assert!(output.contains("! No product reached the threshold of 100"));
    }

    #[test]
    fn it_reports_missing_catalog() {
        let command = Commands::Rank {
            keyword: "laptop".to_string(),
            catalog: PathBuf::from("/nonexistent/products.json"),
            category: None,
            merchant: None,
            prefilter: false,
            limit: None,
            parallel: false,
            output: OutputFormat::Text,
        };
        let err = run(command, &AppConfig::default()).unwrap_err();
        assert!(format!("{err:#}").contains("Failed to load catalog"));
    }

    #[test]
    fn it_rejects_invalid_weights() {
        let catalog = catalog_file();
        let config = AppConfig {
            weight_title: Some(f64::NAN),
            ..AppConfig::default()
        };
        let err = run(rank_command(&catalog, "laptop"), &config).unwrap_err();
        assert!(format!("{err:#}").contains("Invalid matching configuration"));
    }
}

// ===== SCORE TESTS =====

mod handle_score_tests {
    use super::*;

    #[test]
    fn it_explains_each_field() {
        let catalog = catalog_file();
        let output = run(
            score_command(&catalog, 2, OutputFormat::Text),
            &AppConfig::default(),
        )
        .unwrap();

        assert!(output.contains("  title        1.0000 x 0.40 = 40.00\n"));
        assert!(output.contains("  category     0.9000 x 0.20 = 18.00\n"));
        assert!(output.contains("  keywords     1.0000 x 0.05 = 5.00\n"));
        assert!(output.contains("  description  absent\n"));
        assert!(output.ends_with("✓ score: 63.00\n"));
    }

    #[test]
    fn it_flags_scores_below_threshold() {
        let catalog = catalog_file();
        let output = run(
            score_command(&catalog, 0, OutputFormat::Text),
            &AppConfig::default(),
        )
        .unwrap();
        assert!(output.contains("✗ score: "));
        assert!(output.contains("(below threshold 30)"));
    }

    #[test]
    fn it_writes_json_report() {
        let catalog = catalog_file();
        let output = run(
            score_command(&catalog, 2, OutputFormat::Json),
            &AppConfig::default(),
        )
        .unwrap();
        let report: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(report["index"], 2);
        assert_eq!(report["score"], 63.0);
        assert_eq!(report["passes"], true);
        assert_eq!(report["product"]["title"], "Laptop");
        assert!(report["field_matches"].get("description").is_none());
    }

    #[test]
    fn it_rejects_out_of_range_index() {
        let catalog = catalog_file();
        let err = run(
            score_command(&catalog, 9, OutputFormat::Text),
            &AppConfig::default(),
        )
        .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<crate::primitives::CatalogError>(),
            Some(crate::primitives::CatalogError::IndexOutOfRange { index: 9, len: 4 })
        ));
    }
}

// ===== COMPARE / NORMALIZE / CONFIG TESTS =====

mod handle_text_tools_tests {
    use super::*;

    #[test]
    fn it_compares_identical_texts() {
        let output = run(
            Commands::Compare {
                search: "Laptop".to_string(),
                target: "LAPTOP!".to_string(),
            },
            &AppConfig::default(),
        )
        .unwrap();
        assert!(output.contains("· identical\n"));
        assert!(output.ends_with("✓ similarity: 1.0000\n"));
    }

    #[test]
    fn it_shows_blended_components() {
        let output = run(
            Commands::Compare {
                search: "laptop".to_string(),
                target: "notebook".to_string(),
            },
            &AppConfig::default(),
        )
        .unwrap();
        assert!(output.contains("word match"));
        assert!(output.contains("levenshtein"));
        assert!(!output.contains("skipped"));
    }

    #[test]
    fn it_normalizes_and_tokenizes() {
        let output = run(
            Commands::Normalize {
                text: "Dieser Laptop ist SUPER!".to_string(),
            },
            &AppConfig::default(),
        )
        .unwrap();
        assert!(output.contains("dieser laptop ist super\n"));
        assert!(output.contains("  • laptop\n  • super\n"));
    }

    #[test]
    fn it_uses_configured_stopwords() {
        let config = AppConfig {
            extra_stopwords: vec!["super".to_string()],
            ..AppConfig::default()
        };
        let output = run(
            Commands::Normalize {
                text: "Dieser Laptop ist SUPER!".to_string(),
            },
            &config,
        )
        .unwrap();
        assert!(output.contains("  • laptop\n"));
        assert!(!output.contains("• super"));
    }

    #[test]
    fn it_prints_effective_config() {
        let config = AppConfig {
            threshold: Some(45),
            ..AppConfig::default()
        };
        let output = run(Commands::Config, &config).unwrap();
        let parsed: toml::Value = toml::from_str(&output).unwrap();
        assert_eq!(parsed["threshold"].as_integer(), Some(45));
        assert_eq!(parsed["weights"]["title"].as_float(), Some(0.4));
    }
}
