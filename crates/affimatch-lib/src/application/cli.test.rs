use super::*;
use clap::CommandFactory;

#[test]
fn test_cli_definition_is_consistent() {
    Cli::command().debug_assert();
}

#[test]
fn test_no_subcommand() {
    let parsed = CliConfig::try_parse_from(["affimatch"]).unwrap();
    assert!(parsed.command.is_none());
}

#[test]
fn test_rank_command_parses() {
    let parsed = CliConfig::try_parse_from([
        "affimatch",
        "rank",
        "gaming laptop",
        "--catalog",
        "products.json",
        "--category",
        "Computer",
        "--prefilter",
        "-n",
        "5",
        "--parallel",
        "--output",
        "json",
    ])
    .unwrap();

    match parsed.command {
        Some(Commands::Rank {
            keyword,
            catalog,
            category,
            merchant,
            prefilter,
            limit,
            parallel,
            output,
        }) => {
            assert_eq!(keyword, "gaming laptop");
            assert_eq!(catalog, PathBuf::from("products.json"));
            assert_eq!(category.as_deref(), Some("Computer"));
            assert!(merchant.is_none());
            assert!(prefilter);
            assert_eq!(limit, Some(5));
            assert!(parallel);
            assert_eq!(output, OutputFormat::Json);
        }
        other => panic!("expected rank command, got {other:?}"),
    }
}

#[test]
fn test_global_flags_after_subcommand() {
    let parsed = CliConfig::try_parse_from([
        "affimatch",
        "rank",
        "laptop",
        "--catalog",
        "products.json",
        "--threshold",
        "50",
        "--weight-title",
        "0.7",
    ])
    .unwrap();

    assert_eq!(parsed.app_config.threshold, Some(50));
    assert_eq!(parsed.app_config.weight_title, Some(0.7));
}

#[test]
fn test_score_command_requires_index() {
    assert!(
        CliConfig::try_parse_from(["affimatch", "score", "laptop", "--catalog", "p.json"])
            .is_err()
    );

    let parsed = CliConfig::try_parse_from([
        "affimatch", "score", "laptop", "--catalog", "p.json", "--index", "3",
    ])
    .unwrap();
    assert!(matches!(
        parsed.command,
        Some(Commands::Score { index: 3, output: OutputFormat::Text, .. })
    ));
}

#[test]
fn test_compare_and_normalize_commands() {
    let parsed = CliConfig::try_parse_from(["affimatch", "compare", "Laptop", "Laptoptasche"]).unwrap();
    assert!(matches!(parsed.command, Some(Commands::Compare { .. })));

    let parsed = CliConfig::try_parse_from(["affimatch", "normalize", "Größe"]).unwrap();
    match parsed.command {
        Some(Commands::Normalize { text }) => assert_eq!(text, "Größe"),
        other => panic!("expected normalize command, got {other:?}"),
    }
}

#[test]
fn test_command_names_and_catalog_requirement() {
    let rank = Commands::Rank {
        keyword: "laptop".to_string(),
        catalog: PathBuf::from("p.json"),
        category: None,
        merchant: None,
        prefilter: false,
        limit: None,
        parallel: false,
        output: OutputFormat::Text,
    };
    assert_eq!(rank.name(), "rank");
    assert!(rank.requires_catalog());

    let normalize = Commands::Normalize {
        text: "x".to_string(),
    };
    assert_eq!(normalize.name(), "normalize");
    assert!(!normalize.requires_catalog());
    assert!(!Commands::Config.requires_catalog());
}

#[test]
fn test_invalid_output_format() {
    assert!(
        CliConfig::try_parse_from([
            "affimatch", "rank", "laptop", "--catalog", "p.json", "--output", "xml",
        ])
        .is_err()
    );
}
