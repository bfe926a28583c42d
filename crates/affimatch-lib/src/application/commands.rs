//! Command execution handlers
//!
//! Every handler writes through a [`StatusDisplay`] so tests can capture
//! the exact output of a command.

use crate::application::{AppConfig, Commands, OutputFormat};
use crate::catalog::{CatalogQuery, JsonCatalog, ProductRecord, ProductRepository};
use crate::display::StatusDisplay;
use crate::matching::{
    MatchConfig, Matcher, RankedMatch, Similarity, SimilarityScorer, calculate_score, normalize,
};
use crate::primitives::FieldName;
use anyhow::{Context, Result};
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;

/// Execute a CLI command, writing results to stdout
pub fn execute_command(command: Option<Commands>, config: &AppConfig) -> Result<()> {
    let stdout = std::io::stdout();
    let mut display = StatusDisplay::new(stdout.lock(), config.color.enabled_stdout());

    let Some(command) = command else {
        display.message("affimatch - fuzzy relevance ranking for affiliate products")?;
        display.subtle("Run 'affimatch --help' for usage information")?;
        return Ok(());
    };

    execute_command_with_display(command, config, &mut display)
}

/// Execute a specific command against a provided display (for testing)
pub fn execute_command_with_display<W: Write>(
    command: Commands,
    config: &AppConfig,
    display: &mut StatusDisplay<W>,
) -> Result<()> {
    tracing::debug!(command = command.name(), "executing command");
    let match_config = config
        .to_match_config()
        .context("Invalid matching configuration")?;

    match command {
        Commands::Rank {
            keyword,
            catalog,
            category,
            merchant,
            prefilter,
            limit,
            parallel,
            output,
        } => {
            let request = RankRequest {
                keyword,
                catalog,
                category,
                merchant,
                prefilter,
                limit,
                parallel,
            };
            handle_rank(display, config, &match_config, request, output)
        }
        Commands::Score {
            keyword,
            catalog,
            index,
            output,
        } => handle_score(display, &match_config, &keyword, catalog, index, output),
        Commands::Compare { search, target } => {
            handle_compare(display, &match_config, &search, &target)
        }
        Commands::Normalize { text } => handle_normalize(display, &match_config, &text),
        Commands::Config => handle_config(display, config),
    }
}

struct RankRequest {
    keyword: String,
    catalog: PathBuf,
    category: Option<String>,
    merchant: Option<String>,
    prefilter: bool,
    limit: Option<usize>,
    parallel: bool,
}

impl RankRequest {
    fn query(&self) -> CatalogQuery {
        let mut query = if self.prefilter {
            CatalogQuery::search(&self.keyword)
        } else {
            CatalogQuery::all()
        };
        if let Some(category) = &self.category {
            query = query.in_category(category);
        }
        if let Some(merchant) = &self.merchant {
            query = query.from_merchant(merchant);
        }
        query
    }
}

#[derive(Serialize)]
struct RankReport<'a> {
    keyword: &'a str,
    threshold: u8,
    candidates: usize,
    matches: &'a [RankedMatch<'a>],
}

fn handle_rank<W: Write>(
    display: &mut StatusDisplay<W>,
    config: &AppConfig,
    match_config: &MatchConfig,
    request: RankRequest,
    output: OutputFormat,
) -> Result<()> {
    let repository = JsonCatalog::new(&request.catalog);
    let candidates = repository
        .candidates(&request.query())
        .with_context(|| format!("Failed to load catalog {}", request.catalog.display()))?;

    let matcher = Matcher::new(match_config)
        .with_limit(request.limit)
        .parallel(request.parallel);

    let span = crate::progress_span!("rank", total = candidates.len());
    let rank = || matcher.rank(&request.keyword, &candidates);
    let ranked = if request.parallel && config.jobs > 0 {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.jobs)
            .build()
            .context("Failed to build ranking thread pool")?;
        span.in_scope(|| pool.install(rank))
    } else {
        span.in_scope(rank)
    };

    tracing::info!(
        keyword = %request.keyword,
        candidates = candidates.len(),
        matches = ranked.len(),
        "ranking complete"
    );

    match output {
        OutputFormat::Json => {
            let report = RankReport {
                keyword: &request.keyword,
                threshold: match_config.threshold(),
                candidates: candidates.len(),
                matches: &ranked,
            };
            write_json(display, &report)
        }
        OutputFormat::Text => {
            display.section(&format!(
                "Ranking '{}' over {} candidates",
                request.keyword,
                candidates.len()
            ))?;

            if ranked.is_empty() {
                display.warning(&format!(
                    "No product reached the threshold of {}",
                    match_config.threshold()
                ))?;
                return Ok(());
            }

            for (position, ranked_match) in ranked.iter().enumerate() {
                display.ranked(position + 1, ranked_match.score(), ranked_match.product.label())?;
            }
            display.success(
                &format!("{} matches", ranked.len()),
                &format!("threshold {}", match_config.threshold()),
            )?;
            Ok(())
        }
    }
}

#[derive(Serialize)]
struct ScoreReport<'a> {
    keyword: &'a str,
    index: usize,
    product: &'a ProductRecord,
    score: f64,
    field_matches: &'a std::collections::BTreeMap<FieldName, f64>,
    threshold: u8,
    passes: bool,
}

fn handle_score<W: Write>(
    display: &mut StatusDisplay<W>,
    match_config: &MatchConfig,
    keyword: &str,
    catalog: PathBuf,
    index: usize,
    output: OutputFormat,
) -> Result<()> {
    let catalog = JsonCatalog::new(catalog)
        .load()
        .context("Failed to load catalog")?;
    let product = catalog.get(index)?;
    let result = calculate_score(keyword, product, match_config);
    let passes = result.score >= f64::from(match_config.threshold());

    if output == OutputFormat::Json {
        let report = ScoreReport {
            keyword,
            index,
            product,
            score: result.score,
            field_matches: &result.field_matches,
            threshold: match_config.threshold(),
            passes,
        };
        return write_json(display, &report);
    }

    display.section(&format!("Scoring '{}' against #{index} {}", keyword, product.label()))?;
    for field in FieldName::ALL {
        let weight = match_config.weight(field);
        let line = match result.field(field) {
            Some(similarity) => format!(
                "{similarity:.4} x {weight:.2} = {:.2}",
                similarity * weight * 100.0
            ),
            None => "absent".to_string(),
        };
        display.field(field.as_str(), &line)?;
    }

    let summary = format!("{:.2}", result.score);
    if passes {
        display.success("score", &summary)?;
    } else {
        display.error(
            "score",
            &format!("{summary} (below threshold {})", match_config.threshold()),
        )?;
    }
    Ok(())
}

fn handle_compare<W: Write>(
    display: &mut StatusDisplay<W>,
    match_config: &MatchConfig,
    search: &str,
    target: &str,
) -> Result<()> {
    let search = normalize(search);
    let target = normalize(target);
    let scorer = SimilarityScorer::new(match_config.tokenizer());

    display.section(&format!("Comparing '{search}' with '{target}'"))?;
    let comparison = scorer.compare(&search, &target);
    match &comparison {
        Similarity::Empty => display.warning("one side is empty after normalization")?,
        Similarity::Exact => display.info("identical")?,
        Similarity::Contained => display.info("target contains the search text")?,
        Similarity::Blended(blended) => {
            display.field("word match", &format!("{:.4}", blended.word_match))?;
            display.field("characters", &format!("{:.4}", blended.character_ratio))?;
            display.field("bigrams", &format!("{:.4}", blended.bigram_jaccard))?;
            let levenshtein = blended
                .levenshtein
                .map_or_else(|| "skipped".to_string(), |ratio| format!("{ratio:.4}"));
            display.field("levenshtein", &levenshtein)?;
        }
    }
    display.success("similarity", &format!("{:.4}", comparison.score()))?;
    Ok(())
}

fn handle_normalize<W: Write>(
    display: &mut StatusDisplay<W>,
    match_config: &MatchConfig,
    text: &str,
) -> Result<()> {
    let normalized = normalize(text);
    let tokens = match_config.tokenizer().tokenize(&normalized);

    display.field("normalized", &normalized)?;
    display.field("tokens", &tokens.len().to_string())?;
    display.list(&tokens)?;
    Ok(())
}

fn handle_config<W: Write>(display: &mut StatusDisplay<W>, config: &AppConfig) -> Result<()> {
    let effective = config.effective_match_config()?;
    let rendered =
        toml::to_string(&effective).context("Failed to render configuration as TOML")?;
    write!(display.writer(), "{rendered}")?;
    Ok(())
}

fn write_json<W: Write, T: Serialize>(display: &mut StatusDisplay<W>, value: &T) -> Result<()> {
    let writer = display.writer();
    serde_json::to_writer_pretty(&mut *writer, value).context("Failed to write JSON output")?;
    writeln!(writer)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    include!("commands.test.rs");
}
