use crate::primitives::ConfigError;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use super::config::AppConfig;

/// affimatch CLI - fuzzy relevance ranking for affiliate product catalogs
#[derive(Debug, Clone, Parser)]
#[command(name = "affimatch")]
#[command(about = "Rank affiliate products by fuzzy relevance to a keyword")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Global configuration options
    #[command(flatten)]
    pub config: AppConfig,

    /// affimatch commands
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Configuration loaded from CLI
pub struct CliConfig {
    pub app_config: AppConfig,
    pub command: Option<Commands>,
}

impl CliConfig {
    /// Load configuration from command line arguments
    pub fn load() -> Result<Self, ConfigError> {
        Ok(Self::from_cli(Cli::parse()))
    }

    /// Parse an explicit argument list (first item is the binary name)
    pub fn try_parse_from<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Cli::try_parse_from(args).map(Self::from_cli)
    }

    fn from_cli(cli: Cli) -> Self {
        Self {
            app_config: cli.config,
            command: cli.command,
        }
    }
}

/// Output rendering for command results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

/// Available affimatch commands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Rank catalog products against a keyword
    Rank {
        /// Search keyword
        keyword: String,

        /// Product catalog (JSON array of products)
        #[arg(short, long, env = "AFFIMATCH_CATALOG")]
        catalog: PathBuf,

        /// Only consider products in this category (substring, case-insensitive)
        #[arg(long)]
        category: Option<String>,

        /// Only consider products from this merchant (substring, case-insensitive)
        #[arg(long)]
        merchant: Option<String>,

        /// Pre-filter candidates by a loose text search on the keyword
        #[arg(long)]
        prefilter: bool,

        /// Maximum number of results to show
        #[arg(short = 'n', long)]
        limit: Option<usize>,

        /// Score candidates on the rayon thread pool
        #[arg(short, long)]
        parallel: bool,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        output: OutputFormat,
    },

    /// Show the per-field breakdown for one catalog product
    Score {
        /// Search keyword
        keyword: String,

        /// Product catalog (JSON array of products)
        #[arg(short, long, env = "AFFIMATCH_CATALOG")]
        catalog: PathBuf,

        /// Zero-based position of the product in the catalog
        #[arg(short, long)]
        index: usize,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        output: OutputFormat,
    },

    /// Compare two strings with the fuzzy similarity measure
    Compare {
        /// Search text
        search: String,

        /// Target text
        target: String,
    },

    /// Show how a text is normalized and tokenized
    Normalize {
        /// Text to normalize
        text: String,
    },

    /// Print the effective matching configuration as TOML
    Config,
}

impl Commands {
    /// Name used in logs and spans
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Rank { .. } => "rank",
            Commands::Score { .. } => "score",
            Commands::Compare { .. } => "compare",
            Commands::Normalize { .. } => "normalize",
            Commands::Config => "config",
        }
    }

    /// Check if command reads a catalog file
    pub fn requires_catalog(&self) -> bool {
        matches!(self, Commands::Rank { .. } | Commands::Score { .. })
    }
}

#[cfg(test)]
mod tests {
    include!("cli.test.rs");
}
