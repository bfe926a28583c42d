//! # affimatch Library
//!
//! Fuzzy relevance scoring for affiliate product catalogs.
//!
//! ## Core Modules
//!
//! - [`primitives`] - Foundation types, errors, and shared coordination
//! - [`matching`] - Normalization, tokenization, similarity and ranking
//! - [`catalog`] - Product records and candidate sources
//! - [`logger`] - Structured logging with progress tracking
//! - [`display`] - Styled terminal output for command results
//! - [`application`] - CLI interface and configuration management
//!
//! ## Quick Start
//!
//! ```
//! use affimatch_lib::catalog::ProductRecord;
//! use affimatch_lib::matching::{MatchConfig, Matcher};
//!
//! let products = vec![
//!     ProductRecord::titled("Kaffeemaschine"),
//!     ProductRecord::titled("Dieser Laptop ist super"),
//! ];
//! let config = MatchConfig::default();
//! let best = Matcher::new(&config).best_match("Laptop", &products).unwrap();
//!
//! assert_eq!(best.index, 1);
//! ```

pub mod application;
pub mod catalog;
pub mod display;
pub mod logger;
pub mod matching;
pub mod primitives;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

// Re-export commonly used types for convenience
pub use application::{AppConfig, Cli, Commands, execute_command};
pub use catalog::{CatalogQuery, InMemoryCatalog, JsonCatalog, ProductRecord, ProductRepository};
pub use logger::Logger;
pub use matching::{FieldWeights, MatchConfig, MatchResult, Matcher, RankedMatch, calculate_score};
pub use primitives::{
    CatalogError, ColorIntent, ConfigError, FieldName, LogFormat, LogLevel, LogOutput,
    LoggerError, MatchError,
};

use anyhow::{Context, Result};

pub fn main() -> Result<()> {
    // Load configuration: defaults -> .env -> config file -> env vars -> CLI
    let (config, command) = AppConfig::load()?;

    Logger::init(config.to_logger_config()).context("Failed to initialize logging")?;
    tracing::debug!(?config, "configuration loaded");

    execute_command(command, &config)
}
