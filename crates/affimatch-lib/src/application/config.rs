//! Application configuration management
//!
//! Handles config loading, validation, and environment variable processing
//! following the precedence: defaults -> config file -> .env and env vars -> CLI args.

use crate::matching::config::defaults as match_defaults;
use crate::matching::{FieldWeights, MatchConfig};
use crate::primitives::*;
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default configuration values
pub mod defaults {
    pub const LOG_LEVEL: &str = "0"; // Error-only logging by default
    pub const LOG_FORMAT: &str = "text";
    pub const LOG_OUTPUT: &str = "stderr";
    pub const COLOR: &str = "auto";
    pub const JOBS: &str = "0"; // 0 = let rayon size the pool
}

/// Application configuration structure
#[derive(Debug, Clone, Parser)]
pub struct AppConfig {
    /// TOML file with [weights], threshold and stopwords
    #[arg(long = "config", env = "AFFIMATCH_CONFIG", global = true)]
    pub config_file: Option<PathBuf>,

    /// Weight of the title field
    #[arg(long, env = "AFFIMATCH_WEIGHT_TITLE", global = true, allow_negative_numbers = true)]
    pub weight_title: Option<f64>,

    /// Weight of the description field
    #[arg(long, env = "AFFIMATCH_WEIGHT_DESCRIPTION", global = true, allow_negative_numbers = true)]
    pub weight_description: Option<f64>,

    /// Weight of the category field
    #[arg(long, env = "AFFIMATCH_WEIGHT_CATEGORY", global = true, allow_negative_numbers = true)]
    pub weight_category: Option<f64>,

    /// Weight of the merchant field
    #[arg(long, env = "AFFIMATCH_WEIGHT_MERCHANT", global = true, allow_negative_numbers = true)]
    pub weight_merchant: Option<f64>,

    /// Weight of the keywords/tags field
    #[arg(long, env = "AFFIMATCH_WEIGHT_KEYWORDS", global = true, allow_negative_numbers = true)]
    pub weight_keywords: Option<f64>,

    /// Minimum score (0-100) for a product to be listed; clamped
    #[arg(short, long, env = "AFFIMATCH_THRESHOLD", global = true, allow_negative_numbers = true)]
    pub threshold: Option<i64>,

    /// Additional stopwords, comma separated
    #[arg(
        long = "stopwords",
        env = "AFFIMATCH_STOPWORDS",
        value_delimiter = ',',
        global = true
    )]
    pub extra_stopwords: Vec<String>,

    /// Worker threads for parallel ranking (0 = one per CPU)
    #[arg(short = 'j', long, env = "AFFIMATCH_JOBS", default_value = defaults::JOBS, global = true)]
    pub jobs: usize,

    /// Verbosity level (0=error, 1=warn, 2=info, 3=debug, 4=trace)
    #[arg(long, env = "AFFIMATCH_LOG_LEVEL", default_value = defaults::LOG_LEVEL, global = true)]
    pub log_level: u8,

    /// Log format (text, json, pretty)
    #[arg(long, env = "AFFIMATCH_LOG_FORMAT", default_value = defaults::LOG_FORMAT, global = true)]
    pub log_format: LogFormat,

    /// Log output stream (stderr, stdout)
    #[arg(long, env = "AFFIMATCH_LOG_OUTPUT", default_value = defaults::LOG_OUTPUT, global = true)]
    pub log_output: LogOutput,

    /// Color output control (auto, always, never)
    #[arg(long, env = "AFFIMATCH_COLOR", default_value = defaults::COLOR, global = true)]
    pub color: ColorIntent,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            config_file: None,
            weight_title: None,
            weight_description: None,
            weight_category: None,
            weight_merchant: None,
            weight_keywords: None,
            threshold: None,
            extra_stopwords: Vec::new(),
            jobs: 0,
            log_level: 0,
            log_format: LogFormat::Text,
            log_output: LogOutput::Stderr,
            color: ColorIntent::Auto,
        }
    }
}

/// Weights as written in a config file; unset fields fall through
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileWeights {
    pub title: Option<f64>,
    pub description: Option<f64>,
    pub category: Option<f64>,
    #[serde(alias = "merchant_name")]
    pub merchant: Option<f64>,
    #[serde(alias = "tags")]
    pub keywords: Option<f64>,
}

/// Matching section of a TOML config file
///
/// ```toml
/// threshold = 40
/// stopwords = ["angebot", "neu"]
///
/// [weights]
/// title = 0.5
/// keywords = 0.1
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MatchFileConfig {
    pub weights: FileWeights,
    pub threshold: Option<i64>,
    pub stopwords: Vec<String>,
}

impl MatchFileConfig {
    pub fn parse(content: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|source| ConfigError::ConfigFileParse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content =
            std::fs::read_to_string(path).map_err(|source| ConfigError::ConfigFileRead {
                path: path.to_path_buf(),
                source,
            })?;
        Self::parse(&content, path)
    }
}

/// Effective matching settings, as printed by the `config` command
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EffectiveMatchConfig {
    pub threshold: u8,
    pub extra_stopwords: Vec<String>,
    pub weights: FieldWeights,
}

impl AppConfig {
    /// Create LoggerConfig from AppConfig
    pub fn to_logger_config(&self) -> LoggerConfig {
        LoggerConfig {
            level: LogLevel::from_verbosity(self.log_level),
            format: self.log_format,
            output: self.log_output,
            color: self.color.enabled(),
        }
    }

    /// Fill settings this config leaves unset from a config file
    ///
    /// File stopwords are added in front of the ones already configured.
    pub fn merge_file(mut self, file: MatchFileConfig) -> Self {
        let weights = file.weights;
        self.weight_title = self.weight_title.or(weights.title);
        self.weight_description = self.weight_description.or(weights.description);
        self.weight_category = self.weight_category.or(weights.category);
        self.weight_merchant = self.weight_merchant.or(weights.merchant);
        self.weight_keywords = self.weight_keywords.or(weights.keywords);
        self.threshold = self.threshold.or(file.threshold);

        let mut stopwords = file.stopwords;
        stopwords.append(&mut self.extra_stopwords);
        self.extra_stopwords = stopwords;

        self
    }

    /// Requested weights before renormalization
    pub fn field_weights(&self) -> FieldWeights {
        let mut weights = FieldWeights::default();
        let overrides = [
            (FieldName::Title, self.weight_title),
            (FieldName::Description, self.weight_description),
            (FieldName::Category, self.weight_category),
            (FieldName::Merchant, self.weight_merchant),
            (FieldName::Keywords, self.weight_keywords),
        ];
        for (field, value) in overrides {
            if let Some(value) = value {
                weights.set(field, value);
            }
        }
        weights
    }

    /// Build the immutable matcher configuration
    pub fn to_match_config(&self) -> Result<MatchConfig, ConfigError> {
        let threshold = self.threshold.unwrap_or(match_defaults::THRESHOLD);
        let config = MatchConfig::new(self.field_weights(), threshold)?
            .with_extra_stopwords(&self.extra_stopwords);
        Ok(config)
    }

    pub fn effective_match_config(&self) -> Result<EffectiveMatchConfig, ConfigError> {
        let config = self.to_match_config()?;
        Ok(EffectiveMatchConfig {
            threshold: config.threshold(),
            extra_stopwords: self.extra_stopwords.clone(),
            weights: *config.weights(),
        })
    }

    /// Validate the final configuration
    pub fn validate(&mut self) -> Result<(), ConfigError> {
        self.extra_stopwords = self
            .extra_stopwords
            .iter()
            .map(|word| word.trim().to_string())
            .filter(|word| !word.is_empty())
            .collect();

        if self.log_level > 4 {
            return Err(ConfigError::ValidationFailed {
                reason: format!("log level must be 0-4, got {}", self.log_level),
            });
        }

        // Surface bad weights before any command runs
        self.to_match_config()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    include!("config.test.rs");
}
