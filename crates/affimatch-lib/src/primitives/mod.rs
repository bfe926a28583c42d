//! affimatch primitives - shared types and errors
//!
//! Central collection of the types every other module leans on: the product
//! field vocabulary, logging knobs, and the error enums. Config drives the
//! logger and the matcher, errors chain through `thiserror`.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

// Shared macros and patterns
mod shared;
use shared::impl_fromstr_for_value_enum;

/// Product fields that take part in relevance scoring
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum FieldName {
    Title,
    Description,
    Category,
    #[value(alias = "merchant_name")]
    #[serde(alias = "merchant_name")]
    Merchant,
    #[value(alias = "tags")]
    #[serde(alias = "tags")]
    Keywords,
}

impl FieldName {
    /// Every scored field, in breakdown display order
    pub const ALL: [FieldName; 5] = [
        FieldName::Title,
        FieldName::Description,
        FieldName::Category,
        FieldName::Merchant,
        FieldName::Keywords,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FieldName::Title => "title",
            FieldName::Description => "description",
            FieldName::Category => "category",
            FieldName::Merchant => "merchant",
            FieldName::Keywords => "keywords",
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Available log output streams
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogOutput {
    /// STDERR
    Stderr,
    /// STDOUT
    Stdout,
}

/// Log levels for structured logging
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum LogLevel {
    #[value(name = "error", alias = "err", alias = "fatal")]
    Error = 0,
    #[value(name = "warn", alias = "warning")]
    Warning = 1,
    #[value(name = "info", alias = "information")]
    Info = 2,
    #[value(name = "debug", alias = "debugging")]
    Debug = 3,
    #[value(name = "trace", alias = "verbose")]
    Trace = 4,
}

/// Output formats for structured logging
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Compact single-line text
    #[value(alias = "txt", alias = "plain")]
    Text,

    /// Newline-delimited JSON
    Json,

    /// Multi-line human-oriented layout
    #[value(alias = "yaml", alias = "yml")]
    #[serde(alias = "yaml", alias = "yml")]
    Pretty,
}

/// Color output intent, resolved against the terminal at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ColorIntent {
    /// Let the terminal decide
    #[value(alias = "automatic", alias = "detect", alias = "default")]
    Auto,

    /// Force color even when not attached to a tty
    #[value(alias = "force", alias = "on")]
    Always,

    /// Disable color entirely
    #[value(alias = "off")]
    Never,
}

impl ColorIntent {
    /// Resolve the intent to a concrete yes/no for stderr
    pub fn enabled(&self) -> bool {
        match self {
            ColorIntent::Auto => console::colors_enabled_stderr(),
            ColorIntent::Always => true,
            ColorIntent::Never => false,
        }
    }

    /// Same as [`enabled`](Self::enabled), for stdout
    pub fn enabled_stdout(&self) -> bool {
        match self {
            ColorIntent::Auto => console::colors_enabled(),
            ColorIntent::Always => true,
            ColorIntent::Never => false,
        }
    }
}

impl LogLevel {
    /// Convert verbosity level from AppConfig to LogLevel
    pub fn from_verbosity(verbosity: u8) -> Self {
        match verbosity {
            0 => LogLevel::Error,
            1 => LogLevel::Warning,
            2 => LogLevel::Info,
            3 => LogLevel::Debug,
            4.. => LogLevel::Trace,
        }
    }

    /// Directive string understood by `EnvFilter`
    pub fn as_filter(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warning => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

// Generate FromStr implementations for all ValueEnum types
impl_fromstr_for_value_enum!(FieldName, "invalid product field");
impl_fromstr_for_value_enum!(LogLevel, "invalid log level");
impl_fromstr_for_value_enum!(LogFormat, "invalid log format");
impl_fromstr_for_value_enum!(LogOutput, "invalid log output stream");
impl_fromstr_for_value_enum!(ColorIntent, "invalid color intent");

// ============================================================================
// LOGGER CONFIGURATION TYPES
// ============================================================================

/// Logger configuration derived from the application config
#[derive(Debug, Clone)]
pub struct LoggerConfig {
    pub level: LogLevel,
    pub format: LogFormat,
    pub output: LogOutput,
    pub color: bool,
}

// ============================================================================
// STRUCTURED ERROR TYPES
// ============================================================================

/// Invalid matcher configuration, rejected at construction time
#[derive(Debug, Error, PartialEq)]
pub enum MatchError {
    #[error("Weight for field '{field}' must be non-negative, got {value}")]
    NegativeWeight { field: FieldName, value: f64 },

    #[error("Weight for field '{field}' must be a finite number")]
    NonFiniteWeight { field: FieldName },
}

/// Product catalog loading errors
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to decode catalog '{}': {source}", path.display())]
    Decode {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Product index {index} is out of range for a catalog of {len} products")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Application configuration loading and validation errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load environment file '{file}': {source}")]
    EnvFileError {
        file: String,
        source: dotenvy::Error,
    },

    #[error("Failed to parse environment variables: {source}")]
    EnvironmentParsingFailed {
        #[from]
        source: envy::Error,
    },

    #[error("Failed to read config file '{}': {source}", path.display())]
    ConfigFileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{}': {source}", path.display())]
    ConfigFileParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid matching configuration: {source}")]
    InvalidMatchConfig {
        #[from]
        source: MatchError,
    },

    #[error("Configuration validation failed: {reason}")]
    ValidationFailed { reason: String },

    #[error("Failed to parse configuration value '{value}': {reason}")]
    ParseError { value: String, reason: String },
}

/// Logger initialization errors
#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("Failed to initialize tracing subscriber: {reason}")]
    InitializationFailed { reason: String },

    #[error("Logger already initialized")]
    AlreadyInitialized,
}

#[cfg(test)]
mod tests {
    include!("mod.test.rs");
}
