//! Configuration loading
//!
//! Coordinates loading configuration from `.env` files, an optional TOML
//! config file, the environment and the command line.

use crate::primitives::ConfigError;
use std::path::Path;

use super::cli::{CliConfig, Commands};
use super::config::{AppConfig, MatchFileConfig};
use super::env::EnvironmentConfig;

/// Dotenv files read at startup, most specific first
pub const ENV_FILES: [&str; 2] = [".env.local", ".env"];

/// Load `.env` style files into the process environment
///
/// Missing files are skipped. Variables already set are never overwritten,
/// so earlier files win over later ones.
pub fn load_env_files<P: AsRef<Path>>(files: &[P]) -> Result<(), ConfigError> {
    for file in files {
        let file = file.as_ref();
        match dotenvy::from_path(file) {
            Ok(()) => tracing::debug!(file = %file.display(), "env file loaded"),
            Err(e) if e.not_found() => {}
            Err(source) => {
                return Err(ConfigError::EnvFileError {
                    file: file.display().to_string(),
                    source,
                });
            }
        }
    }
    Ok(())
}

impl AppConfig {
    /// Load config: defaults -> config file -> .env and env vars -> CLI
    ///
    /// Dotenv values become environment variables, so they rank with the
    /// real environment above the config file.
    pub fn load() -> Result<(Self, Option<Commands>), ConfigError> {
        // .env must land in the process environment before clap reads it
        load_env_files(&ENV_FILES)?;

        let cli_config = CliConfig::load()?;
        let env_config = EnvironmentConfig::load()?;
        let config = cli_config.app_config.resolve(&env_config)?;

        Ok((config, cli_config.command))
    }

    /// Apply environment conventions and the config file, then validate
    pub fn resolve(mut self, env_config: &EnvironmentConfig) -> Result<Self, ConfigError> {
        self.color = env_config.apply_color_config(self.color);

        if let Some(path) = self.config_file.clone() {
            let file = MatchFileConfig::load(&path)?;
            self = self.merge_file(file);
        }

        self.validate()?;
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    include!("loader.test.rs");
}
