//! Hermetic command environment for E2E tests
//!
//! Parses real argument lists, resolves configuration without touching the
//! process environment, and captures command output as plain text.

use affimatch_lib::application::{CliConfig, EnvironmentConfig, execute_command_with_display};
use affimatch_lib::catalog::ProductRecord;
use affimatch_lib::display::StatusDisplay;
use affimatch_lib::test_utils::catalog_json;
use anyhow::{Context, Result};
use std::path::PathBuf;
use tempfile::TempDir;

/// Temporary working directory with helpers to run affimatch commands
pub struct TestEnvironment {
    dir: TempDir,
    env_config: EnvironmentConfig,
}

impl TestEnvironment {
    pub fn new() -> Result<Self> {
        Ok(Self {
            dir: TempDir::new().context("Failed to create test directory")?,
            env_config: EnvironmentConfig::default(),
        })
    }

    /// Simulate color-related environment variables
    pub fn with_env_config(mut self, env_config: EnvironmentConfig) -> Self {
        self.env_config = env_config;
        self
    }

    pub fn path(&self) -> PathBuf {
        self.dir.path().to_path_buf()
    }

    /// Write products as a JSON catalog and return its path
    pub fn write_catalog(&self, name: &str, products: &[ProductRecord]) -> Result<PathBuf> {
        self.write_file(name, &catalog_json(products)?)
    }

    pub fn write_file(&self, name: &str, content: &str) -> Result<PathBuf> {
        let path = self.dir.path().join(name);
        std::fs::write(&path, content)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(path)
    }

    /// Run `affimatch <args>` and return everything it printed
    pub fn run<I, S>(&self, args: I) -> Result<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let argv: Vec<String> = std::iter::once("affimatch".to_string())
            .chain(args.into_iter().map(|arg| arg.as_ref().to_string()))
            .collect();

        let cli = CliConfig::try_parse_from(&argv)?;
        let config = cli.app_config.resolve(&self.env_config)?;
        let command = cli.command.context("No command given")?;

        let mut display = StatusDisplay::new(Vec::new(), false);
        execute_command_with_display(command, &config, &mut display)?;
        Ok(String::from_utf8(display.into_inner())?)
    }

    /// Run and parse the output as JSON
    pub fn run_json<I, S>(&self, args: I) -> Result<serde_json::Value>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let output = self.run(args)?;
        serde_json::from_str(&output).context("Command output is not valid JSON")
    }
}
