//! Configuration settings for paramtrace-cli

use config::{Config, Environment, File};
use paramtrace::{FormatOptions, LineEnding};
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

use super::defaults;
use crate::error::{CliError, Result};

/// Main configuration struct for the CLI
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CliConfig {
    /// Path to the parameter document (JSON, or TOML with a `.toml` extension)
    #[serde(default)]
    pub input_file: PathBuf,

    /// Stored procedure to `EXEC` after the declarations
    /// (overrides the document's own `procedure`)
    #[serde(default)]
    pub procedure: Option<String>,

    /// Line terminator (lf, crlf)
    #[serde(default = "default_line_ending")]
    pub line_ending: LineEnding,

    /// Rows per `INSERT ... VALUES` batch
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,

    /// Wrap the script in `--SQL` / `--END SQL` marker lines
    #[serde(default = "default_markers")]
    pub markers: bool,

    /// Write the script to this file instead of stdout
    #[serde(default)]
    pub output_file: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    /// Can be overridden by RUST_LOG env var
    #[serde(default)]
    pub log_level: Option<String>,
}

// Default value functions for serde
fn default_line_ending() -> LineEnding {
    defaults::LINE_ENDING
}
fn default_batch_size() -> usize {
    defaults::BATCH_SIZE
}
fn default_markers() -> bool {
    defaults::MARKERS
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            input_file: PathBuf::new(),
            procedure: None,
            line_ending: default_line_ending(),
            batch_size: default_batch_size(),
            markers: default_markers(),
            output_file: None,
            log_level: None,
        }
    }
}

impl CliConfig {
    /// Create a default config reading the given parameter document
    pub fn default_with_input(input_file: PathBuf) -> Self {
        Self {
            input_file,
            ..Default::default()
        }
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: CliConfig = toml::from_str(&content).map_err(|e| {
            CliError::ConfigError(format!(
                "Failed to parse config file {}: {}",
                path.display(),
                e
            ))
        })?;
        Ok(config)
    }

    /// Load configuration using config-rs (file + environment variables)
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder();

        // Load from config file if specified
        if let Some(path) = config_path {
            builder = builder.add_source(File::from(path));
        } else {
            // Try default locations
            builder = builder.add_source(File::with_name(defaults::CONFIG_FILE_NAME).required(false));
        }

        // Override with environment variables (PARAMTRACE_*)
        builder = builder.add_source(Environment::with_prefix(defaults::ENV_PREFIX).try_parsing(true));

        let config: CliConfig = builder.build()?.try_deserialize()?;

        Ok(config)
    }

    /// Formatting options derived from this configuration
    pub fn format_options(&self) -> Result<FormatOptions> {
        let batch_size = NonZeroUsize::new(self.batch_size)
            .ok_or_else(|| CliError::ValidationError("batch_size must be greater than 0".into()))?;
        Ok(FormatOptions::default()
            .line_ending(self.line_ending)
            .batch_size(batch_size))
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.input_file.as_os_str().is_empty() {
            return Err(CliError::ValidationError("input_file is required".into()));
        }

        if !self.input_file.exists() {
            return Err(CliError::ValidationError(format!(
                "Input file not found: {}",
                self.input_file.display()
            )));
        }

        self.format_options()?;

        Ok(())
    }
}
