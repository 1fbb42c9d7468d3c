//! CLI entry point for paramtrace

use anyhow::Result;
use clap::{Parser, Subcommand};
use paramtrace::LineEnding;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use paramtrace_cli::config::CliConfig;

#[derive(Parser)]
#[command(name = "paramtrace")]
#[command(about = "Render named SQL parameters as a DECLARE/INSERT script for debugging")]
#[command(version)]
struct Cli {
    /// Path to configuration file (TOML format)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Path to the parameter document (overrides config)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Stored procedure to EXEC after the declarations (overrides config and document)
    #[arg(short, long)]
    procedure: Option<String>,

    /// Line ending: lf or crlf (overrides config)
    #[arg(long)]
    line_ending: Option<LineEnding>,

    /// Rows per INSERT batch (overrides config)
    #[arg(long)]
    batch_size: Option<usize>,

    /// Wrap the script in --SQL / --END SQL marker lines
    #[arg(long)]
    markers: bool,

    /// Write the script to this file instead of stdout (overrides config)
    #[arg(short, long)]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the DECLARE/INSERT script (default)
    Render,
    /// Inspect parameters (show parsed values and inferred SQL types)
    Inspect,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration first (before logging, so we can use config.log_level)
    let mut config = if let Some(config_path) = &cli.config {
        CliConfig::from_file(config_path)?
    } else {
        CliConfig::load(None)?
    };

    // Initialize logging
    // Priority: RUST_LOG env var > config.log_level > default (debug for dev, info for release)
    let default_level = if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    };
    let log_level = config.log_level.as_deref().unwrap_or(default_level);

    // Logs go to stderr so stdout carries only the script
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    // Apply CLI overrides
    if let Some(input) = cli.input {
        config.input_file = input;
    }
    if let Some(procedure) = cli.procedure {
        config.procedure = Some(procedure);
    }
    if let Some(line_ending) = cli.line_ending {
        config.line_ending = line_ending;
    }
    if let Some(batch_size) = cli.batch_size {
        config.batch_size = batch_size;
    }
    if cli.markers {
        config.markers = true;
    }
    if let Some(output) = cli.output {
        config.output_file = Some(output);
    }

    // Validate configuration
    config.validate()?;

    let text = match cli.command {
        Some(Commands::Inspect) => paramtrace_cli::inspect(&config)?,
        Some(Commands::Render) | None => paramtrace_cli::render(&config)?,
    };

    match &config.output_file {
        Some(path) => {
            std::fs::write(path, &text)?;
            info!("Script written to {:?}", path);
        }
        None => print!("{}", text),
    }

    Ok(())
}
