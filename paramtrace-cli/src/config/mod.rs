//! Configuration for paramtrace-cli

pub mod defaults;
mod settings;

pub use settings::CliConfig;
