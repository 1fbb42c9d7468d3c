//! paramtrace-cli: render DECLARE/INSERT debugging scripts from parameter documents
//!
//! This crate provides both the `paramtrace` binary and a library for turning a
//! typed parameter document (JSON or TOML) into the T-SQL script that declares
//! and fills every parameter.
//!
//! # CLI Usage
//!
//! ```bash
//! paramtrace --input params.json --procedure dbo.FindOrders render
//! paramtrace --input params.toml inspect
//! ```
//!
//! # Configuration
//!
//! Options can also come from a `paramtrace.toml` file in the working
//! directory (or `--config FILE`) and from `PARAMTRACE_*` environment
//! variables:
//!
//! ```toml
//! input_file = "params.json"
//! line_ending = "crlf"
//! batch_size = 500
//! markers = true
//! ```

pub mod config;
pub mod document;
pub mod error;

use std::sync::Arc;

use paramtrace::{sql_type, ParameterSource, Tracer, Value, WriterSink};
use tracing::info;

pub use config::CliConfig;
pub use document::ParameterDocument;
pub use error::{CliError, Result};

/// Render the script for the configured parameter document
pub fn render(config: &CliConfig) -> Result<String> {
    let options = config.format_options()?;
    let document = ParameterDocument::from_file(&config.input_file)?;
    let params = document.to_parameters()?;
    let procedure = config.procedure.as_deref().or(document.procedure.as_deref());
    info!(
        "Rendering {} parameters from {:?}",
        params.len(),
        config.input_file
    );

    if !config.markers {
        return Ok(params.to_script(procedure, &options));
    }

    let sink = Arc::new(WriterSink::new(Vec::new()));
    Tracer::from_arc(sink.clone())
        .with_options(options)
        .write_query(Some(&params), procedure);
    let buffer = Arc::try_unwrap(sink)
        .map(WriterSink::into_inner)
        .unwrap_or_default();
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

/// Describe each parameter of the configured document with its inferred SQL
/// type (for debugging)
pub fn inspect(config: &CliConfig) -> Result<String> {
    let document = ParameterDocument::from_file(&config.input_file)?;
    let params = document.to_parameters()?;

    let mut out = format!("Parsed {} parameters:\n\n", params.len());
    for name in params.parameter_names() {
        let Some(value) = params.get(name) else {
            continue;
        };
        out.push_str(&format!("@{} {} ({})\n", name, sql_type(value), value.kind()));
        if let Value::Table(table) = value {
            for column in table.columns() {
                out.push_str(&format!("    - {} {}\n", column.name, column.kind));
            }
            out.push_str(&format!("    {} rows\n", table.len()));
        }
    }
    if let Some(procedure) = config.procedure.as_deref().or(document.procedure.as_deref()) {
        out.push_str(&format!("\nProcedure: {}\n", procedure));
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn document_file(suffix: &str, content: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    const DOCUMENT: &str = r#"{
        "procedure": "dbo.Ping",
        "parameters": [
            { "name": "@ids", "type": "table", "type_name": "dbo.IntList",
              "columns": [{ "name": "Id", "type": "int" }], "rows": [[1], [2]] }
        ]
    }"#;

    #[test]
    fn test_render_with_markers() {
        let file = document_file(".json", DOCUMENT);
        let config = CliConfig {
            markers: true,
            ..CliConfig::default_with_input(file.path().to_path_buf())
        };
        assert_eq!(
            render(&config).unwrap(),
            "--SQL\nDECLARE @ids dbo.IntList\nINSERT INTO @ids VALUES\n(1),(2)\nEXEC dbo.Ping\n@ids = @ids\n--END SQL\n"
        );
    }

    #[test]
    fn test_procedure_override() {
        let file = document_file(".json", DOCUMENT);
        let config = CliConfig {
            procedure: Some("dbo.Other".into()),
            batch_size: 1,
            ..CliConfig::default_with_input(file.path().to_path_buf())
        };
        assert_eq!(
            render(&config).unwrap(),
            "DECLARE @ids dbo.IntList\nINSERT INTO @ids VALUES\n(1)\nINSERT INTO @ids VALUES\n(2)\nEXEC dbo.Other\n@ids = @ids\n"
        );
    }

    #[test]
    fn test_inspect_toml() {
        let file = document_file(
            ".toml",
            r#"
            [[parameters]]
            name = "@when"
            type = "date"
            value = "2024-02-29"
            "#,
        );
        let config = CliConfig::default_with_input(file.path().to_path_buf());
        assert_eq!(
            inspect(&config).unwrap(),
            "Parsed 1 parameters:\n\n@when NVARCHAR(MAX) (date)\n"
        );
    }
}
