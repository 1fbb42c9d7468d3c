//! paramtrace - SQL parameter tracing
//!
//! Renders a set of named query parameters as a T-SQL script of `DECLARE`
//! statements (and `INSERT` statements for table-valued parameters), ready to
//! paste into a SQL tool to rerun a parameterized query with the exact values
//! it was given.
//!
//! # Features
//!
//! - **Closed value model**: `Value` enum with a fixed SQL rendering per kind
//! - **Derive Macros**: `#[derive(ToParams, TableRow)]` map structs to
//!   parameters and to table-valued parameter rows
//! - **Batched inserts**: table rows are emitted in batches of 1000 per
//!   `INSERT ... VALUES` header
//! - **Injected sinks**: `Tracer` emits scripts to `tracing`, a writer, or nowhere
//!
//! # Example
//!
//! ```ignore
//! use paramtrace::{AsTableParameter, FormatOptions, Parameters};
//!
//! let mut params = Parameters::new();
//! params.add("@id", 42)?;
//! params.add_table("@tags", vec!["a", "b"].as_table_parameter("dbo.TagList", None)?)?;
//!
//! print!("{}", params.to_script(Some("dbo.FindItems"), &FormatOptions::default()));
//! // DECLARE @id INT = 42
//! // DECLARE @tags dbo.TagList
//! // INSERT INTO @tags VALUES
//! // ('a'),('b')
//! // EXEC dbo.FindItems
//! // @id = @id,
//! // @tags = @tags
//! ```

pub mod batch;
pub mod compose;
pub mod declare;
pub mod error;
pub mod literal;
pub mod options;
pub mod params;
pub mod sink;
pub mod table;
pub mod traits;
pub mod value;

// Re-export the derive macros
pub use paramtrace_derive::{TableRow, ToParams};

// Re-export main types
pub use batch::{format_table_rows, BatchInsert};
pub use compose::compose;
pub use declare::format_declaration;
pub use error::{Error, Result};
pub use literal::{format_scalar, sql_type, SqlType};
pub use options::{FormatOptions, LineEnding, DEFAULT_BATCH_SIZE};
pub use params::{ParameterSource, Parameters};
pub use sink::{NullSink, TraceSink, Tracer, TracingSink, WriterSink};
pub use table::{AsTableParameter, Column, TableValue};
pub use traits::{TableRow, ToParams, ToValue};
pub use value::{Value, ValueKind};
