//! Error types for paramtrace

use thiserror::Error;

/// Result type alias for paramtrace operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while building parameters and table values.
///
/// Formatting itself never fails: values without a dedicated rendering fall
/// back to a quoted string literal.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Row type exposes several columns but no column order was supplied
    #[error(
        "Ordered list of column names must be provided when a table parameter has more than one column (available: {})",
        .available.join(", ")
    )]
    MissingColumnOrder { available: Vec<String> },

    /// Requested column is not exposed by the row type
    #[error("Unknown column: {0}")]
    UnknownColumn(String),

    /// Row does not have one value per column
    #[error("Row arity mismatch: expected {expected} values, got {actual}")]
    RowArity { expected: usize, actual: usize },

    /// Line ending is neither `lf` nor `crlf`
    #[error("Invalid line ending: {0} (expected lf or crlf)")]
    InvalidLineEnding(String),

    /// Parameter name is empty once the `@` prefix is removed
    #[error("Parameter name must not be empty")]
    EmptyName,
}
