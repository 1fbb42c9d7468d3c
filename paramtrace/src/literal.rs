//! Scalar literal formatting
//!
//! Maps a [`Value`] to the SQL type it is declared with and to the literal text
//! assigned to it. Numbers are always rendered locale-free with a `.` decimal
//! separator and without exponent notation.

use std::fmt;

use crate::value::Value;

/// Literal used for SQL NULL.
pub const NULL_LITERAL: &str = "NULL";

const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";
const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M:%S%.3f";

/// SQL type a parameter is declared with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SqlType {
    /// `NVARCHAR(MAX)`, used for strings, nulls and every unrecognized kind
    NVarCharMax,
    /// `DATETIME`
    DateTime,
    /// `BIT`
    Bit,
    /// `INT`
    Int,
    /// `DECIMAL(precision,scale)` inferred from the rendered number
    Decimal { precision: usize, scale: usize },
    /// User-defined table type, e.g. `dbo.IntList`
    Table(String),
}

impl fmt::Display for SqlType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SqlType::NVarCharMax => f.write_str("NVARCHAR(MAX)"),
            SqlType::DateTime => f.write_str("DATETIME"),
            SqlType::Bit => f.write_str("BIT"),
            SqlType::Int => f.write_str("INT"),
            SqlType::Decimal { precision, scale } => write!(f, "DECIMAL({},{})", precision, scale),
            SqlType::Table(name) => f.write_str(name),
        }
    }
}

/// Render a value as a SQL literal.
///
/// `Null` renders as `NULL`; pairs render as their key and value literals
/// separated by a comma. Kinds without a dedicated rendering become a quoted
/// string with embedded quotes doubled.
pub fn format_scalar(value: &Value) -> String {
    match value {
        Value::Null => NULL_LITERAL.to_string(),
        Value::DateTime(dt) => format!("'{}'", dt.format(DATETIME_FORMAT)),
        Value::Bool(b) => (if *b { "1" } else { "0" }).to_string(),
        Value::I32(n) => n.to_string(),
        Value::Decimal(d) => d.to_string(),
        // f64's Display is the shortest round-trip form and never uses an exponent
        Value::F64(f) if f.is_finite() => f.to_string(),
        Value::F64(f) => quote_string(&f.to_string()),
        Value::Pair(key, value) => format!("{},{}", format_scalar(key), format_scalar(value)),
        Value::I64(n) => quote_string(&n.to_string()),
        Value::String(s) => quote_string(s),
        Value::Date(d) => quote_string(&d.format(DATE_FORMAT).to_string()),
        Value::Time(t) => quote_string(&t.format(TIME_FORMAT).to_string()),
        Value::Json(j) => quote_string(&j.to_string()),
        Value::Table(t) => quote_string(t.type_name()),
    }
}

/// The SQL type a value is declared with.
pub fn sql_type(value: &Value) -> SqlType {
    match value {
        Value::DateTime(_) => SqlType::DateTime,
        Value::Bool(_) => SqlType::Bit,
        Value::I32(_) => SqlType::Int,
        Value::Decimal(_) => decimal_type(&format_scalar(value)),
        Value::F64(f) if f.is_finite() => decimal_type(&format_scalar(value)),
        Value::Table(t) => SqlType::Table(t.type_name().to_string()),
        _ => SqlType::NVarCharMax,
    }
}

/// Whether a declaration of this value carries an `= <literal>` assignment.
///
/// Nulls are left unassigned and tables are filled by `INSERT` statements.
pub fn has_assignment(value: &Value) -> bool {
    !matches!(value, Value::Null | Value::Table(_))
}

/// Wrap text in single quotes, doubling embedded quotes.
pub fn quote_string(text: &str) -> String {
    format!("'{}'", text.replace('\'', "''"))
}

/// Infer `DECIMAL(p,s)` from a rendered number.
///
/// Precision counts every digit (sign and decimal point excluded), scale counts
/// the digits after the decimal point.
fn decimal_type(literal: &str) -> SqlType {
    let precision = literal.bytes().filter(u8::is_ascii_digit).count();
    let scale = literal
        .split_once('.')
        .map(|(_, fraction)| fraction.bytes().filter(u8::is_ascii_digit).count())
        .unwrap_or(0);
    SqlType::Decimal { precision, scale }
}
