//! `DECLARE` statement emission

use crate::batch::format_table_rows;
use crate::literal::{format_scalar, has_assignment, sql_type};
use crate::options::FormatOptions;
use crate::value::Value;

/// Strip one leading parameter prefix (`@`, `:` or `?`) from a name.
pub fn clean_name(name: &str) -> &str {
    let name = name.trim();
    name.strip_prefix(['@', ':', '?']).unwrap_or(name)
}

/// Render the declaration of one parameter.
///
/// Produces `DECLARE @<name> <type>[ = <literal>]` terminated by the configured
/// line ending. Nulls are declared without an assignment. Table values are
/// declared with their table type and followed by their batched inserts.
pub fn format_declaration(name: &str, value: &Value, options: &FormatOptions) -> String {
    let name = clean_name(name);
    let mut sql = format!("DECLARE @{} {}", name, sql_type(value));
    if has_assignment(value) {
        sql.push_str(" = ");
        sql.push_str(&format_scalar(value));
    }
    sql.push_str(options.newline());

    if let Value::Table(table) = value {
        sql.push_str(&format_table_rows(table, name, options));
    }
    sql
}
