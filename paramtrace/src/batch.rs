//! Batched `INSERT` emission for table-valued parameters

use tracing::trace;

use crate::declare::clean_name;
use crate::literal::format_scalar;
use crate::options::FormatOptions;
use crate::table::TableValue;
use crate::value::Value;

/// Renders the rows of a table value as multi-row `INSERT` statements into a
/// table variable.
///
/// Rows are grouped into batches of at most `batch_size` rows, each under its
/// own `INSERT INTO @name VALUES` header, to stay below the row limit of a
/// single `VALUES` list.
///
/// # Example
///
/// ```ignore
/// use paramtrace::{BatchInsert, FormatOptions};
///
/// let sql = BatchInsert::new(&table, "ids").render(&FormatOptions::default());
/// // INSERT INTO @ids VALUES
/// // (1),(2),(3)
/// ```
pub struct BatchInsert<'a> {
    table: &'a TableValue,
    variable: &'a str,
}

impl<'a> BatchInsert<'a> {
    /// Create a batch insert for the given table into the given variable.
    ///
    /// A leading `@` on the variable name is optional.
    pub fn new(table: &'a TableValue, variable: &'a str) -> Self {
        Self {
            table,
            variable: clean_name(variable),
        }
    }

    /// Render the insert block.
    ///
    /// Returns an empty string for a table without rows. Otherwise every line,
    /// including the last, ends with the configured line terminator.
    pub fn render(&self, options: &FormatOptions) -> String {
        if self.table.is_empty() {
            return String::new();
        }

        let newline = options.newline();
        let header = format!("INSERT INTO @{} VALUES{}", self.variable, newline);

        let mut sql = String::new();
        for (batch, rows) in self.table.rows().chunks(options.batch_size.get()).enumerate() {
            trace!(variable = self.variable, batch, rows = rows.len(), "emitting insert batch");

            sql.push_str(&header);
            let values = rows
                .iter()
                .map(|row| format_row(row))
                .collect::<Vec<_>>()
                .join(",");
            sql.push_str(&values);
            sql.push_str(newline);
        }
        sql
    }
}

/// Render one row as `(v1,v2,...)`.
fn format_row(row: &[Value]) -> String {
    let cells = row.iter().map(format_scalar).collect::<Vec<_>>().join(",");
    format!("({})", cells)
}

/// Render the rows of `table` as batched inserts into `@variable_name`.
pub fn format_table_rows(table: &TableValue, variable_name: &str, options: &FormatOptions) -> String {
    BatchInsert::new(table, variable_name).render(options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::LineEnding;
    use crate::table::{AsTableParameter, Column};
    use crate::value::ValueKind;
    use std::num::NonZeroUsize;

    fn int_table(n: i32) -> TableValue {
        (1..=n).as_table_parameter("dbo.IntList", None).unwrap()
    }

    #[test]
    fn test_empty_table_renders_nothing() {
        let table = TableValue::new("dbo.IntList", vec![Column::new("Id", ValueKind::I32)]);
        assert_eq!(format_table_rows(&table, "ids", &FormatOptions::default()), "");
    }

    #[test]
    fn test_single_batch() {
        let sql = format_table_rows(&int_table(3), "@ids", &FormatOptions::default());
        assert_eq!(sql, "INSERT INTO @ids VALUES\n(1),(2),(3)\n");
    }

    #[test]
    fn test_exactly_one_full_batch_has_one_header() {
        let sql = format_table_rows(&int_table(1000), "ids", &FormatOptions::default());
        assert_eq!(sql.matches("INSERT INTO @ids VALUES").count(), 1);
        assert!(sql.ends_with(",(1000)\n"));
    }

    #[test]
    fn test_header_reemitted_after_thousandth_row() {
        let sql = format_table_rows(&int_table(1001), "ids", &FormatOptions::default());
        let lines: Vec<&str> = sql.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "INSERT INTO @ids VALUES");
        assert!(lines[1].starts_with("(1),(2),"));
        assert!(lines[1].ends_with(",(999),(1000)"));
        assert_eq!(lines[2], "INSERT INTO @ids VALUES");
        assert_eq!(lines[3], "(1001)");
    }

    #[test]
    fn test_custom_batch_size_and_line_ending() {
        let options = FormatOptions::default()
            .batch_size(NonZeroUsize::new(2).unwrap())
            .line_ending(LineEnding::CrLf);
        let sql = format_table_rows(&int_table(3), "ids", &options);
        assert_eq!(
            sql,
            "INSERT INTO @ids VALUES\r\n(1),(2)\r\nINSERT INTO @ids VALUES\r\n(3)\r\n"
        );
    }

    #[test]
    fn test_null_and_quoted_cells() {
        let mut table = TableValue::new("dbo.People", vec![])
            .with_column("name", ValueKind::String)
            .with_column("age", ValueKind::I32);
        table.push_row(vec![Value::from("O'Hara"), Value::Null]).unwrap();
        table.push_row(vec![Value::Null, Value::I32(40)]).unwrap();
        let sql = format_table_rows(&table, "people", &FormatOptions::default());
        assert_eq!(sql, "INSERT INTO @people VALUES\n('O''Hara',NULL),(NULL,40)\n");
    }
}
