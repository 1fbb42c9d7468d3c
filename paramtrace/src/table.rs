//! Table-valued parameters

use tracing::debug;

use crate::error::{Error, Result};
use crate::traits::TableRow;
use crate::value::{Value, ValueKind};

/// A named, typed column of a table-valued parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub name: String,
    pub kind: ValueKind,
}

impl Column {
    pub fn new(name: impl Into<String>, kind: ValueKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }
}

/// A table-valued parameter: a user-defined table type name, its columns and
/// the rows to insert.
///
/// Every row holds exactly one value per column. The runtime kind of a cell is
/// not checked against its column; formatting is driven by the cell itself.
#[derive(Debug, Clone, PartialEq)]
pub struct TableValue {
    type_name: String,
    columns: Vec<Column>,
    rows: Vec<Vec<Value>>,
}

impl TableValue {
    /// Create an empty table of the given type.
    pub fn new(type_name: impl Into<String>, columns: Vec<Column>) -> Self {
        Self {
            type_name: type_name.into(),
            columns,
            rows: Vec::new(),
        }
    }

    /// Add a column.
    pub fn with_column(mut self, name: impl Into<String>, kind: ValueKind) -> Self {
        self.columns.push(Column::new(name, kind));
        self
    }

    /// Append a row.
    ///
    /// Returns [`Error::RowArity`] unless the row has one value per column.
    pub fn push_row(&mut self, row: Vec<Value>) -> Result<()> {
        if row.len() != self.columns.len() {
            return Err(Error::RowArity {
                expected: self.columns.len(),
                actual: row.len(),
            });
        }
        self.rows.push(row);
        Ok(())
    }

    /// Project rows into a table value.
    ///
    /// Single-column row types (plain values, pairs, one-field structs) need no
    /// column list; for plain values the first entry of `ordered_columns`, if
    /// any, names the column. Row types with several columns require
    /// `ordered_columns`, which selects the columns and fixes their order to
    /// match the table type.
    pub fn from_rows<I, R>(
        rows: I,
        type_name: impl Into<String>,
        ordered_columns: Option<&[&str]>,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = R>,
        R: TableRow,
    {
        let names = R::column_names();
        let kinds = R::column_kinds();
        let kind_at = |i: usize| kinds.get(i).copied().unwrap_or(ValueKind::Null);

        let (columns, indices): (Vec<Column>, Vec<usize>) = match ordered_columns {
            Some(ordered) if R::SCALAR => {
                let name = ordered.first().copied().or_else(|| names.first().copied());
                let columns = name.map(|n| Column::new(n, kind_at(0))).into_iter().collect();
                (columns, vec![0])
            }
            Some(ordered) => ordered
                .iter()
                .map(|wanted| {
                    names
                        .iter()
                        .position(|n| n == wanted)
                        .map(|i| (Column::new(*wanted, kind_at(i)), i))
                        .ok_or_else(|| Error::UnknownColumn(wanted.to_string()))
                })
                .collect::<Result<Vec<_>>>()?
                .into_iter()
                .unzip(),
            None if names.len() > 1 => {
                return Err(Error::MissingColumnOrder {
                    available: names.iter().map(|n| n.to_string()).collect(),
                });
            }
            None => names
                .iter()
                .enumerate()
                .map(|(i, n)| (Column::new(*n, kind_at(i)), i))
                .unzip(),
        };

        let mut table = TableValue::new(type_name, columns);
        for row in rows {
            let values = row.row_values();
            if values.len() != names.len() {
                return Err(Error::RowArity {
                    expected: names.len(),
                    actual: values.len(),
                });
            }
            let projected = indices
                .iter()
                .map(|&i| values.get(i).cloned().unwrap_or(Value::Null))
                .collect();
            table.push_row(projected)?;
        }

        debug!(
            type_name = %table.type_name,
            columns = table.columns.len(),
            rows = table.rows.len(),
            "projected table-valued parameter"
        );
        Ok(table)
    }

    /// The user-defined table type name, e.g. `dbo.IntList`.
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<Value>] {
        &self.rows
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Extension trait turning any collection of rows into a table value.
///
/// # Example
///
/// ```ignore
/// use paramtrace::{AsTableParameter, Parameters};
///
/// let ids = vec![1, 2, 3];
/// let mut params = Parameters::new();
/// params.add_table("@ids", ids.as_table_parameter("dbo.IntList", None)?)?;
/// ```
pub trait AsTableParameter: IntoIterator + Sized {
    /// See [`TableValue::from_rows`].
    fn as_table_parameter(
        self,
        type_name: impl Into<String>,
        ordered_columns: Option<&[&str]>,
    ) -> Result<TableValue>
    where
        Self::Item: TableRow,
    {
        TableValue::from_rows(self, type_name, ordered_columns)
    }
}

impl<I: IntoIterator> AsTableParameter for I {}
