//! TableRow trait for projecting values into table-valued parameters

use crate::traits::ToValue;
use crate::value::{Value, ValueKind};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;

/// Column name given to single-column projections of plain values.
pub const DEFAULT_COLUMN_NAME: &str = "NONAME";

/// Trait for types that can be projected into one row of a table-valued
/// parameter.
///
/// Implemented for scalar types (one column), for `(K, V)` tuples (one pair
/// column, so map entries project naturally) and via `#[derive(TableRow)]`
/// for structs (one column per field).
///
/// # Manual Implementation
///
/// ```ignore
/// use paramtrace::{TableRow, ToValue, Value, ValueKind};
///
/// pub struct Line {
///     pub sku: String,
///     pub qty: i32,
/// }
///
/// impl TableRow for Line {
///     fn column_names() -> &'static [&'static str] {
///         &["sku", "qty"]
///     }
///
///     fn column_kinds() -> Vec<ValueKind> {
///         vec![String::KIND, i32::KIND]
///     }
///
///     fn row_values(&self) -> Vec<Value> {
///         vec![self.sku.to_value(), self.qty.to_value()]
///     }
/// }
/// ```
pub trait TableRow {
    /// Whether this is a plain value projected into a single unnamed column.
    ///
    /// The column of a scalar row takes the first caller-supplied column name
    /// instead of having to match one.
    const SCALAR: bool = false;

    /// Column names exposed by this row type, in declaration order.
    fn column_names() -> &'static [&'static str];

    /// Declared kind of each column, aligned with [`TableRow::column_names`].
    fn column_kinds() -> Vec<ValueKind>;

    /// The values of this row, aligned with [`TableRow::column_names`].
    fn row_values(&self) -> Vec<Value>;
}

macro_rules! impl_scalar_row {
    ($($ty:ty),* $(,)?) => {
        $(
            impl TableRow for $ty {
                const SCALAR: bool = true;

                fn column_names() -> &'static [&'static str] {
                    &[DEFAULT_COLUMN_NAME]
                }

                fn column_kinds() -> Vec<ValueKind> {
                    vec![<$ty as ToValue>::KIND]
                }

                fn row_values(&self) -> Vec<Value> {
                    vec![self.to_value()]
                }
            }
        )*
    };
}

impl_scalar_row!(
    bool,
    i8,
    i16,
    i32,
    i64,
    u8,
    u16,
    u32,
    f64,
    String,
    str,
    NaiveDateTime,
    NaiveDate,
    NaiveTime,
    Decimal,
    serde_json::Value,
);

impl<T: ToValue> TableRow for Option<T> {
    const SCALAR: bool = true;

    fn column_names() -> &'static [&'static str] {
        &[DEFAULT_COLUMN_NAME]
    }

    fn column_kinds() -> Vec<ValueKind> {
        vec![T::KIND]
    }

    fn row_values(&self) -> Vec<Value> {
        vec![self.to_value()]
    }
}

impl<K: ToValue, V: ToValue> TableRow for (K, V) {
    const SCALAR: bool = true;

    fn column_names() -> &'static [&'static str] {
        &[DEFAULT_COLUMN_NAME]
    }

    fn column_kinds() -> Vec<ValueKind> {
        vec![ValueKind::Pair]
    }

    fn row_values(&self) -> Vec<Value> {
        vec![self.to_value()]
    }
}

impl<T: TableRow + ?Sized> TableRow for &T {
    const SCALAR: bool = T::SCALAR;

    fn column_names() -> &'static [&'static str] {
        T::column_names()
    }

    fn column_kinds() -> Vec<ValueKind> {
        T::column_kinds()
    }

    fn row_values(&self) -> Vec<Value> {
        (**self).row_values()
    }
}
