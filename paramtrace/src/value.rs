//! Dynamic Value type for parameter values

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::table::TableValue;

/// A dynamic parameter value.
///
/// This is a closed set: the literal formatter matches on it exhaustively, so
/// every kind has a well-defined SQL rendering.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// SQL NULL value
    Null,
    /// Boolean value
    Bool(bool),
    /// Signed 32-bit integer
    I32(i32),
    /// Signed 64-bit integer
    I64(i64),
    /// 64-bit floating point
    F64(f64),
    /// Fixed-point decimal
    Decimal(Decimal),
    /// String/text value
    String(String),
    /// DateTime value
    DateTime(NaiveDateTime),
    /// Date value
    Date(NaiveDate),
    /// Time value
    Time(NaiveTime),
    /// JSON value
    Json(serde_json::Value),
    /// Key/value pair, rendered as two adjacent literals
    Pair(Box<Value>, Box<Value>),
    /// Table-valued parameter
    Table(TableValue),
}

/// The kind of a [`Value`] without its payload.
///
/// Used as the declared type of a table column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    Null,
    Bool,
    I32,
    I64,
    F64,
    Decimal,
    String,
    DateTime,
    Date,
    Time,
    Json,
    Pair,
    Table,
}

impl Value {
    /// Check if this value is null
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Check if this value is a table-valued parameter
    pub fn is_table(&self) -> bool {
        matches!(self, Value::Table(_))
    }

    /// Build a key/value pair
    pub fn pair(key: impl Into<Value>, value: impl Into<Value>) -> Self {
        Value::Pair(Box::new(key.into()), Box::new(value.into()))
    }

    /// The kind of this value
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Bool,
            Value::I32(_) => ValueKind::I32,
            Value::I64(_) => ValueKind::I64,
            Value::F64(_) => ValueKind::F64,
            Value::Decimal(_) => ValueKind::Decimal,
            Value::String(_) => ValueKind::String,
            Value::DateTime(_) => ValueKind::DateTime,
            Value::Date(_) => ValueKind::Date,
            Value::Time(_) => ValueKind::Time,
            Value::Json(_) => ValueKind::Json,
            Value::Pair(_, _) => ValueKind::Pair,
            Value::Table(_) => ValueKind::Table,
        }
    }

    /// Get the type name for diagnostics
    pub fn type_name(&self) -> &'static str {
        self.kind().as_str()
    }
}

impl ValueKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ValueKind::Null => "null",
            ValueKind::Bool => "bool",
            ValueKind::I32 => "i32",
            ValueKind::I64 => "i64",
            ValueKind::F64 => "f64",
            ValueKind::Decimal => "decimal",
            ValueKind::String => "string",
            ValueKind::DateTime => "datetime",
            ValueKind::Date => "date",
            ValueKind::Time => "time",
            ValueKind::Json => "json",
            ValueKind::Pair => "pair",
            ValueKind::Table => "table",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Implement From for common types
impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i8> for Value {
    fn from(v: i8) -> Self {
        Value::I32(v.into())
    }
}

impl From<i16> for Value {
    fn from(v: i16) -> Self {
        Value::I32(v.into())
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::I32(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::I64(v)
    }
}

impl From<u8> for Value {
    fn from(v: u8) -> Self {
        Value::I32(v.into())
    }
}

impl From<u16> for Value {
    fn from(v: u16) -> Self {
        Value::I32(v.into())
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Value::I64(v.into())
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::F64(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<NaiveDateTime> for Value {
    fn from(v: NaiveDateTime) -> Self {
        Value::DateTime(v)
    }
}

impl From<NaiveDate> for Value {
    fn from(v: NaiveDate) -> Self {
        Value::Date(v)
    }
}

impl From<NaiveTime> for Value {
    fn from(v: NaiveTime) -> Self {
        Value::Time(v)
    }
}

impl From<Decimal> for Value {
    fn from(v: Decimal) -> Self {
        Value::Decimal(v)
    }
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        Value::Json(v)
    }
}

impl From<TableValue> for Value {
    fn from(v: TableValue) -> Self {
        Value::Table(v)
    }
}

// Implement From for Option<T> where T: Into<Value>
impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(v) => v.into(),
            None => Value::Null,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_integers_widen_to_i32() {
        assert_eq!(Value::from(7u8), Value::I32(7));
        assert_eq!(Value::from(-7i16), Value::I32(-7));
        assert_eq!(Value::from(u32::MAX), Value::I64(4_294_967_295));
    }

    #[test]
    fn test_option_none_is_null() {
        let v: Value = Option::<i32>::None.into();
        assert!(v.is_null());
        assert_eq!(v.kind(), ValueKind::Null);
    }

    #[test]
    fn test_pair_kind() {
        let v = Value::pair("a", 1);
        assert_eq!(v.type_name(), "pair");
    }
}
