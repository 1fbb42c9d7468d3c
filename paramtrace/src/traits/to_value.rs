//! ToValue trait for converting Rust types to parameter values

use crate::table::TableValue;
use crate::value::{Value, ValueKind};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;

/// Trait for types that can be converted to a parameter value.
///
/// This is automatically implemented for common Rust types and can
/// be manually implemented for custom types (e.g., enums).
pub trait ToValue {
    /// The kind of value this type produces when present.
    ///
    /// Used as the declared column type when the type is projected into a
    /// table-valued parameter.
    const KIND: ValueKind;

    /// Convert this value to a parameter value.
    fn to_value(&self) -> Value;
}

macro_rules! impl_to_value {
    ($($ty:ty => $kind:ident, |$v:ident| $conv:expr;)*) => {
        $(
            impl ToValue for $ty {
                const KIND: ValueKind = ValueKind::$kind;

                fn to_value(&self) -> Value {
                    let $v = self;
                    $conv
                }
            }
        )*
    };
}

impl_to_value! {
    bool => Bool, |v| Value::Bool(*v);
    i8 => I32, |v| Value::I32((*v).into());
    i16 => I32, |v| Value::I32((*v).into());
    i32 => I32, |v| Value::I32(*v);
    i64 => I64, |v| Value::I64(*v);
    u8 => I32, |v| Value::I32((*v).into());
    u16 => I32, |v| Value::I32((*v).into());
    u32 => I64, |v| Value::I64((*v).into());
    f64 => F64, |v| Value::F64(*v);
    String => String, |v| Value::String(v.clone());
    str => String, |v| Value::String(v.to_string());
    NaiveDateTime => DateTime, |v| Value::DateTime(*v);
    NaiveDate => Date, |v| Value::Date(*v);
    NaiveTime => Time, |v| Value::Time(*v);
    Decimal => Decimal, |v| Value::Decimal(*v);
    serde_json::Value => Json, |v| Value::Json(v.clone());
    TableValue => Table, |v| Value::Table(v.clone());
}

// Implement for Option<T>
impl<T: ToValue> ToValue for Option<T> {
    const KIND: ValueKind = T::KIND;

    fn to_value(&self) -> Value {
        match self {
            Some(v) => v.to_value(),
            None => Value::Null,
        }
    }
}

// Key/value pairs, e.g. map entries
impl<K: ToValue, V: ToValue> ToValue for (K, V) {
    const KIND: ValueKind = ValueKind::Pair;

    fn to_value(&self) -> Value {
        Value::Pair(Box::new(self.0.to_value()), Box::new(self.1.to_value()))
    }
}

// Implement for references
impl<T: ToValue + ?Sized> ToValue for &T {
    const KIND: ValueKind = T::KIND;

    fn to_value(&self) -> Value {
        (**self).to_value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_keeps_inner_kind() {
        assert_eq!(<Option<String> as ToValue>::KIND, ValueKind::String);
        assert_eq!(None::<String>.to_value(), Value::Null);
    }

    #[test]
    fn test_str_reference() {
        let s: &str = "it's";
        assert_eq!(s.to_value(), Value::String("it's".into()));
        assert_eq!(<&str as ToValue>::KIND, ValueKind::String);
    }

    #[test]
    fn test_tuple_is_pair() {
        let v = ("a", 1i32).to_value();
        assert_eq!(v, Value::pair("a", 1));
    }
}
