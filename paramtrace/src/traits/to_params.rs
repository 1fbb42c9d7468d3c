//! ToParams trait for converting structs to named parameters

use crate::value::Value;

/// Trait for types whose fields become named query parameters.
///
/// This trait is typically implemented via the `#[derive(ToParams)]` macro,
/// which generates the implementation automatically based on struct fields.
/// Fields marked with `#[paramtrace(skip)]` are left out.
pub trait ToParams {
    /// Parameter names, in field order.
    fn param_names() -> &'static [&'static str];

    /// Parameter values, aligned with [`ToParams::param_names`].
    fn param_values(&self) -> Vec<Value>;
}
