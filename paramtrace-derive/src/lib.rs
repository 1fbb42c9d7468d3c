//! Derive macros for paramtrace
//!
//! This crate provides the following derive macros:
//! - `ToParams` - Turns struct fields into named query parameters
//! - `TableRow` - Projects a struct into one row of a table-valued parameter
//!
//! These macros are re-exported from the `paramtrace` crate, so users typically
//! don't need to depend on this crate directly.

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

mod attrs;
mod table_row;
mod to_params;

/// Derive macro for turning struct fields into named query parameters.
///
/// # Attributes
///
/// - `#[paramtrace(rename = "name")]` - Use a different parameter name for this field
/// - `#[paramtrace(skip)]` - Leave this field out
///
/// # Example
///
/// ```ignore
/// use paramtrace::ToParams;
///
/// #[derive(ToParams)]
/// pub struct FindUser {
///     #[paramtrace(rename = "UserId")]
///     pub id: i32,
///     pub email: Option<String>,
/// }
/// ```
#[proc_macro_derive(ToParams, attributes(paramtrace))]
pub fn derive_to_params(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    to_params::derive_to_params_impl(input)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}

/// Derive macro for projecting a struct into a table-valued parameter row.
///
/// Each field becomes a column whose declared kind is taken from the field
/// type. The column order is the field order; callers pick and reorder
/// columns with the ordered column list passed to `as_table_parameter`.
///
/// # Attributes
///
/// - `#[paramtrace(rename = "ColumnName")]` - Use a different column name for this field
/// - `#[paramtrace(skip)]` - Leave this field out of the row
///
/// # Example
///
/// ```ignore
/// use paramtrace::TableRow;
///
/// #[derive(TableRow)]
/// pub struct OrderLine {
///     #[paramtrace(rename = "Sku")]
///     pub sku: String,
///     #[paramtrace(rename = "Quantity")]
///     pub quantity: i32,
/// }
/// ```
#[proc_macro_derive(TableRow, attributes(paramtrace))]
pub fn derive_table_row(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    table_row::derive_table_row_impl(input)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}
