//! TableRow derive macro implementation

use proc_macro2::TokenStream;
use quote::quote;
use syn::{DeriveInput, Result};

use crate::attrs::included_fields;

pub fn derive_table_row_impl(input: DeriveInput) -> Result<TokenStream> {
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let fields = included_fields(&input)?;

    let column_names: Vec<&str> = fields.iter().map(|c| c.name.as_str()).collect();

    // Declared kind of each column comes from the field type
    let column_kinds: Vec<TokenStream> = fields
        .iter()
        .map(|config| {
            let ty = &config.ty;
            quote! {
                <#ty as paramtrace::ToValue>::KIND
            }
        })
        .collect();

    let row_values: Vec<TokenStream> = fields
        .iter()
        .map(|config| {
            let field_ident = &config.ident;
            quote! {
                paramtrace::ToValue::to_value(&self.#field_ident)
            }
        })
        .collect();

    let expanded = quote! {
        impl #impl_generics paramtrace::TableRow for #name #ty_generics #where_clause {
            fn column_names() -> &'static [&'static str] {
                &[#(#column_names),*]
            }

            fn column_kinds() -> Vec<paramtrace::ValueKind> {
                vec![#(#column_kinds),*]
            }

            fn row_values(&self) -> Vec<paramtrace::Value> {
                vec![#(#row_values),*]
            }
        }
    };

    Ok(expanded)
}
