//! ToParams derive macro implementation

use proc_macro2::TokenStream;
use quote::quote;
use syn::{DeriveInput, Result};

use crate::attrs::included_fields;

pub fn derive_to_params_impl(input: DeriveInput) -> Result<TokenStream> {
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let fields = included_fields(&input)?;

    let param_names: Vec<&str> = fields.iter().map(|c| c.name.as_str()).collect();

    let param_values: Vec<TokenStream> = fields
        .iter()
        .map(|config| {
            let field_ident = &config.ident;
            quote! {
                paramtrace::ToValue::to_value(&self.#field_ident)
            }
        })
        .collect();

    let expanded = quote! {
        impl #impl_generics paramtrace::ToParams for #name #ty_generics #where_clause {
            fn param_names() -> &'static [&'static str] {
                &[#(#param_names),*]
            }

            fn param_values(&self) -> Vec<paramtrace::Value> {
                vec![#(#param_values),*]
            }
        }
    };

    Ok(expanded)
}
