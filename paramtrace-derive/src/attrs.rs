//! `#[paramtrace(...)]` field attribute parsing shared by both derives

use syn::{spanned::Spanned, Data, DeriveInput, Error, Field, Fields, Ident, Result};

/// Parsed configuration of one struct field
pub struct FieldConfig {
    /// The field identifier
    pub ident: Ident,
    /// Parameter or column name to use (may be renamed)
    pub name: String,
    /// Whether to leave this field out
    pub skip: bool,
    /// The field type
    pub ty: syn::Type,
}

fn parse_field_config(field: &Field) -> Result<FieldConfig> {
    let ident = field
        .ident
        .clone()
        .ok_or_else(|| Error::new(field.span(), "tuple structs are not supported"))?;

    let mut name = ident.to_string();
    let mut skip = false;

    for attr in &field.attrs {
        if attr.path().is_ident("paramtrace") {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("rename") {
                    let value = meta.value()?;
                    let lit: syn::LitStr = value.parse()?;
                    name = lit.value();
                    if name.is_empty() {
                        return Err(Error::new(lit.span(), "rename must not be empty"));
                    }
                } else if meta.path.is_ident("skip") {
                    skip = true;
                } else {
                    return Err(meta.error(format!(
                        "unknown paramtrace attribute `{}`",
                        meta.path
                            .get_ident()
                            .map(|i| i.to_string())
                            .unwrap_or_default()
                    )));
                }
                Ok(())
            })?;
        }
    }

    Ok(FieldConfig {
        ident,
        name,
        skip,
        ty: field.ty.clone(),
    })
}

/// Parse the non-skipped fields of a struct with named fields
pub fn included_fields(input: &DeriveInput) -> Result<Vec<FieldConfig>> {
    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => return Err(Error::new(input.span(), "only named fields are supported")),
        },
        _ => return Err(Error::new(input.span(), "only structs are supported")),
    };

    let configs = fields
        .iter()
        .map(parse_field_config)
        .collect::<Result<Vec<_>>>()?;

    Ok(configs.into_iter().filter(|c| !c.skip).collect())
}
