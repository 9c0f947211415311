//! AST parsing for the `StableId` derive.
//!
//! This module transforms `syn::DeriveInput` into our intermediate representation.

use syn::spanned::Spanned;
use syn::{Data, DeriveInput, Fields};

use crate::ir::{StableIdIR, VariantIR};
use hashcode_utils::string_hash;

/// Parse a `DeriveInput` into our intermediate representation.
pub fn parse(input: DeriveInput) -> syn::Result<StableIdIR> {
    let data_enum = match &input.data {
        Data::Enum(e) => e,
        Data::Struct(_) => {
            return Err(syn::Error::new_spanned(
                &input,
                "#[derive(StableId)] only supports enums, not structs",
            ))
        }
        Data::Union(_) => {
            return Err(syn::Error::new_spanned(
                &input,
                "#[derive(StableId)] only supports enums, not unions",
            ))
        }
    };

    let mut variants = Vec::new();
    for variant in &data_enum.variants {
        match &variant.fields {
            Fields::Unit => {}
            Fields::Named(_) => {
                return Err(syn::Error::new_spanned(
                    variant,
                    "#[derive(StableId)] only supports unit variants (no fields)",
                ))
            }
            Fields::Unnamed(_) => {
                return Err(syn::Error::new_spanned(
                    variant,
                    "#[derive(StableId)] only supports unit variants (no tuple fields)",
                ))
            }
        }

        let name = extract_id_attribute(&variant.attrs)?
            .unwrap_or_else(|| variant.ident.to_string());

        variants.push(VariantIR {
            ident: variant.ident.clone(),
            hash_id: string_hash(&name),
            name,
            span: variant.span(),
        });
    }

    if variants.is_empty() {
        return Err(syn::Error::new_spanned(
            &input,
            "#[derive(StableId)] requires at least one variant",
        ));
    }

    Ok(StableIdIR {
        enum_name: input.ident.clone(),
        generics: input.generics.clone(),
        variants,
    })
}

/// Extract the name from an `#[id = "..."]` attribute.
fn extract_id_attribute(attrs: &[syn::Attribute]) -> syn::Result<Option<String>> {
    for attr in attrs {
        if attr.path().is_ident("id") {
            let name_value = attr.meta.require_name_value()?;
            if let syn::Expr::Lit(syn::ExprLit {
                lit: syn::Lit::Str(lit_str),
                ..
            }) = &name_value.value
            {
                return Ok(Some(lit_str.value()));
            } else {
                return Err(syn::Error::new_spanned(
                    &name_value.value,
                    "expected string literal for #[id = \"...\"]",
                ));
            }
        }
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_str(src: &str) -> syn::Result<StableIdIR> {
        parse(syn::parse_str(src).unwrap())
    }

    #[test]
    fn test_parse_variant_names() {
        let ir = parse_str(
            r#"
            enum NodeKind {
                #[id = "chance"]
                Chance,
                Decision,
            }
            "#,
        )
        .unwrap();

        assert_eq!(ir.enum_name, "NodeKind");
        assert_eq!(ir.variants.len(), 2);
        assert_eq!(ir.variants[0].name, "chance");
        assert_eq!(ir.variants[0].hash_id, string_hash("chance"));
        assert_eq!(ir.variants[1].name, "Decision");
        assert_eq!(ir.variants[1].hash_id, string_hash("Decision"));
    }

    #[test]
    fn test_rejects_struct() {
        let err = parse_str("struct Node { id: i32 }").err().unwrap();
        assert!(err.to_string().contains("only supports enums"));
    }

    #[test]
    fn test_rejects_variant_with_fields() {
        let err = parse_str("enum E { A(u8) }").err().unwrap();
        assert!(err.to_string().contains("unit variants"));

        let err = parse_str("enum E { A { x: u8 } }").err().unwrap();
        assert!(err.to_string().contains("unit variants"));
    }

    #[test]
    fn test_rejects_empty_enum() {
        let err = parse_str("enum E {}").err().unwrap();
        assert!(err.to_string().contains("at least one variant"));
    }

    #[test]
    fn test_rejects_non_string_id() {
        let err = parse_str("enum E { #[id = 5] A }").err().unwrap();
        assert!(err.to_string().contains("expected string literal"));
    }
}
