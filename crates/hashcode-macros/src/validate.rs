//! Semantic validation for the `StableId` derive.

use std::collections::HashMap;

use crate::ir::StableIdIR;

/// Validate the IR for semantic correctness.
pub fn validate(ir: &StableIdIR) -> syn::Result<()> {
    check_unique_names(ir)?;
    check_no_hash_collisions(ir)?;
    Ok(())
}

/// Check that no two variants share a name.
fn check_unique_names(ir: &StableIdIR) -> syn::Result<()> {
    let mut seen: HashMap<&str, &syn::Ident> = HashMap::new();

    for variant in &ir.variants {
        if let Some(first_variant) = seen.get(variant.name.as_str()) {
            return Err(syn::Error::new(
                variant.span,
                format!(
                    "Duplicate id \"{}\": already used by variant `{}`",
                    variant.name, first_variant
                ),
            ));
        }
        seen.insert(&variant.name, &variant.ident);
    }

    Ok(())
}

/// Check that no two names hash to the same value.
fn check_no_hash_collisions(ir: &StableIdIR) -> syn::Result<()> {
    let mut seen: HashMap<i32, &str> = HashMap::new();

    for variant in &ir.variants {
        if let Some(first_name) = seen.get(&variant.hash_id) {
            return Err(syn::Error::new(
                variant.span,
                format!(
                    "Id hash collision: \"{}\" and \"{}\" both hash to {} (0x{:08x}). \
                     Rename one of these variants to avoid the collision.",
                    variant.name, first_name, variant.hash_id, variant.hash_id
                ),
            ));
        }
        seen.insert(variant.hash_id, &variant.name);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::parse;

    fn validate_str(src: &str) -> syn::Result<()> {
        validate(&parse(syn::parse_str(src).unwrap())?)
    }

    #[test]
    fn test_accepts_distinct_names() {
        assert!(validate_str("enum E { Chance, Decision, Utility }").is_ok());
    }

    #[test]
    fn test_rejects_duplicate_names() {
        let err = validate_str(r#"enum E { #[id = "B"] A, B }"#).unwrap_err();
        assert!(err.to_string().contains("Duplicate id \"B\""));
        assert!(err.to_string().contains("`A`"));
    }

    #[test]
    fn test_rejects_hash_collision() {
        // "Aa" and "BB" both hash to 2112
        let err = validate_str("enum E { Aa, BB }").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("\"BB\" and \"Aa\""));
        assert!(message.contains("2112 (0x00000840)"));
    }
}
