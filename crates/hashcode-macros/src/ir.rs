//! Intermediate representation for the `StableId` derive.
//!
//! This module defines the data structures that represent a parsed enum,
//! after AST parsing but before validation and code generation.

use proc_macro2::Span;

/// Intermediate representation of an enum deriving `StableId`.
pub struct StableIdIR {
    /// The enum name (e.g., `NodeKind`)
    pub enum_name: syn::Ident,
    /// Generic parameters, if any
    pub generics: syn::Generics,
    /// All variants, in declaration order
    pub variants: Vec<VariantIR>,
}

/// A single unit variant.
pub struct VariantIR {
    /// Variant identifier (e.g., `Chance`)
    pub ident: syn::Ident,
    /// Name from `#[id = "..."]`, or the identifier
    pub name: String,
    /// Hash code of `name`
    pub hash_id: i32,
    /// Span for error reporting
    pub span: Span,
}
