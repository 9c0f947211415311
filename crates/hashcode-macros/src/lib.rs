//! Procedural macros for the hashcode crates.
//!
//! This crate provides `hash_code!` for hashing string literals at compile
//! time and `#[derive(StableId)]` for giving enum variants stable integer IDs.
//!
//! # Example
//!
//! ```ignore
//! use hashcode::prelude::*;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, StableId)]
//! pub enum NodeKind {
//!     #[id = "chance"]
//!     Chance,
//!     #[id = "decision"]
//!     Decision,
//! }
//!
//! assert_eq!(NodeKind::Chance.stable_id(), hash_code!("chance"));
//! ```

use proc_macro::TokenStream;

mod codegen;
mod ir;
mod parse;
mod validate;

/// Hash a string literal at compile time.
///
/// Expands to an `i32` expression equal to `string_hash` of the literal.
/// The argument must be a single string literal.
///
/// # Example
///
/// ```ignore
/// const HELLO: i32 = hash_code!("hello");
/// assert_eq!(HELLO, 99162322);
/// ```
#[proc_macro]
pub fn hash_code(input: TokenStream) -> TokenStream {
    let literal = syn::parse_macro_input!(input as syn::LitStr);
    let hash = hashcode_utils::string_hash(&literal.value());
    codegen::hash_literal(hash).into()
}

/// Derive macro for implementing `StableId` on enums.
///
/// This macro generates:
/// - `StableId` trait implementation (IDS, NAMES, stable_id, from_stable_id, id_name)
/// - Compile-time duplicate name and hash collision detection
///
/// # Requirements
///
/// - The type must be an enum with at least one variant
/// - All variants must be unit variants (no fields)
///
/// # Attributes
///
/// - `#[id = "..."]` - Optional name to hash for a variant. If not specified,
///   the variant identifier is used.
///
/// # Example
///
/// ```ignore
/// #[derive(StableId)]
/// pub enum Edge {
///     #[id = "parent"]
///     Parent,
///     Child,  // Hashes "Child"
/// }
/// ```
#[proc_macro_derive(StableId, attributes(id))]
pub fn derive_stable_id(input: TokenStream) -> TokenStream {
    let input = syn::parse_macro_input!(input as syn::DeriveInput);

    match derive_stable_id_impl(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn derive_stable_id_impl(input: syn::DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let ir = parse::parse(input)?;
    validate::validate(&ir)?;
    Ok(codegen::generate(&ir))
}
