//! Code generation for the `StableId` derive and the `hash_code!` macro.

use proc_macro2::{Literal, TokenStream};
use quote::quote;

use crate::ir::StableIdIR;

/// Generate the `StableId` implementation from validated IR.
pub fn generate(ir: &StableIdIR) -> TokenStream {
    let enum_name = &ir.enum_name;
    let (impl_generics, ty_generics, where_clause) = ir.generics.split_for_impl();

    let ids: Vec<TokenStream> = ir.variants.iter().map(|v| hash_literal(v.hash_id)).collect();
    let names: Vec<&str> = ir.variants.iter().map(|v| v.name.as_str()).collect();

    let stable_id_arms = ir.variants.iter().zip(&ids).map(|(v, id)| {
        let ident = &v.ident;
        quote! { #enum_name::#ident => #id, }
    });

    let from_stable_id_checks = ir.variants.iter().zip(&ids).map(|(v, id)| {
        let ident = &v.ident;
        quote! {
            if id == #id {
                return ::core::option::Option::Some(#enum_name::#ident);
            }
        }
    });

    let id_name_arms = ir.variants.iter().map(|v| {
        let ident = &v.ident;
        let name = &v.name;
        quote! { #enum_name::#ident => #name, }
    });

    quote! {
        impl #impl_generics ::hashcode::core::StableId for #enum_name #ty_generics #where_clause {
            const IDS: &'static [i32] = &[#(#ids),*];
            const NAMES: &'static [&'static str] = &[#(#names),*];

            fn stable_id(&self) -> i32 {
                match self {
                    #(#stable_id_arms)*
                }
            }

            fn from_stable_id(id: i32) -> ::core::option::Option<Self> {
                #(#from_stable_id_checks)*
                ::core::option::Option::None
            }

            fn id_name(&self) -> &'static str {
                match self {
                    #(#id_name_arms)*
                }
            }
        }
    }
}

/// Emit an `i32` hash as an expression.
///
/// Negative literals do not survive as a single token, so the value is
/// written as its bit pattern and cast back.
pub fn hash_literal(hash: i32) -> TokenStream {
    let bits = Literal::u32_suffixed(hash as u32);
    quote! { (#bits as i32) }
}
