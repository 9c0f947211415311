//! Const string hash functions for the hashcode crates.
//!
//! This crate provides the low-level hash shared between `hashcode-core` and
//! `hashcode-macros`. Every function is a `const fn` and the crate has zero
//! external dependencies, so proc macros can hash at expansion time.
//!
//! # Contents
//!
//! - [`string_hash`] - base-31 polynomial hash over code points
//! - [`utf16_string_hash`] - the same recurrence over UTF-16 code units
//! - [`hash_step`] - a single step of the recurrence

pub mod hash;

pub use hash::{hash_step, split_surrogates, string_hash, utf16_string_hash, HASH_MULTIPLIER};
