//! # hashcode-core
//!
//! Core types for deterministic 32-bit string hash codes.
//!
//! The hash itself is the base-31 polynomial recurrence
//! `hash = hash * 31 + unit`, wrapped to 32 bits after every step. This crate
//! builds on the const functions in `hashcode-utils` and adds:
//!
//! - [`StringHasher`] - incremental hashing of text that arrives in pieces
//! - [`HashScheme`] - code-point or UTF-16 code-unit hashing
//! - [`hash_utf8`] and [`hash_code_points`] - checked hashing of untyped input
//! - [`HashError`] - the error those checked functions return
//! - [`StableId`] - integer IDs hashed from string names

pub mod config;
pub mod error;
pub mod hasher;
pub mod stable_id;
pub mod text;

// Re-exports for convenience
pub use config::HashScheme;
pub use error::{HashError, HashResult};
pub use hasher::{StringHasher, MAX_CODE_POINT};
pub use stable_id::StableId;
pub use text::{hash_code_points, hash_utf8};

pub use hashcode_utils::{hash_step, string_hash, utf16_string_hash, HASH_MULTIPLIER};
