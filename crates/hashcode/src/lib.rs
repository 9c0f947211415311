//! # hashcode
//!
//! Deterministic 32-bit string hash codes for Rust.
//!
//! The hash is the base-31 polynomial recurrence `hash = hash * 31 + c` over
//! the code points of a string, with two's-complement wraparound after every
//! step. It is fast, stable across platforms and builds, and intended for
//! bucketing and ID generation. It is not collision resistant.
//!
//! ## Quick Start
//!
//! ```rust
//! use hashcode::prelude::*;
//!
//! assert_eq!(string_hash(""), 0);
//! assert_eq!(string_hash("a"), 97);
//! assert_eq!(string_hash("hello"), 99162322);
//!
//! // Text that arrives in pieces
//! let mut hasher = StringHasher::new();
//! hasher.write_str("hel");
//! hasher.write_str("lo");
//! assert_eq!(hasher.finish(), 99162322);
//! ```
//!
//! With the default `derive` feature, enum variants get stable IDs:
//!
//! ```rust
//! # #[cfg(feature = "derive")]
//! # {
//! use hashcode::prelude::*;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, StableId)]
//! enum NodeKind {
//!     #[id = "chance"]
//!     Chance,
//!     #[id = "decision"]
//!     Decision,
//! }
//!
//! assert_eq!(NodeKind::Chance.stable_id(), hash_code!("chance"));
//! assert_eq!(NodeKind::from_stable_id(string_hash("decision")), Some(NodeKind::Decision));
//! # }
//! ```

// Re-export sub-crates
pub use hashcode_core as core;
pub use hashcode_utils as utils;

pub use hashcode_core::{
    hash_code_points, hash_utf8, HashError, HashResult, HashScheme, StableId, StringHasher,
};
pub use hashcode_utils::{hash_step, string_hash, utf16_string_hash};

// Re-export macros when feature is enabled
#[cfg(feature = "derive")]
pub use hashcode_macros::hash_code;
#[cfg(feature = "derive")]
pub use hashcode_macros::StableId;

/// Prelude module for convenient imports.
///
/// ```rust
/// use hashcode::prelude::*;
/// ```
pub mod prelude {
    pub use hashcode_core::{
        hash_code_points, hash_utf8, HashError, HashResult, HashScheme, StableId, StringHasher,
    };
    pub use hashcode_utils::{string_hash, utf16_string_hash};

    #[cfg(feature = "derive")]
    pub use hashcode_macros::{hash_code, StableId};
}
