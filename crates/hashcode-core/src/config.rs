//! Hash scheme selection.
//!
//! The recurrence is always `hash * 31 + unit`. What differs between schemes
//! is which units a character contributes.
//!
//! # Example
//!
//! ```
//! use hashcode_core::{HashScheme, StringHasher};
//!
//! const HASHER: StringHasher = StringHasher::with_scheme(HashScheme::Utf16);
//!
//! let mut hasher = HASHER;
//! hasher.write_str("\u{1F600}");
//! assert_eq!(hasher.finish(), 1772899);
//! ```

use hashcode_utils::{string_hash, utf16_string_hash};

/// Which units of the text feed the hash recurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HashScheme {
    /// One unit per Unicode code point.
    ///
    /// Characters outside the Basic Multilingual Plane contribute their full
    /// code point.
    #[default]
    CodePoint,
    /// One unit per UTF-16 code unit.
    ///
    /// Characters outside the Basic Multilingual Plane contribute their high
    /// and low surrogates, in that order. Use this to reproduce hash codes
    /// computed over UTF-16 strings.
    Utf16,
}

impl HashScheme {
    /// Hash a whole string under this scheme.
    ///
    /// # Example
    ///
    /// ```
    /// use hashcode_core::HashScheme;
    ///
    /// assert_eq!(HashScheme::CodePoint.hash("\u{1F600}"), 0x1F600);
    /// assert_eq!(HashScheme::Utf16.hash("\u{1F600}"), 1772899);
    /// ```
    pub const fn hash(self, text: &str) -> i32 {
        match self {
            Self::CodePoint => string_hash(text),
            Self::Utf16 => utf16_string_hash(text),
        }
    }
}
