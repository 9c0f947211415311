//! Incremental string hashing.
//!
//! [`StringHasher`] accumulates the hash of text that arrives in pieces.
//! Feeding it `"hel"` and then `"lo"` gives the same result as hashing
//! `"hello"` in one call.

use std::fmt;

use hashcode_utils::{hash_step, split_surrogates};

use crate::config::HashScheme;
use crate::error::{HashError, HashResult};

/// Largest valid Unicode code point.
pub const MAX_CODE_POINT: u32 = 0x10FFFF;

/// Incremental polynomial hasher.
///
/// The hasher is a plain value: cloning it forks the accumulation, and it can
/// be built in `const` items.
///
/// # Example
///
/// ```
/// use hashcode_core::StringHasher;
/// use std::fmt::Write;
///
/// let mut hasher = StringHasher::new();
/// write!(hasher, "node-{}", 17).unwrap();
/// assert_eq!(hasher.finish(), StringHasher::hash("node-17"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StringHasher {
    hash: i32,
    len: usize,
    scheme: HashScheme,
}

impl StringHasher {
    /// Create a hasher using the code-point scheme.
    pub const fn new() -> Self {
        Self::with_scheme(HashScheme::CodePoint)
    }

    /// Create a hasher using the given scheme.
    pub const fn with_scheme(scheme: HashScheme) -> Self {
        Self {
            hash: 0,
            len: 0,
            scheme,
        }
    }

    /// Hash a whole string over its code points.
    ///
    /// # Example
    ///
    /// ```
    /// use hashcode_core::StringHasher;
    ///
    /// assert_eq!(StringHasher::hash(""), 0);
    /// assert_eq!(StringHasher::hash("a"), 97);
    /// assert_eq!(StringHasher::hash("ab"), 3105);
    /// assert_eq!(StringHasher::hash("hello"), 99162322);
    /// ```
    #[inline]
    pub const fn hash(text: &str) -> i32 {
        hashcode_utils::string_hash(text)
    }

    /// The scheme this hasher was created with.
    pub const fn scheme(&self) -> HashScheme {
        self.scheme
    }

    /// Number of code points written so far.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Whether nothing has been written yet.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Add one character.
    pub fn write_char(&mut self, c: char) {
        self.push(c as u32);
    }

    /// Add every character of `text`.
    pub fn write_str(&mut self, text: &str) {
        for c in text.chars() {
            self.push(c as u32);
        }
    }

    /// Add a raw code point.
    ///
    /// Surrogate code points (U+D800 to U+DFFF) are accepted and hashed as
    /// their value. Values above U+10FFFF are rejected and leave the hasher
    /// unchanged.
    pub fn write_code_point(&mut self, code_point: u32) -> HashResult<()> {
        if code_point > MAX_CODE_POINT {
            return Err(HashError::CodePointOutOfRange {
                index: self.len,
                value: code_point,
            });
        }
        self.push(code_point);
        Ok(())
    }

    /// The hash of everything written so far.
    #[inline]
    pub const fn finish(&self) -> i32 {
        self.hash
    }

    /// Forget everything written, keeping the scheme.
    pub fn reset(&mut self) {
        self.hash = 0;
        self.len = 0;
    }

    fn push(&mut self, code_point: u32) {
        self.hash = match self.scheme {
            HashScheme::Utf16 if code_point > 0xFFFF => {
                let (high, low) = split_surrogates(code_point);
                hash_step(hash_step(self.hash, high as u32), low as u32)
            }
            _ => hash_step(self.hash, code_point),
        };
        self.len += 1;
    }
}

impl fmt::Write for StringHasher {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        StringHasher::write_str(self, s);
        Ok(())
    }

    fn write_char(&mut self, c: char) -> fmt::Result {
        StringHasher::write_char(self, c);
        Ok(())
    }
}

impl Extend<char> for StringHasher {
    fn extend<I: IntoIterator<Item = char>>(&mut self, iter: I) {
        for c in iter {
            self.write_char(c);
        }
    }
}

impl<'a> Extend<&'a str> for StringHasher {
    fn extend<I: IntoIterator<Item = &'a str>>(&mut self, iter: I) {
        for s in iter {
            self.write_str(s);
        }
    }
}
