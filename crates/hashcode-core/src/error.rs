//! Error types for the hashcode crates.

use std::fmt;

/// Input that cannot be interpreted as text.
///
/// Hashing a `&str` never fails. These errors only come from the checked
/// entry points that accept raw bytes or raw code points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HashError {
    /// The bytes are not valid UTF-8.
    InvalidUtf8 {
        /// Length of the longest valid UTF-8 prefix.
        valid_up_to: usize,
    },
    /// A value is larger than the last Unicode code point (U+10FFFF).
    CodePointOutOfRange {
        /// Position of the offending value in the input.
        index: usize,
        /// The offending value.
        value: u32,
    },
}

impl fmt::Display for HashError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidUtf8 { valid_up_to } => {
                write!(f, "Invalid UTF-8: input is only valid up to byte {}", valid_up_to)
            }
            Self::CodePointOutOfRange { index, value } => {
                write!(f, "Code point out of range at index {}: 0x{:x}", index, value)
            }
        }
    }
}

impl std::error::Error for HashError {}

/// Result type for hashcode operations.
pub type HashResult<T> = Result<T, HashError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_invalid_utf8() {
        let err = HashError::InvalidUtf8 { valid_up_to: 3 };
        assert_eq!(err.to_string(), "Invalid UTF-8: input is only valid up to byte 3");
    }

    #[test]
    fn test_display_code_point_out_of_range() {
        let err = HashError::CodePointOutOfRange {
            index: 2,
            value: 0x110000,
        };
        assert_eq!(err.to_string(), "Code point out of range at index 2: 0x110000");
    }
}
