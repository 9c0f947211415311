//! Checked entry points for input that is not yet known to be text.
//!
//! `&str` input cannot be malformed, so [`string_hash`](crate::string_hash)
//! has no error path. Raw bytes and raw code points can be, and the functions
//! here reject them before any hashing happens.

use hashcode_utils::string_hash;

use crate::error::{HashError, HashResult};
use crate::hasher::StringHasher;

/// Hash UTF-8 encoded bytes.
///
/// # Errors
///
/// Returns [`HashError::InvalidUtf8`] if `bytes` is not valid UTF-8.
///
/// # Example
///
/// ```
/// use hashcode_core::{hash_utf8, HashError};
///
/// assert_eq!(hash_utf8(b"hello"), Ok(99162322));
/// assert_eq!(hash_utf8(b"ab\xff"), Err(HashError::InvalidUtf8 { valid_up_to: 2 }));
/// ```
pub fn hash_utf8(bytes: &[u8]) -> HashResult<i32> {
    match std::str::from_utf8(bytes) {
        Ok(text) => Ok(string_hash(text)),
        Err(err) => {
            log::debug!(
                "Rejected {} byte input: invalid UTF-8 after byte {}",
                bytes.len(),
                err.valid_up_to()
            );
            Err(HashError::InvalidUtf8 {
                valid_up_to: err.valid_up_to(),
            })
        }
    }
}

/// Hash a sequence of raw code points.
///
/// Every value up to U+10FFFF is accepted, including surrogate code points,
/// which a `&str` cannot hold.
///
/// # Errors
///
/// Returns [`HashError::CodePointOutOfRange`] for the first value above
/// U+10FFFF.
///
/// # Example
///
/// ```
/// use hashcode_core::hash_code_points;
///
/// assert_eq!(hash_code_points(&[0x61, 0x62]), Ok(3105));
/// assert!(hash_code_points(&[0x61, 0x110000]).is_err());
/// ```
pub fn hash_code_points(points: &[u32]) -> HashResult<i32> {
    let mut hasher = StringHasher::new();
    for &point in points {
        if let Err(err) = hasher.write_code_point(point) {
            log::debug!("Rejected code point sequence: {}", err);
            return Err(err);
        }
    }
    Ok(hasher.finish())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_utf8_valid() {
        assert_eq!(hash_utf8(b""), Ok(0));
        assert_eq!(hash_utf8("h\u{e9}llo".as_bytes()), Ok(103094734));
        assert_eq!(hash_utf8("\u{1F600}".as_bytes()), Ok(0x1F600));
    }

    #[test]
    fn test_hash_utf8_invalid() {
        assert_eq!(
            hash_utf8(&[0xff]),
            Err(HashError::InvalidUtf8 { valid_up_to: 0 })
        );
        // Truncated multi-byte sequence
        assert_eq!(
            hash_utf8(&[b'a', 0xe6, 0x97]),
            Err(HashError::InvalidUtf8 { valid_up_to: 1 })
        );
        // Encoded surrogate
        assert_eq!(
            hash_utf8(&[0xed, 0xa0, 0x80]),
            Err(HashError::InvalidUtf8 { valid_up_to: 0 })
        );
    }

    #[test]
    fn test_hash_code_points_matches_str() {
        let text = "polygenelubricants";
        let points: Vec<u32> = text.chars().map(|c| c as u32).collect();
        assert_eq!(hash_code_points(&points), Ok(string_hash(text)));
        assert_eq!(hash_code_points(&points), Ok(i32::MIN));
    }

    #[test]
    fn test_hash_code_points_empty() {
        assert_eq!(hash_code_points(&[]), Ok(0));
    }

    #[test]
    fn test_hash_code_points_lone_surrogate() {
        assert_eq!(hash_code_points(&[0x61, 0xDC00]), Ok(97 * 31 + 0xDC00));
    }

    #[test]
    fn test_hash_code_points_out_of_range() {
        assert_eq!(
            hash_code_points(&[0x61, 0x10FFFF, u32::MAX, 0x110000]),
            Err(HashError::CodePointOutOfRange {
                index: 2,
                value: u32::MAX
            })
        );
    }
}
