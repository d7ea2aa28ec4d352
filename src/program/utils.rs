//! Utility functions for the branding SDK.
//!
//! This module provides the length-prefixed string serialization used by the
//! `update_branding` payload.

use crate::error::{SdkError, SdkResult};
use crate::program::constants::LENGTH_PREFIX_SIZE;

// ============================================================================
// String Serialization
// ============================================================================

/// Append a string with a u32 length prefix to `out`.
///
/// Format: [length (4 bytes LE)][utf-8 bytes]
///
/// `field` only labels the error when the string is longer than `u32::MAX`
/// bytes.
pub fn write_string(out: &mut Vec<u8>, field: &str, s: &str) -> SdkResult<()> {
    let bytes = s.as_bytes();
    let len = u32::try_from(bytes.len()).map_err(|_| SdkError::Encoding {
        field: field.to_string(),
        reason: format!("{} bytes exceeds the u32 length prefix", bytes.len()),
    })?;
    out.reserve(LENGTH_PREFIX_SIZE + bytes.len());
    out.extend_from_slice(&len.to_le_bytes());
    out.extend_from_slice(bytes);
    Ok(())
}

/// Deserialize a string with a u32 length prefix.
///
/// Returns the string and the number of bytes consumed.
pub fn deserialize_string(data: &[u8]) -> SdkResult<(String, usize)> {
    if data.len() < LENGTH_PREFIX_SIZE {
        return Err(SdkError::InvalidDataLength {
            expected: LENGTH_PREFIX_SIZE,
            actual: data.len(),
        });
    }

    let len = u32::from_le_bytes([data[0], data[1], data[2], data[3]]) as usize;
    let end = LENGTH_PREFIX_SIZE
        .checked_add(len)
        .ok_or(SdkError::InvalidDataLength {
            expected: usize::MAX,
            actual: data.len(),
        })?;

    if data.len() < end {
        return Err(SdkError::InvalidDataLength {
            expected: end,
            actual: data.len(),
        });
    }

    let s = std::str::from_utf8(&data[LENGTH_PREFIX_SIZE..end])
        .map_err(|e| SdkError::Encoding {
            field: "string".to_string(),
            reason: e.to_string(),
        })?
        .to_string();

    Ok((s, end))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn serialize_string(s: &str) -> Vec<u8> {
        let mut out = Vec::new();
        write_string(&mut out, "string", s).unwrap();
        out
    }

    #[test]
    fn test_string_serialization_roundtrip() {
        let original = "Hello, World!";
        let serialized = serialize_string(original);
        let (deserialized, consumed) = deserialize_string(&serialized).unwrap();

        assert_eq!(original, deserialized);
        assert_eq!(consumed, serialized.len());
    }

    #[test]
    fn test_string_serialization_empty() {
        let serialized = serialize_string("");
        assert_eq!(serialized, vec![0, 0, 0, 0]);

        let (deserialized, consumed) = deserialize_string(&serialized).unwrap();
        assert_eq!(deserialized, "");
        assert_eq!(consumed, 4); // Just the length prefix
    }

    #[test]
    fn test_length_prefix_is_little_endian_bytes() {
        // "é" is two bytes in UTF-8
        let serialized = serialize_string("café");
        assert_eq!(&serialized[..4], &[5, 0, 0, 0]);
        assert_eq!(&serialized[4..], "café".as_bytes());
    }

    #[test]
    fn test_deserialize_truncated() {
        assert!(matches!(
            deserialize_string(&[1, 0]),
            Err(SdkError::InvalidDataLength { expected: 4, actual: 2 })
        ));
        assert!(matches!(
            deserialize_string(&[3, 0, 0, 0, b'a']),
            Err(SdkError::InvalidDataLength { expected: 7, actual: 5 })
        ));
    }

    #[test]
    fn test_deserialize_invalid_utf8() {
        let data = [2, 0, 0, 0, 0xff, 0xfe];
        assert!(matches!(
            deserialize_string(&data),
            Err(SdkError::Encoding { .. })
        ));
    }
}
