//! Format validation utilities for the FWBT specification
//!
//! Pure functions with no I/O dependencies. Everything here is arithmetic
//! on the format's length law and byte-level layout constraints.

use crate::error::{FwbtError, Result};
use crate::format::constants;

/// Body size in bytes dictated by the table dimensions
///
/// Returns `None` when `entry_count * (key_width + value_width)` does not
/// fit in a `u64`.
pub const fn body_size(key_width: u32, value_width: u32, entry_count: u32) -> Option<u64> {
    let record_width = key_width as u64 + value_width as u64;
    (entry_count as u64).checked_mul(record_width)
}

/// Total file size in bytes dictated by the table dimensions
pub const fn total_size(key_width: u32, value_width: u32, entry_count: u32) -> Option<u64> {
    match body_size(key_width, value_width, entry_count) {
        Some(body) => body.checked_add(constants::HEADER_SIZE as u64),
        None => None,
    }
}

/// Validate magic bytes against the FWBT signature
pub const fn validate_signature(actual: &[u8; 4]) -> Result<()> {
    if actual[0] != constants::SIGNATURE[0]
        || actual[1] != constants::SIGNATURE[1]
        || actual[2] != constants::SIGNATURE[2]
        || actual[3] != constants::SIGNATURE[3]
    {
        return Err(FwbtError::BadSignature);
    }
    Ok(())
}

/// Validate a body length against the length law
///
/// A body is valid only when its length equals
/// `entry_count * (key_width + value_width)` exactly.
pub const fn validate_body_size(
    body_len: u64,
    key_width: u32,
    value_width: u32,
    entry_count: u32,
) -> Result<()> {
    match body_size(key_width, value_width, entry_count) {
        Some(expected) => {
            if expected == body_len {
                Ok(())
            } else {
                Err(FwbtError::InvalidBodySize)
            }
        }
        None => Err(FwbtError::InvalidBodySize),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_size() {
        assert_eq!(body_size(4, 8, 10), Some(120));
        assert_eq!(body_size(0, 0, 100), Some(0));
        assert_eq!(body_size(4, 8, 0), Some(0));
        assert_eq!(body_size(u32::MAX, u32::MAX, u32::MAX), None);
    }

    #[test]
    fn test_total_size() {
        assert_eq!(total_size(4, 8, 10), Some(137));
        assert_eq!(total_size(1, 1, 0), Some(17));
        assert_eq!(total_size(u32::MAX, u32::MAX, u32::MAX), None);
    }

    #[test]
    fn test_validate_signature() {
        assert_eq!(validate_signature(b"FWBT"), Ok(()));
        assert_eq!(validate_signature(b"FWBX"), Err(FwbtError::BadSignature));
    }

    #[test]
    fn test_validate_body_size() {
        assert_eq!(validate_body_size(120, 4, 8, 10), Ok(()));
        assert_eq!(validate_body_size(0, 4, 8, 0), Ok(()));
        assert_eq!(
            validate_body_size(119, 4, 8, 10),
            Err(FwbtError::InvalidBodySize)
        );
        assert_eq!(
            validate_body_size(121, 4, 8, 10),
            Err(FwbtError::InvalidBodySize)
        );
        // an overflowing expected size can never match a real buffer
        assert_eq!(
            validate_body_size(u64::MAX, u32::MAX, u32::MAX, u32::MAX),
            Err(FwbtError::InvalidBodySize)
        );
    }
}
