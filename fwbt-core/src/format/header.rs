//! Core FWBT header format definitions
//!
//! This module contains the fixed 17-byte file header and its wire
//! encoding. All multi-byte fields are big-endian.

use crate::error::{FwbtError, Result};
use crate::format::constants;

/// Standard header for FWBT files
///
/// The header is a fixed 17-byte prefix: four magic bytes, a version byte
/// and three big-endian `u32` dimensions. Together with the body it
/// satisfies the format's length law
/// `total_length = 17 + entry_count * (key_width + value_width)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FwbtHeader {
    /// Magic bytes: "FWBT"
    pub magic: [u8; 4],
    /// Format version
    pub version: u8,
    /// Bytes per key
    pub key_width: u32,
    /// Bytes per value
    pub value_width: u32,
    /// Number of records in the body
    pub entry_count: u32,
}

impl FwbtHeader {
    /// Magic bytes for FWBT files
    pub const MAGIC: [u8; 4] = constants::SIGNATURE;

    /// Current format version
    pub const VERSION: u8 = constants::VERSION;

    /// Size of the header in bytes
    pub const SIZE: usize = constants::HEADER_SIZE;

    /// Create a header for the given table dimensions
    pub const fn new(key_width: u32, value_width: u32, entry_count: u32) -> Self {
        Self {
            magic: Self::MAGIC,
            version: Self::VERSION,
            key_width,
            value_width,
            entry_count,
        }
    }

    /// Width of a single record in bytes
    pub const fn record_width(&self) -> u64 {
        self.key_width as u64 + self.value_width as u64
    }

    /// Body size in bytes dictated by the header dimensions
    ///
    /// Returns `None` when `entry_count * (key_width + value_width)` does
    /// not fit in a `u64`; such a body cannot correspond to any real buffer.
    pub const fn body_size(&self) -> Option<u64> {
        (self.entry_count as u64).checked_mul(self.record_width())
    }

    /// Total file size in bytes dictated by the header dimensions
    pub const fn total_size(&self) -> Option<u64> {
        match self.body_size() {
            Some(body) => body.checked_add(Self::SIZE as u64),
            None => None,
        }
    }

    /// Validate the dimensions for use as a table
    ///
    /// Zero widths and an entry count of `u32::MAX` are representable on
    /// the wire but rejected here; the raw encoder still accepts them as
    /// degenerate cases.
    pub const fn validate(&self) -> Result<()> {
        if self.key_width == 0 {
            return Err(FwbtError::InvalidKeyWidth);
        }
        if self.value_width == 0 {
            return Err(FwbtError::InvalidValueWidth);
        }
        if self.entry_count == u32::MAX {
            return Err(FwbtError::InvalidEntryCount);
        }
        Ok(())
    }

    /// Parse a header from the first 17 bytes of `bytes`
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < Self::SIZE {
            return Err(FwbtError::TooShort);
        }

        if bytes[0..4] != Self::MAGIC {
            return Err(FwbtError::BadSignature);
        }

        let version = bytes[constants::VERSION_OFFSET];
        if version != Self::VERSION {
            return Err(FwbtError::UnsupportedVersion);
        }

        let key_width = u32::from_be_bytes([bytes[5], bytes[6], bytes[7], bytes[8]]);
        let value_width = u32::from_be_bytes([bytes[9], bytes[10], bytes[11], bytes[12]]);
        let entry_count = u32::from_be_bytes([bytes[13], bytes[14], bytes[15], bytes[16]]);

        Ok(Self {
            magic: Self::MAGIC,
            version,
            key_width,
            value_width,
            entry_count,
        })
    }

    /// Serialize the header into its fixed 17-byte wire form
    pub const fn to_bytes_array(&self) -> [u8; Self::SIZE] {
        let mut bytes = [0u8; Self::SIZE];

        bytes[0] = self.magic[0];
        bytes[1] = self.magic[1];
        bytes[2] = self.magic[2];
        bytes[3] = self.magic[3];

        bytes[4] = self.version;

        // u32 fields in big-endian
        let key_width_bytes = self.key_width.to_be_bytes();
        bytes[5] = key_width_bytes[0];
        bytes[6] = key_width_bytes[1];
        bytes[7] = key_width_bytes[2];
        bytes[8] = key_width_bytes[3];

        let value_width_bytes = self.value_width.to_be_bytes();
        bytes[9] = value_width_bytes[0];
        bytes[10] = value_width_bytes[1];
        bytes[11] = value_width_bytes[2];
        bytes[12] = value_width_bytes[3];

        let entry_count_bytes = self.entry_count.to_be_bytes();
        bytes[13] = entry_count_bytes[0];
        bytes[14] = entry_count_bytes[1];
        bytes[15] = entry_count_bytes[2];
        bytes[16] = entry_count_bytes[3];

        bytes
    }

    /// Serialize the header into a byte vector
    #[cfg(feature = "alloc")]
    pub fn to_bytes(&self) -> alloc::vec::Vec<u8> {
        let mut bytes = alloc::vec::Vec::with_capacity(Self::SIZE);

        bytes.extend_from_slice(&self.magic);
        bytes.push(self.version);
        bytes.extend_from_slice(&self.key_width.to_be_bytes());
        bytes.extend_from_slice(&self.value_width.to_be_bytes());
        bytes.extend_from_slice(&self.entry_count.to_be_bytes());

        bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_layout() {
        let bytes = FwbtHeader::new(4, 8, 10).to_bytes_array();

        assert_eq!(bytes.len(), 17);
        assert_eq!(&bytes[0..4], b"FWBT");
        assert_eq!(bytes[4], 1);
        assert_eq!(&bytes[5..9], &[0, 0, 0, 4]);
        assert_eq!(&bytes[9..13], &[0, 0, 0, 8]);
        assert_eq!(&bytes[13..17], &[0, 0, 0, 10]);
    }

    #[test]
    fn test_header_round_trip() {
        let header = FwbtHeader::new(4, 8, 10);
        let parsed = FwbtHeader::from_bytes(&header.to_bytes_array()).unwrap();

        assert_eq!(parsed, header);
        assert_eq!(parsed.magic, *b"FWBT");
        assert_eq!(parsed.version, 1);
    }

    #[test]
    fn test_from_bytes_rejects_short_input() {
        assert_eq!(FwbtHeader::from_bytes(&[]), Err(FwbtError::TooShort));
        assert_eq!(
            FwbtHeader::from_bytes(&[0u8; 16]),
            Err(FwbtError::TooShort)
        );
    }

    #[test]
    fn test_from_bytes_rejects_bad_signature() {
        let mut bytes = FwbtHeader::new(1, 1, 0).to_bytes_array();
        bytes[0] = b'X';
        assert_eq!(
            FwbtHeader::from_bytes(&bytes),
            Err(FwbtError::BadSignature)
        );
    }

    #[test]
    fn test_from_bytes_rejects_unknown_version() {
        let mut bytes = FwbtHeader::new(1, 1, 0).to_bytes_array();
        bytes[4] = 2;
        assert_eq!(
            FwbtHeader::from_bytes(&bytes),
            Err(FwbtError::UnsupportedVersion)
        );
    }

    #[test]
    fn test_size_arithmetic() {
        let header = FwbtHeader::new(4, 8, 10);
        assert_eq!(header.record_width(), 12);
        assert_eq!(header.body_size(), Some(120));
        assert_eq!(header.total_size(), Some(137));

        // entry_count * record_width can exceed u64
        let huge = FwbtHeader::new(u32::MAX, u32::MAX, u32::MAX);
        assert_eq!(huge.body_size(), None);
        assert_eq!(huge.total_size(), None);
    }

    #[test]
    fn test_validate() {
        assert_eq!(FwbtHeader::new(4, 8, 10).validate(), Ok(()));
        assert_eq!(
            FwbtHeader::new(0, 8, 10).validate(),
            Err(FwbtError::InvalidKeyWidth)
        );
        assert_eq!(
            FwbtHeader::new(4, 0, 10).validate(),
            Err(FwbtError::InvalidValueWidth)
        );
        assert_eq!(
            FwbtHeader::new(4, 8, u32::MAX).validate(),
            Err(FwbtError::InvalidEntryCount)
        );
    }
}
