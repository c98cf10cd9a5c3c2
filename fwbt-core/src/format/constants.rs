//! Format constants and magic bytes for the FWBT specification

/// Magic bytes opening every FWBT file
pub const SIGNATURE: [u8; 4] = *b"FWBT";

/// Current format version
pub const VERSION: u8 = 1;

/// Fixed size of the file header in bytes
pub const HEADER_SIZE: usize = 17;

/// Offset of the version byte within the header
pub const VERSION_OFFSET: usize = 4;

/// Offset of the big-endian key width field
pub const KEY_WIDTH_OFFSET: usize = 5;

/// Offset of the big-endian value width field
pub const VALUE_WIDTH_OFFSET: usize = 9;

/// Offset of the big-endian entry count field
pub const ENTRY_COUNT_OFFSET: usize = 13;

/// Offset of the first body record
pub const BODY_OFFSET: usize = 17;

/// Maximum number of records a table may hold
///
/// An entry count of `u32::MAX` is reserved and never valid in a header.
pub const MAX_ENTRY_COUNT: u32 = u32::MAX - 1;
