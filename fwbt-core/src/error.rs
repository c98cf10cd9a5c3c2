//! Error types for FWBT operations

/// Errors that can occur during FWBT operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FwbtError {
    /// Data is shorter than the fixed header
    TooShort,
    /// Signature bytes are missing or malformed
    BadSignature,
    /// Data version is not the supported format version
    UnsupportedVersion,
    /// Key width is zero, or a key has the wrong length
    InvalidKeyWidth,
    /// Value width is zero, or a value has the wrong length
    InvalidValueWidth,
    /// Entry count equals `u32::MAX`
    InvalidEntryCount,
    /// Body length does not equal `entry_count * (key_width + value_width)`
    InvalidBodySize,
    /// A record with the same key already exists
    DuplicateKey,
    /// No record with the given key could be found
    KeyNotFound,
    /// Record index is greater than or equal to the entry count
    OutOfRange,
    /// The table already holds the maximum number of records
    TableFull,
}

impl core::fmt::Display for FwbtError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            FwbtError::TooShort => "Data shorter than FWBT header",
            FwbtError::BadSignature => "Missing or malformed FWBT signature",
            FwbtError::UnsupportedVersion => "Unsupported format version",
            FwbtError::InvalidKeyWidth => "Invalid key width",
            FwbtError::InvalidValueWidth => "Invalid value width",
            FwbtError::InvalidEntryCount => "Invalid entry count",
            FwbtError::InvalidBodySize => "Body size does not match header dimensions",
            FwbtError::DuplicateKey => "A record with this key already exists",
            FwbtError::KeyNotFound => "No record with this key",
            FwbtError::OutOfRange => "Record index out of range",
            FwbtError::TableFull => "Table holds the maximum number of records",
        };
        write!(f, "{msg}")
    }
}

/// Result type for FWBT operations
pub type Result<T> = core::result::Result<T, FwbtError>;
