//! Owned, mutable FWBT tables
//!
//! [`FwbtTable`] is the in-memory form of a table: parse it from bytes,
//! look up and mutate records, serialize it back out. Record data is
//! copied out of the input; for zero-copy access use the `mmap` view.

use fwbt_core::format::constants::MAX_ENTRY_COUNT;
use fwbt_core::{encoder, validation, FwbtError, FwbtHeader, FwbtRecord, Result};

/// An owned FWBT table
///
/// Records keep their insertion order. The wire format itself does not
/// force key uniqueness, so [`FwbtTable::parse_bytes`] accepts duplicate
/// keys as-is; mutation through [`FwbtTable::set`] keeps keys unique.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FwbtTable {
    key_width: u32,
    value_width: u32,
    records: Vec<FwbtRecord>,
}

impl FwbtTable {
    /// Create an empty table with the given record dimensions
    ///
    /// Dimensions are validated strictly: zero widths are rejected.
    pub fn new(key_width: u32, value_width: u32) -> Result<Self> {
        FwbtHeader::new(key_width, value_width, 0).validate()?;
        Ok(Self {
            key_width,
            value_width,
            records: Vec::new(),
        })
    }

    /// Parse a complete FWBT file
    ///
    /// Validates the header (length, signature, version), the dimensions
    /// and the body length against the format's length law before copying
    /// records out of `data`.
    pub fn parse_bytes(data: &[u8]) -> Result<Self> {
        let header = FwbtHeader::from_bytes(data)?;
        header.validate()?;

        let body = &data[FwbtHeader::SIZE..];
        validation::validate_body_size(
            body.len() as u64,
            header.key_width,
            header.value_width,
            header.entry_count,
        )?;

        let key_width = header.key_width as usize;
        let record_width = key_width + header.value_width as usize;
        let mut records = Vec::with_capacity(header.entry_count as usize);
        for chunk in body.chunks_exact(record_width) {
            let (key, value) = chunk.split_at(key_width);
            records.push(FwbtRecord {
                key: key.to_vec(),
                value: value.to_vec(),
            });
        }

        Ok(Self {
            key_width: header.key_width,
            value_width: header.value_width,
            records,
        })
    }

    /// Header describing the table's current dimensions
    pub fn header(&self) -> FwbtHeader {
        FwbtHeader::new(self.key_width, self.value_width, self.records.len() as u32)
    }

    /// Bytes per key
    pub const fn key_width(&self) -> u32 {
        self.key_width
    }

    /// Bytes per value
    pub const fn value_width(&self) -> u32 {
        self.value_width
    }

    /// Number of records in the table
    pub fn len(&self) -> u32 {
        self.records.len() as u32
    }

    /// True when the table holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records in index order
    pub fn records(&self) -> &[FwbtRecord] {
        &self.records
    }

    /// The record at `index`, if any
    pub fn get(&self, index: u32) -> Option<&FwbtRecord> {
        self.records.get(index as usize)
    }

    /// Find the index of the record with the given key
    pub fn find(&self, key: &[u8]) -> Option<u32> {
        self.records
            .iter()
            .position(|record| record.key == key)
            .map(|index| index as u32)
    }

    /// Look up the value stored under `key`
    pub fn get_value(&self, key: &[u8]) -> Option<&[u8]> {
        self.find(key)
            .map(|index| self.records[index as usize].value.as_slice())
    }

    /// Insert or replace a record
    ///
    /// Both byte strings must match the table's widths exactly. With
    /// `replace_existing` unset, a key that is already present is an error.
    pub fn set(&mut self, key: Vec<u8>, value: Vec<u8>, replace_existing: bool) -> Result<()> {
        let record = FwbtRecord::new(key, value, self.key_width, self.value_width)?;

        match self.find(&record.key) {
            Some(index) => {
                if !replace_existing {
                    return Err(FwbtError::DuplicateKey);
                }
                self.records[index as usize] = record;
            }
            None => {
                if self.records.len() >= MAX_ENTRY_COUNT as usize {
                    return Err(FwbtError::TableFull);
                }
                self.records.push(record);
            }
        }

        Ok(())
    }

    /// Remove and return the record with the given key
    pub fn remove(&mut self, key: &[u8]) -> Result<FwbtRecord> {
        match self.find(key) {
            Some(index) => Ok(self.records.remove(index as usize)),
            None => Err(FwbtError::KeyNotFound),
        }
    }

    /// Remove and return the record at `index`
    pub fn remove_by_index(&mut self, index: u32) -> Result<FwbtRecord> {
        if index as usize >= self.records.len() {
            return Err(FwbtError::OutOfRange);
        }
        Ok(self.records.remove(index as usize))
    }

    /// Serialize the table into its FWBT wire form
    ///
    /// Panics if the assembled length deviates from the format's length
    /// law; that can only be caused by a serializer defect, so no malformed
    /// bytes are ever returned.
    pub fn serialize(&self) -> Vec<u8> {
        let header = self.header();

        let mut data = Vec::new();
        data.extend_from_slice(&encoder::encode_header(
            self.key_width,
            self.value_width,
            header.entry_count,
        ));
        for record in &self.records {
            data.extend_from_slice(&record.key);
            data.extend_from_slice(&record.value);
        }

        assert_eq!(
            Some(data.len() as u64),
            header.total_size(),
            "serialized length violates the FWBT length law"
        );

        data
    }
}
