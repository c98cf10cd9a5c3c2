//! Zero-copy memory-mapped FWBT views
//!
//! [`MmapTable`] maps a file and serves keys and values as slices borrowed
//! straight from the mapping. Record offsets are pure arithmetic on the
//! header dimensions, so lookups touch only the pages they need.

use std::fs::File;
use std::path::Path;

use fwbt_core::{validation, FwbtError, FwbtHeader};
use memmap2::Mmap;

use crate::error::Result;

/// Read-only, zero-copy view over a memory-mapped FWBT file
pub struct MmapTable {
    header: FwbtHeader,
    map: Mmap,
}

impl MmapTable {
    /// Map the file at `path` and validate its header and body length
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        // Safety: the mapping is read-only and this handle never writes
        // through it. Concurrent truncation of the underlying file by
        // another process is outside this API's contract.
        let map = unsafe { Mmap::map(&file)? };

        let header = FwbtHeader::from_bytes(&map)?;
        header.validate()?;
        validation::validate_body_size(
            (map.len() - FwbtHeader::SIZE) as u64,
            header.key_width,
            header.value_width,
            header.entry_count,
        )?;

        Ok(Self { header, map })
    }

    /// Header of the mapped file
    pub const fn header(&self) -> &FwbtHeader {
        &self.header
    }

    /// Number of records in the mapped file
    pub const fn len(&self) -> u32 {
        self.header.entry_count
    }

    /// True when the mapped file holds no records
    pub const fn is_empty(&self) -> bool {
        self.header.entry_count == 0
    }

    /// Byte offset of the record at `index`
    fn record_offset(&self, index: u32) -> Result<usize> {
        if index >= self.header.entry_count {
            return Err(FwbtError::OutOfRange.into());
        }
        let record_width = self.header.record_width() as usize;
        Ok(FwbtHeader::SIZE + index as usize * record_width)
    }

    /// Key bytes of the record at `index`
    pub fn key(&self, index: u32) -> Result<&[u8]> {
        let start = self.record_offset(index)?;
        Ok(&self.map[start..start + self.header.key_width as usize])
    }

    /// Value bytes of the record at `index`
    pub fn value(&self, index: u32) -> Result<&[u8]> {
        let start = self.record_offset(index)? + self.header.key_width as usize;
        Ok(&self.map[start..start + self.header.value_width as usize])
    }

    /// Key and value of the record at `index`
    pub fn record(&self, index: u32) -> Result<(&[u8], &[u8])> {
        let start = self.record_offset(index)?;
        let record_width = self.header.record_width() as usize;
        let record = &self.map[start..start + record_width];
        Ok(record.split_at(self.header.key_width as usize))
    }

    /// Find the index of the record with the given key
    pub fn find(&self, key: &[u8]) -> Option<u32> {
        (0..self.header.entry_count).find(|&index| {
            self.key(index)
                .map(|candidate| candidate == key)
                .unwrap_or(false)
        })
    }

    /// Iterator over `(key, value)` slices in index order
    pub fn records(&self) -> impl Iterator<Item = (&[u8], &[u8])> + '_ {
        (0..self.header.entry_count).filter_map(move |index| self.record(index).ok())
    }
}
