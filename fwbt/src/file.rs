//! File handles for FWBT files
//!
//! [`FwbtFile`] is a thin handle: opening validates just the 17-byte
//! header, heavier access (full parse, memory-mapped view) is explicit.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use fwbt_core::FwbtHeader;

use crate::error::Result;
use crate::table::FwbtTable;

/// Handle for an FWBT file on disk
#[derive(Debug)]
pub struct FwbtFile {
    /// Header read when the file was opened
    pub header: FwbtHeader,
    /// Location of the file
    pub path: PathBuf,
}

impl FwbtFile {
    /// Open an existing FWBT file, reading and validating only the header
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_buf = path.as_ref().to_path_buf();

        let mut file = File::open(&path_buf)?;
        let mut header_bytes = [0u8; FwbtHeader::SIZE];
        file.read_exact(&mut header_bytes)?;

        let header = FwbtHeader::from_bytes(&header_bytes)?;

        Ok(Self {
            header,
            path: path_buf,
        })
    }

    /// Read the whole file and parse it into an owned table
    pub fn read_table(&self) -> Result<FwbtTable> {
        let data = std::fs::read(&self.path)?;
        Ok(FwbtTable::parse_bytes(&data)?)
    }

    /// Map the file and return a zero-copy view over its records
    #[cfg(feature = "mmap")]
    pub fn map(&self) -> Result<crate::view::MmapTable> {
        crate::view::MmapTable::open(&self.path)
    }

    /// Serialize `table` and write it to `path`
    pub fn write<P: AsRef<Path>>(table: &FwbtTable, path: P) -> Result<()> {
        std::fs::write(path, table.serialize())?;
        Ok(())
    }
}
