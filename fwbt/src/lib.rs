//! FWBT - Fixed Width Binary Table implementation
//!
//! This library produces, reads and mutates FWBT tables: a fixed 17-byte
//! header (magic, version, key width, value width, entry count) followed by
//! a flat array of fixed-size key/value records.
//!
//! ## Architecture
//!
//! FWBT follows a clean specification/implementation separation:
//!
//! - **fwbt-core**: Pure format definitions, encoding and validation (no I/O)
//! - **fwbt**: Concrete tables with file I/O, memory mapping and generation
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use fwbt::{generate_to_file, FwbtFile, GenerateConfig};
//!
//! fn example() -> fwbt::Result<()> {
//!     // Write a table with 4-byte keys, 8-byte values and 10 random records
//!     generate_to_file(GenerateConfig::default(), "table.fwbt")?;
//!
//!     // Read it back without copying record data
//!     let file = FwbtFile::open("table.fwbt")?;
//!     let view = file.map()?;
//!     for (key, value) in view.records() {
//!         println!("{key:02x?} -> {value:02x?}");
//!     }
//!     Ok(())
//! }
//! ```

// Re-export core abstractions and format definitions
pub use fwbt_core::{
    // Byte sources
    ByteSource, SliceSource, ZeroSource,
    // Format definitions
    FwbtHeader, FwbtRecord,
    // Error handling
    FwbtError,
    // Pure encoding and validation
    encoder, validation,
};

// Implementation modules
pub mod error;
pub mod file;
pub mod generator;
pub mod table;
#[cfg(feature = "mmap")]
pub mod view;

// Public exports
pub use error::{Error, Result};
pub use file::FwbtFile;
pub use generator::{generate, generate_to_file, generate_with, GenerateConfig, RandomSource};
pub use table::FwbtTable;

// Memory mapping features
#[cfg(feature = "mmap")]
pub use view::MmapTable;
