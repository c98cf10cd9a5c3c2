#![no_std]

//! FWBT Core - Fixed Width Binary Table format definitions
//!
//! This crate provides the wire format definitions, validation utilities and
//! the pure encoder for FWBT tables. It performs no I/O; concrete file and
//! table implementations live in the `fwbt` crate.

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod encoder;
pub mod error;
pub mod format;
pub mod source;
pub mod validation;

pub use error::*;
pub use format::*;
pub use source::*;

/// Supplier of body bytes for the encoder
///
/// Abstracts where record bytes come from so that generation can be driven
/// by a random number generator in production and by a fixed sequence in
/// tests.
pub trait ByteSource {
    /// Produce the next body byte
    fn next_byte(&mut self) -> u8;

    /// Fill `buf` entirely with bytes from this source
    fn fill(&mut self, buf: &mut [u8]) {
        for slot in buf.iter_mut() {
            *slot = self.next_byte();
        }
    }
}
