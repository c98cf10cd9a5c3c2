//! Random FWBT table generation
//!
//! Reproduces the reference generator behavior: every body byte is drawn
//! uniformly from `[0, 255]`, with default dimensions of 4-byte keys,
//! 8-byte values and 10 records. Generation is single-threaded and pure
//! given its byte source, so tests can swap in a deterministic source.

use std::path::Path;

use fwbt_core::{encoder, validation, ByteSource};
use rand::rngs::ThreadRng;
use rand::RngCore;

use crate::error::Result;

/// [`ByteSource`] backed by any `rand` generator
pub struct RandomSource<R: RngCore> {
    rng: R,
}

impl<R: RngCore> RandomSource<R> {
    /// Wrap an RNG as a byte source
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl Default for RandomSource<ThreadRng> {
    fn default() -> Self {
        Self::new(rand::thread_rng())
    }
}

impl<R: RngCore> ByteSource for RandomSource<R> {
    fn next_byte(&mut self) -> u8 {
        self.rng.next_u32() as u8
    }

    fn fill(&mut self, buf: &mut [u8]) {
        self.rng.fill_bytes(buf);
    }
}

/// Table dimensions for generation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenerateConfig {
    /// Bytes per key
    pub key_width: u32,
    /// Bytes per value
    pub value_width: u32,
    /// Number of records
    pub entry_count: u32,
}

impl GenerateConfig {
    /// Create a config for the given dimensions
    pub const fn new(key_width: u32, value_width: u32, entry_count: u32) -> Self {
        Self {
            key_width,
            value_width,
            entry_count,
        }
    }

    /// Total file size these dimensions produce
    pub const fn total_size(&self) -> Option<u64> {
        validation::total_size(self.key_width, self.value_width, self.entry_count)
    }
}

impl Default for GenerateConfig {
    /// Reference defaults: 4-byte keys, 8-byte values, 10 records
    fn default() -> Self {
        Self::new(4, 8, 10)
    }
}

/// Generate a table with random body bytes
pub fn generate(config: GenerateConfig) -> Vec<u8> {
    generate_with(config, &mut RandomSource::default())
}

/// Generate a table drawing body bytes from the given source
pub fn generate_with<S: ByteSource>(config: GenerateConfig, source: &mut S) -> Vec<u8> {
    encoder::encode_file(
        config.key_width,
        config.value_width,
        config.entry_count,
        source,
    )
}

/// Generate a table with random body bytes and write it to `path`
pub fn generate_to_file<P: AsRef<Path>>(config: GenerateConfig, path: P) -> Result<()> {
    std::fs::write(path, generate(config))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use fwbt_core::SliceSource;

    use super::*;

    #[test]
    fn test_default_config_produces_137_bytes() {
        let config = GenerateConfig::default();
        assert_eq!(config.total_size(), Some(137));

        let data = generate(config);
        assert_eq!(data.len(), 137);
        assert_eq!(&data[0..4], b"FWBT");
        assert_eq!(data[4], 1);
    }

    #[test]
    fn test_generation_is_deterministic_given_the_source() {
        let config = GenerateConfig::new(2, 2, 3);
        let seed = [7, 8, 9];

        let first = generate_with(config, &mut SliceSource::new(&seed));
        let second = generate_with(config, &mut SliceSource::new(&seed));
        assert_eq!(first, second);
    }

    #[test]
    fn test_random_source_fills_buffers() {
        let mut source = RandomSource::default();
        let mut buf = [0u8; 64];
        source.fill(&mut buf);
        // 64 random bytes are all zero with probability 2^-512
        assert_ne!(buf, [0u8; 64]);
    }
}
