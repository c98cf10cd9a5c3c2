//! Pure FWBT encoder
//!
//! Assembles conformant FWBT files from table dimensions and a byte
//! source. The encoder performs no I/O and accepts the degenerate cases
//! the wire format itself allows (zero widths, zero entries).

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

use crate::format::FwbtHeader;
#[cfg(feature = "alloc")]
use crate::validation;
#[cfg(feature = "alloc")]
use crate::ByteSource;

/// Encode the fixed 17-byte header for the given table dimensions
pub const fn encode_header(
    key_width: u32,
    value_width: u32,
    entry_count: u32,
) -> [u8; FwbtHeader::SIZE] {
    FwbtHeader::new(key_width, value_width, entry_count).to_bytes_array()
}

/// Encode a table body: `entry_count` records of key bytes then value bytes
///
/// Records are emitted in index order with no padding or separators. An
/// entry count of zero yields an empty body. The returned length is always
/// `entry_count * (key_width + value_width)`.
#[cfg(feature = "alloc")]
pub fn encode_body<S: ByteSource>(
    entry_count: u32,
    key_width: u32,
    value_width: u32,
    source: &mut S,
) -> Vec<u8> {
    let key_width = key_width as usize;
    let record_width = key_width + value_width as usize;

    let mut body = Vec::with_capacity(record_width.saturating_mul(entry_count as usize));
    for _ in 0..entry_count {
        let start = body.len();
        body.resize(start + record_width, 0);
        let (key, value) = body[start..].split_at_mut(key_width);
        source.fill(key);
        source.fill(value);
    }

    body
}

/// Encode a complete FWBT file: header followed by body
///
/// Panics if the assembled length deviates from the format's length law
/// `17 + entry_count * (key_width + value_width)`. That mismatch can only
/// be caused by an encoder defect, never by input values, so it aborts
/// assembly instead of returning a malformed file. The check is retained
/// in release builds.
#[cfg(feature = "alloc")]
pub fn encode_file<S: ByteSource>(
    key_width: u32,
    value_width: u32,
    entry_count: u32,
    source: &mut S,
) -> Vec<u8> {
    let mut data = Vec::new();
    data.extend_from_slice(&encode_header(key_width, value_width, entry_count));
    data.extend_from_slice(&encode_body(entry_count, key_width, value_width, source));

    let expected = validation::total_size(key_width, value_width, entry_count);
    assert_eq!(
        Some(data.len() as u64),
        expected,
        "encoded length violates the FWBT length law"
    );

    data
}

#[cfg(all(test, feature = "alloc"))]
mod tests {
    use super::*;
    use crate::source::{SliceSource, ZeroSource};

    #[test]
    fn test_encode_header_is_17_bytes() {
        let header = encode_header(4, 8, 10);
        assert_eq!(header.len(), 17);
        assert_eq!(&header[0..4], b"FWBT");
        assert_eq!(header[4], 1);
    }

    #[test]
    fn test_length_law() {
        let cases = [
            (4u32, 8u32, 10u32),
            (1, 1, 1),
            (16, 64, 1000),
            (0, 8, 3),
            (4, 0, 3),
            (0, 0, 7),
        ];
        for (kw, vw, ec) in cases {
            let data = encode_file(kw, vw, ec, &mut ZeroSource);
            let expected = 17 + ec as usize * (kw as usize + vw as usize);
            assert_eq!(data.len(), expected, "kw={kw} vw={vw} ec={ec}");
        }
    }

    #[test]
    fn test_zero_entries_yield_header_only_file() {
        let data = encode_file(4, 8, 0, &mut ZeroSource);
        assert_eq!(data.len(), 17);
        assert_eq!(encode_body(0, 4, 8, &mut ZeroSource), Vec::new());
    }

    #[test]
    fn test_body_is_drawn_from_source_in_order() {
        let seed = [0xaa, 0xbb, 0xcc];
        let body = encode_body(2, 2, 1, &mut SliceSource::new(&seed));
        assert_eq!(body, [0xaa, 0xbb, 0xcc, 0xaa, 0xbb, 0xcc]);
    }

    #[test]
    fn test_reference_scenario() {
        // 4-byte keys, 8-byte values, 10 records: 17 + 10 * 12 = 137 bytes
        let data = encode_file(4, 8, 10, &mut ZeroSource);
        assert_eq!(data.len(), 137);
        assert_eq!(data[0], b'F');
        assert_eq!(&data[0..4], b"FWBT");
        assert_eq!(data[4], 0x01);
        assert_eq!(&data[5..9], &[0x00, 0x00, 0x00, 0x04]);
        assert_eq!(&data[9..13], &[0x00, 0x00, 0x00, 0x08]);
        assert_eq!(&data[13..17], &[0x00, 0x00, 0x00, 0x0a]);
        assert_eq!(data[17..].len(), 120);
    }

    #[test]
    fn test_body_segments_exactly_into_records() {
        let kw = 3usize;
        let vw = 5usize;
        let ec = 9usize;
        let data = encode_file(kw as u32, vw as u32, ec as u32, &mut ZeroSource);

        let body = &data[17..];
        let mut chunks = body.chunks_exact(kw + vw);
        assert_eq!(chunks.by_ref().count(), ec);
        assert!(chunks.remainder().is_empty());
    }

    #[test]
    fn test_zero_width_keys_do_not_disturb_framing() {
        let seed = [1, 2, 3, 4];
        let data = encode_file(0, 2, 2, &mut SliceSource::new(&seed));
        assert_eq!(data.len(), 17 + 4);
        assert_eq!(&data[17..], &[1, 2, 3, 4]);
    }
}
