//! Whole-file and streaming codec for `.myft` files
//!
//! This module implements the blocking entry points: whole-file reads and
//! writes, stream-based variants over `Read`/`Write`, and header inspection.

mod file_io;
mod parallel;
mod stream;

pub use file_io::{
    inspect_file, read_file, read_file_with, read_header, write_file, write_file_with, FileSummary,
};
pub use stream::{read_from, write_to};

#[cfg(any(feature = "mmap", feature = "async"))]
pub(crate) use file_io::log_rejected;

use crate::{CodecConfig, Result};
use myft_core::{parse_file, verify_checksum, FileHeader, HEADER_SIZE};

/// Encode a complete file image in memory
pub fn encode_bytes(records: &[i32], config: &CodecConfig) -> Result<Vec<u8>> {
    let header = FileHeader::for_records(records)?;
    let payload = parallel::encode_payload(records, config)?;

    let mut bytes = Vec::with_capacity(HEADER_SIZE + payload.len());
    bytes.extend_from_slice(&header.to_bytes_array());
    bytes.extend_from_slice(&payload);
    Ok(bytes)
}

/// Decode and fully validate a complete file image held in memory
pub fn decode_bytes(bytes: &[u8], config: &CodecConfig) -> Result<Vec<i32>> {
    let (header, payload) = parse_file(bytes)?;
    let records = parallel::decode_payload(payload, config);
    verify_checksum(&header, myft_core::checksum(&records))?;
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CodecError;

    #[test]
    fn test_encode_bytes_layout() {
        let bytes = encode_bytes(&[1, 2, 3, 4, 5], &CodecConfig::default()).unwrap();
        assert_eq!(bytes.len(), 34);
        assert_eq!(&bytes[..4], b"MYFT");
        assert_eq!(&bytes[4..6], &[0x00, 0x01]);
        assert_eq!(&bytes[6..10], &[0x00, 0x00, 0x00, 0x05]);
        assert_eq!(&bytes[10..14], &[0x00, 0x01, 0x23, 0x45]);
        assert_eq!(&bytes[14..18], &[0x00, 0x00, 0x00, 0x01]);
        assert_eq!(&bytes[30..34], &[0x00, 0x00, 0x00, 0x05]);
    }

    #[test]
    fn test_decode_bytes_matches_core_decode() {
        let records = [i32::MIN, -1, 0, 1, i32::MAX];
        let bytes = encode_bytes(&records, &CodecConfig::default()).unwrap();
        assert_eq!(bytes, myft_core::encode(&records).unwrap());
        assert_eq!(decode_bytes(&bytes, &CodecConfig::default()).unwrap(), records);
        assert_eq!(myft_core::decode(&bytes).unwrap(), records);
    }

    #[test]
    fn test_decode_bytes_detects_tampering() {
        let mut bytes = encode_bytes(&[10, 20, 30], &CodecConfig::default()).unwrap();
        bytes[HEADER_SIZE + 5] ^= 0x80;
        assert!(matches!(
            decode_bytes(&bytes, &CodecConfig::default()),
            Err(CodecError::ChecksumMismatch { .. })
        ));
    }

    #[test]
    fn test_parallel_and_sequential_agree() {
        let records: Vec<i32> = (0..10_000).map(|i| i * 7919 - 5_000_000).collect();
        let sequential = CodecConfig::default().with_parallel_threshold(usize::MAX);
        let parallel = CodecConfig::default().with_parallel_threshold(1);

        let a = encode_bytes(&records, &sequential).unwrap();
        let b = encode_bytes(&records, &parallel).unwrap();
        assert_eq!(a, b);
        assert_eq!(decode_bytes(&b, &parallel).unwrap(), records);
        assert_eq!(decode_bytes(&a, &sequential).unwrap(), records);
    }
}
