//! Record payload encoding and decoding
//!
//! Records are signed 32-bit integers stored big-endian, back to back, right
//! after the header. The payload is handled as a slice of `[u8; 4]` groups
//! (via `bytemuck`, alignment 1) and every value goes through
//! `to_be_bytes`/`from_be_bytes`; no `i32` memory is ever viewed as bytes.

use core::iter::FusedIterator;

use crate::checksum::checksum_bytes;
use crate::format::{FileHeader, HEADER_SIZE, RECORD_SIZE};
use crate::validation::validate_payload_len;
use crate::{FormatError, Result};

/// Length-validated view of an encoded record payload
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Payload<'a> {
    groups: &'a [[u8; RECORD_SIZE]],
}

impl<'a> Payload<'a> {
    /// Wrap payload bytes, checking they hold exactly `record_count` records
    pub fn new(bytes: &'a [u8], record_count: u32) -> Result<Self> {
        validate_payload_len(record_count, bytes.len())?;
        // Length is a whole number of records and alignment is 1.
        let groups =
            bytemuck::try_cast_slice(bytes).map_err(|_| FormatError::InsufficientBuffer)?;
        Ok(Self { groups })
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Whether the payload holds no records
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Decode the record at `index`
    pub fn get(&self, index: usize) -> Option<i32> {
        self.groups.get(index).map(|group| i32::from_be_bytes(*group))
    }

    /// Iterate over decoded records in file order
    pub fn iter(&self) -> Records<'a> {
        Records {
            inner: self.groups.iter(),
        }
    }

    /// Checksum of the payload bytes
    pub fn checksum(&self) -> u32 {
        checksum_bytes(self.as_bytes())
    }

    /// Raw big-endian payload bytes
    pub fn as_bytes(&self) -> &'a [u8] {
        bytemuck::cast_slice(self.groups)
    }
}

impl<'a> IntoIterator for Payload<'a> {
    type Item = i32;
    type IntoIter = Records<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over decoded records
#[derive(Debug, Clone)]
pub struct Records<'a> {
    inner: core::slice::Iter<'a, [u8; RECORD_SIZE]>,
}

impl Iterator for Records<'_> {
    type Item = i32;

    fn next(&mut self) -> Option<i32> {
        self.inner.next().map(|group| i32::from_be_bytes(*group))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Records<'_> {
    fn next_back(&mut self) -> Option<i32> {
        self.inner.next_back().map(|group| i32::from_be_bytes(*group))
    }
}

impl ExactSizeIterator for Records<'_> {}

impl FusedIterator for Records<'_> {}

/// Split a complete file image into its header and payload
///
/// Validates, in order: header length, magic bytes, payload length against
/// the declared record count. The checksum is not verified here.
pub fn parse_file(bytes: &[u8]) -> Result<(FileHeader, Payload<'_>)> {
    let header = FileHeader::from_bytes(bytes)?;
    let payload = Payload::new(&bytes[HEADER_SIZE..], header.record_count)?;
    Ok((header, payload))
}

/// Encode records big-endian into `out`
///
/// `out` must be exactly `records.len() * 4` bytes long.
pub fn encode_payload_into(records: &[i32], out: &mut [u8]) -> Result<()> {
    let expected = records
        .len()
        .checked_mul(RECORD_SIZE)
        .ok_or(FormatError::TooManyRecords(records.len()))?;
    if out.len() != expected {
        return Err(FormatError::InsufficientBuffer);
    }

    let groups: &mut [[u8; RECORD_SIZE]] = bytemuck::cast_slice_mut(out);
    for (group, record) in groups.iter_mut().zip(records) {
        *group = record.to_be_bytes();
    }
    Ok(())
}

/// Encode a complete file image: header followed by the payload
#[cfg(feature = "alloc")]
pub fn encode(records: &[i32]) -> Result<alloc::vec::Vec<u8>> {
    let header = FileHeader::for_records(records)?;
    let total = records
        .len()
        .checked_mul(RECORD_SIZE)
        .and_then(|len| len.checked_add(HEADER_SIZE))
        .ok_or(FormatError::TooManyRecords(records.len()))?;

    let mut bytes = alloc::vec![0u8; total];
    bytes[..HEADER_SIZE].copy_from_slice(&header.to_bytes_array());
    encode_payload_into(records, &mut bytes[HEADER_SIZE..])?;
    Ok(bytes)
}

/// Decode and fully validate a complete file image
///
/// On top of [`parse_file`], recomputes the checksum over the decoded
/// records and rejects the data on mismatch.
#[cfg(feature = "alloc")]
pub fn decode(bytes: &[u8]) -> Result<alloc::vec::Vec<i32>> {
    let (header, payload) = parse_file(bytes)?;
    let records: alloc::vec::Vec<i32> = payload.iter().collect();
    crate::validation::verify_checksum(&header, crate::checksum::checksum(&records))?;
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIVE: [u8; 34] = [
        b'M', b'Y', b'F', b'T', 0x00, 0x01, 0x00, 0x00, 0x00, 0x05, 0x00, 0x01, 0x23, 0x45, //
        0x00, 0x00, 0x00, 0x01, //
        0x00, 0x00, 0x00, 0x02, //
        0x00, 0x00, 0x00, 0x03, //
        0x00, 0x00, 0x00, 0x04, //
        0x00, 0x00, 0x00, 0x05,
    ];

    #[test]
    fn test_parse_file() {
        let (header, payload) = parse_file(&FIVE).unwrap();
        assert_eq!(header.record_count, 5);
        assert_eq!(payload.len(), 5);
        assert_eq!(payload.get(0), Some(1));
        assert_eq!(payload.get(4), Some(5));
        assert_eq!(payload.get(5), None);
        assert_eq!(payload.checksum(), header.checksum);

        let mut iter = payload.iter();
        assert_eq!(iter.len(), 5);
        assert_eq!(iter.next_back(), Some(5));
        assert_eq!(iter.next(), Some(1));
        assert_eq!(iter.len(), 3);
    }

    #[test]
    fn test_parse_file_rejects_short_payload() {
        assert_eq!(
            parse_file(&FIVE[..33]).map(|_| ()),
            Err(FormatError::Truncated {
                expected: 34,
                actual: 33
            })
        );
        assert!(matches!(
            parse_file(&FIVE[..13]),
            Err(FormatError::Truncated { expected: 14, .. })
        ));
    }

    #[test]
    fn test_parse_file_checks_magic_before_payload() {
        let mut bytes = FIVE;
        bytes[0] = b'X';
        assert_eq!(parse_file(&bytes[..20]).map(|_| ()), Err(FormatError::BadMagic));
    }

    #[test]
    fn test_encode_payload_into() {
        let mut out = [0u8; 8];
        encode_payload_into(&[-2, 0x0102_0304], &mut out).unwrap();
        assert_eq!(out, [0xFF, 0xFF, 0xFF, 0xFE, 0x01, 0x02, 0x03, 0x04]);

        let mut short = [0u8; 7];
        assert_eq!(
            encode_payload_into(&[1, 2], &mut short),
            Err(FormatError::InsufficientBuffer)
        );
    }

    #[test]
    fn test_empty_payload() {
        let bytes = FileHeader::new().to_bytes_array();
        let (header, payload) = parse_file(&bytes).unwrap();
        assert_eq!(header.record_count, 0);
        assert!(payload.is_empty());
        assert_eq!(payload.iter().next(), None);
        assert_eq!(payload.checksum(), 0);
    }

    #[test]
    fn test_trailing_bytes_rejected() {
        let mut bytes = [0u8; HEADER_SIZE + 2];
        bytes[..HEADER_SIZE].copy_from_slice(&FileHeader::new().to_bytes_array());
        assert_eq!(
            parse_file(&bytes).map(|_| ()),
            Err(FormatError::Truncated {
                expected: 14,
                actual: 16
            })
        );
    }
}
