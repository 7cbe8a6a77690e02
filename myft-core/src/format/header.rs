//! MYFT file header format definitions
//!
//! The header is 14 bytes with every multi-byte field stored big-endian.
//! [`RawHeader`] mirrors the on-disk bytes exactly (byte arrays only, so it
//! has no padding and alignment 1); [`FileHeader`] is the decoded form.

use bytemuck::{Pod, Zeroable};
use core::mem::size_of;

use super::constants::{HEADER_SIZE, MAGIC, RECORD_SIZE, VERSION};
use crate::error::{FormatError, Result};

/// Byte-exact image of the on-disk header
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Pod, Zeroable)]
pub struct RawHeader {
    pub magic: [u8; 4],
    pub version: [u8; 2],
    pub record_count: [u8; 4],
    pub checksum: [u8; 4],
}

const _: () = assert!(size_of::<RawHeader>() == HEADER_SIZE);

impl RawHeader {
    /// View the first [`HEADER_SIZE`] bytes of `bytes` as a raw header
    pub fn from_prefix(bytes: &[u8]) -> Result<&Self> {
        let prefix = bytes.get(..HEADER_SIZE).ok_or(FormatError::Truncated {
            expected: HEADER_SIZE as u64,
            actual: bytes.len() as u64,
        })?;
        // Alignment is 1 and the length is exact, so the cast cannot fail.
        bytemuck::try_from_bytes(prefix).map_err(|_| FormatError::InsufficientBuffer)
    }

    /// Raw header bytes
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

/// Decoded header for `.myft` files
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FileHeader {
    /// Magic bytes: "MYFT"
    pub magic: [u8; 4],
    /// Format version
    pub version: u16,
    /// Number of records following the header
    pub record_count: u32,
    /// Checksum over the big-endian record payload
    pub checksum: u32,
}

impl FileHeader {
    /// Magic bytes for `.myft` files
    pub const MAGIC: [u8; 4] = MAGIC;

    /// Current format version
    pub const VERSION: u16 = VERSION;

    /// Size of the header in bytes
    pub const SIZE: usize = HEADER_SIZE;

    /// Create a new header describing an empty payload
    pub const fn new() -> Self {
        Self {
            magic: Self::MAGIC,
            version: Self::VERSION,
            record_count: 0,
            checksum: 0,
        }
    }

    /// Build the header for a record sequence
    pub fn for_records(records: &[i32]) -> Result<Self> {
        let record_count =
            u32::try_from(records.len()).map_err(|_| FormatError::TooManyRecords(records.len()))?;

        Ok(Self {
            record_count,
            checksum: crate::checksum::checksum(records),
            ..Self::new()
        })
    }

    /// Validate the header magic
    pub fn is_valid(&self) -> bool {
        self.magic == Self::MAGIC
    }

    /// Number of payload bytes the header declares
    pub const fn payload_len(&self) -> u64 {
        self.record_count as u64 * RECORD_SIZE as u64
    }

    /// Total file length the header declares
    pub const fn file_len(&self) -> u64 {
        HEADER_SIZE as u64 + self.payload_len()
    }

    /// Parse header from bytes
    ///
    /// Checks the length and the magic bytes only; the payload is validated
    /// separately by [`crate::records::parse_file`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let raw = RawHeader::from_prefix(bytes)?;
        crate::validation::validate_magic(&raw.magic)?;
        Ok(Self::from(*raw))
    }

    /// Convert header to its on-disk bytes
    pub fn to_bytes_array(&self) -> [u8; HEADER_SIZE] {
        let raw = RawHeader::from(*self);
        let mut bytes = [0u8; HEADER_SIZE];
        bytes.copy_from_slice(raw.as_bytes());
        bytes
    }
}

impl Default for FileHeader {
    fn default() -> Self {
        Self::new()
    }
}

impl From<RawHeader> for FileHeader {
    fn from(raw: RawHeader) -> Self {
        Self {
            magic: raw.magic,
            version: u16::from_be_bytes(raw.version),
            record_count: u32::from_be_bytes(raw.record_count),
            checksum: u32::from_be_bytes(raw.checksum),
        }
    }
}

impl From<FileHeader> for RawHeader {
    fn from(header: FileHeader) -> Self {
        Self {
            magic: header.magic,
            version: header.version.to_be_bytes(),
            record_count: header.record_count.to_be_bytes(),
            checksum: header.checksum.to_be_bytes(),
        }
    }
}

impl core::fmt::Display for FileHeader {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "magic=")?;
        for &byte in &self.magic {
            if byte.is_ascii_graphic() {
                write!(f, "{}", byte as char)?;
            } else {
                write!(f, "\\x{byte:02X}")?;
            }
        }
        write!(
            f,
            " version={} records={} checksum=0x{:08X}",
            self.version, self.record_count, self.checksum
        )
    }
}
