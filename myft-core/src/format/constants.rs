//! Format constants and magic bytes for the MYFT file layout

/// Magic bytes at offset 0 of every `.myft` file
pub const MAGIC: [u8; 4] = *b"MYFT";

/// Current format version
pub const VERSION: u16 = 1;

/// Fixed size of the on-disk header: magic, version, record count, checksum
pub const HEADER_SIZE: usize = 14;

/// Size of one encoded record (big-endian `i32`)
pub const RECORD_SIZE: usize = 4;

/// Largest record count the 32-bit header field can describe
pub const MAX_RECORDS: usize = u32::MAX as usize;

/// Byte offsets of the header fields
pub mod offsets {
    pub const MAGIC: usize = 0;
    pub const VERSION: usize = 4;
    pub const RECORD_COUNT: usize = 6;
    pub const CHECKSUM: usize = 10;
    pub const PAYLOAD: usize = super::HEADER_SIZE;
}
