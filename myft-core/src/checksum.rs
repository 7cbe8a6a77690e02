//! Shift-xor checksum over the record payload
//!
//! The checksum folds every payload byte into a 32-bit register:
//! `c = (c << 1) ^ byte`, starting from zero and discarding bits shifted out
//! of the top. Records are fed as their big-endian bytes, so the value is a
//! function of the logical integers and never of host byte order.
//!
//! Each byte is shifted one position further per following byte, so only the
//! last 32 payload bytes (8 records) can influence the result.

use crate::format::RECORD_SIZE;

/// Incremental checksum state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Checksum {
    state: u32,
}

impl Checksum {
    /// Start a new checksum at zero
    pub const fn new() -> Self {
        Self { state: 0 }
    }

    /// Fold raw bytes into the checksum
    #[inline]
    pub fn update(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.state = (self.state << 1) ^ u32::from(byte);
        }
    }

    /// Fold one record as its big-endian bytes
    #[inline]
    pub fn update_record(&mut self, record: i32) {
        self.update(&record.to_be_bytes());
    }

    /// Current checksum value
    pub const fn finish(&self) -> u32 {
        self.state
    }
}

/// Checksum of a record sequence
pub fn checksum(records: &[i32]) -> u32 {
    let mut sum = Checksum::new();
    for &record in records {
        sum.update_record(record);
    }
    sum.finish()
}

/// Checksum of an already encoded (big-endian) payload
pub fn checksum_bytes(bytes: &[u8]) -> u32 {
    let mut sum = Checksum::new();
    sum.update(bytes);
    sum.finish()
}

/// Number of trailing payload bytes that determine the checksum
pub const EFFECTIVE_WINDOW: usize = u32::BITS as usize;

/// Number of trailing records that determine the checksum
pub const EFFECTIVE_RECORDS: usize = EFFECTIVE_WINDOW / RECORD_SIZE;
