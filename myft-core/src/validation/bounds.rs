//! Payload length validation for MYFT files
//!
//! Pure arithmetic on declared and actual sizes, with overflow protection.

use crate::format::{HEADER_SIZE, RECORD_SIZE};
use crate::{FormatError, Result};

/// Byte length of a payload holding `record_count` records
///
/// Computed in `u64` so that the largest 32-bit count cannot overflow on
/// 32-bit targets.
pub const fn payload_len_for(record_count: u32) -> u64 {
    record_count as u64 * RECORD_SIZE as u64
}

/// Validate that exactly `record_count` records follow the header
///
/// `actual` is the number of bytes remaining after the header. Returns the
/// payload length in bytes on success; a short or over-long payload is
/// reported as [`FormatError::Truncated`] with whole-file byte counts.
pub fn validate_payload_len(record_count: u32, actual: usize) -> Result<usize> {
    let expected = payload_len_for(record_count);

    if actual as u64 != expected {
        return Err(FormatError::Truncated {
            expected: HEADER_SIZE as u64 + expected,
            actual: HEADER_SIZE as u64 + actual as u64,
        });
    }

    Ok(actual)
}
