//! Error types for MYFT format operations

/// Errors that can occur while encoding or validating MYFT data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatError {
    /// Header does not start with the `MYFT` magic bytes
    BadMagic,
    /// Input is shorter than the header, or the payload length disagrees
    /// with the declared record count
    Truncated {
        /// Number of bytes the header (or header plus payload) requires
        expected: u64,
        /// Number of bytes actually present
        actual: u64,
    },
    /// Stored checksum differs from the one computed over the payload
    ChecksumMismatch { stored: u32, computed: u32 },
    /// Record count does not fit the 32-bit header field
    TooManyRecords(usize),
    /// Output buffer has the wrong size for the records being encoded
    InsufficientBuffer,
}

impl FormatError {
    /// Get a short stable name for the error kind, used in log fields
    pub const fn kind(&self) -> &'static str {
        match self {
            FormatError::BadMagic => "bad_magic",
            FormatError::Truncated { .. } => "truncated",
            FormatError::ChecksumMismatch { .. } => "checksum_mismatch",
            FormatError::TooManyRecords(_) => "too_many_records",
            FormatError::InsufficientBuffer => "insufficient_buffer",
        }
    }
}

impl core::fmt::Display for FormatError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            FormatError::BadMagic => write!(f, "Invalid MYFT magic bytes"),
            FormatError::Truncated { expected, actual } => {
                write!(f, "Truncated data: expected {expected} bytes, found {actual}")
            }
            FormatError::ChecksumMismatch { stored, computed } => write!(
                f,
                "Checksum mismatch: stored 0x{stored:08X}, computed 0x{computed:08X}"
            ),
            FormatError::TooManyRecords(count) => {
                write!(f, "Too many records for a 32-bit count: {count}")
            }
            FormatError::InsufficientBuffer => write!(f, "Insufficient buffer space"),
        }
    }
}

/// Result type for MYFT format operations
pub type Result<T> = core::result::Result<T, FormatError>;
