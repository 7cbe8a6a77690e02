//! Error type for MYFT file operations

use myft_core::FormatError;

/// Errors returned by the file-level codec
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// Underlying open, read or write failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// File does not start with the `MYFT` magic bytes
    #[error("invalid file format (bad magic number)")]
    BadMagic,

    /// File is shorter than the header, or its length disagrees with the
    /// declared record count
    #[error("truncated file: expected {expected} bytes, found {actual}")]
    Truncated { expected: u64, actual: u64 },

    /// Stored checksum differs from the one computed over the records
    #[error("checksum mismatch: stored 0x{stored:08X}, computed 0x{computed:08X}")]
    ChecksumMismatch { stored: u32, computed: u32 },

    /// Record count exceeds the 32-bit header field
    #[error("too many records for a 32-bit count: {0}")]
    TooManyRecords(usize),
}

impl From<FormatError> for CodecError {
    fn from(err: FormatError) -> Self {
        match err {
            FormatError::BadMagic => CodecError::BadMagic,
            FormatError::Truncated { expected, actual } => {
                CodecError::Truncated { expected, actual }
            }
            FormatError::ChecksumMismatch { stored, computed } => {
                CodecError::ChecksumMismatch { stored, computed }
            }
            FormatError::TooManyRecords(count) => CodecError::TooManyRecords(count),
            // Only reachable through a caller-sized buffer, which the file
            // codec always allocates itself.
            FormatError::InsufficientBuffer => CodecError::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                FormatError::InsufficientBuffer.to_string(),
            )),
        }
    }
}

impl CodecError {
    /// Whether the error describes a malformed file rather than an I/O failure
    pub fn is_format_error(&self) -> bool {
        !matches!(self, CodecError::Io(_))
    }
}

/// Result type for MYFT file operations
pub type Result<T> = std::result::Result<T, CodecError>;
