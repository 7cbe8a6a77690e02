//! Header field validation for the MYFT layout

use crate::format::MAGIC;
use crate::{FileHeader, FormatError, Result};

/// Validate magic bytes against `MYFT`
pub const fn validate_magic(actual: &[u8; 4]) -> Result<()> {
    if actual[0] != MAGIC[0]
        || actual[1] != MAGIC[1]
        || actual[2] != MAGIC[2]
        || actual[3] != MAGIC[3]
    {
        return Err(FormatError::BadMagic);
    }
    Ok(())
}

/// Compare a freshly computed checksum with the one stored in the header
pub const fn verify_checksum(header: &FileHeader, computed: u32) -> Result<()> {
    if header.checksum != computed {
        return Err(FormatError::ChecksumMismatch {
            stored: header.checksum,
            computed,
        });
    }
    Ok(())
}
