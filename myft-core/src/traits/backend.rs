//! Storage backend abstraction shared by in-memory and mapped files

use crate::format::FileHeader;
use crate::records::{parse_file, Payload};
use crate::Result;

/// Trait for backends that hold a complete MYFT file image
pub trait StorageBackend {
    /// Get a slice of the underlying data
    fn as_slice(&self) -> &[u8];

    /// Get the size of the data in bytes
    fn size(&self) -> usize {
        self.as_slice().len()
    }

    /// Parse the stored bytes into header and payload
    fn parse(&self) -> Result<(FileHeader, Payload<'_>)> {
        parse_file(self.as_slice())
    }

    /// Parse and verify the stored checksum against the payload
    fn verify(&self) -> Result<(FileHeader, Payload<'_>)> {
        let (header, payload) = self.parse()?;
        crate::validation::verify_checksum(&header, payload.checksum())?;
        Ok((header, payload))
    }
}

impl StorageBackend for [u8] {
    fn as_slice(&self) -> &[u8] {
        self
    }
}

impl<const N: usize> StorageBackend for [u8; N] {
    fn as_slice(&self) -> &[u8] {
        self
    }
}

#[cfg(feature = "alloc")]
impl StorageBackend for alloc::vec::Vec<u8> {
    fn as_slice(&self) -> &[u8] {
        self
    }
}
