//! Memory-mapped file backend for `.myft` files
//!
//! [`RecordFile`] maps a record file read-only, validates it once on open
//! (header, payload length and checksum) and then decodes records straight
//! from the mapping on demand.

use std::fs::File;
use std::path::{Path, PathBuf};

use memmap2::{Mmap, MmapOptions};
use myft_core::{FileHeader, Payload, Records, StorageBackend, HEADER_SIZE};
use tracing::debug;

use crate::codec::log_rejected;
use crate::{CodecError, Result};

/// Validated, memory-mapped record file
pub struct RecordFile {
    mmap: Mmap,
    header: FileHeader,
    path: PathBuf,
}

impl RecordFile {
    /// Map and validate the file at `path`
    ///
    /// Performs the same checks as [`crate::read_file`]. Files shorter than
    /// the header are rejected before mapping.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let len = file.metadata()?.len();

        if len < HEADER_SIZE as u64 {
            let err = CodecError::Truncated {
                expected: HEADER_SIZE as u64,
                actual: len,
            };
            log_rejected(path, &[], &err);
            return Err(err);
        }

        // SAFETY: The mapping is read-only and every access goes through
        // bounds-checked slices. Concurrent modification of the file by
        // another process is outside what this type guards against.
        let mmap = unsafe { MmapOptions::new().map(&file)? };

        let header = match mmap.verify() {
            Ok((header, _)) => header,
            Err(err) => {
                let err = CodecError::from(err);
                log_rejected(path, &mmap, &err);
                return Err(err);
            }
        };

        debug!(
            path = %path.display(),
            records = header.record_count,
            "mapped record file"
        );

        Ok(Self {
            mmap,
            header,
            path: path.to_path_buf(),
        })
    }

    /// Decoded file header
    pub fn header(&self) -> &FileHeader {
        &self.header
    }

    /// Path the file was opened from
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.header.record_count as usize
    }

    /// Whether the file holds no records
    pub fn is_empty(&self) -> bool {
        self.header.record_count == 0
    }

    /// Decode the record at `index`
    pub fn get(&self, index: usize) -> Option<i32> {
        self.payload().get(index)
    }

    /// Iterate over records in file order
    pub fn iter(&self) -> Records<'_> {
        self.payload().iter()
    }

    /// Copy all records into a vector
    pub fn to_vec(&self) -> Vec<i32> {
        self.iter().collect()
    }

    fn payload(&self) -> Payload<'_> {
        // Validated in `open` and the mapping is read-only, so this never
        // falls back to the empty payload.
        self.parse().map(|(_, payload)| payload).unwrap_or_default()
    }
}

impl StorageBackend for RecordFile {
    fn as_slice(&self) -> &[u8] {
        &self.mmap
    }
}

impl<'a> IntoIterator for &'a RecordFile {
    type Item = i32;
    type IntoIter = Records<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl std::fmt::Debug for RecordFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecordFile")
            .field("path", &self.path)
            .field("header", &self.header)
            .field("size", &self.mmap.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::write_file;

    #[test]
    fn test_open_and_access() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mapped.myft");
        write_file(&path, &[100, 200, 300, 400, 500]).unwrap();

        let file = RecordFile::open(&path).unwrap();
        assert_eq!(file.len(), 5);
        assert!(!file.is_empty());
        assert_eq!(file.get(2), Some(300));
        assert_eq!(file.get(5), None);
        assert_eq!(file.to_vec(), [100, 200, 300, 400, 500]);
        assert_eq!(file.size(), 34);
        assert_eq!(file.header().checksum, 0x0068_A7D6);
        assert_eq!((&file).into_iter().rev().next(), Some(500));
    }

    #[test]
    fn test_open_empty_records() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.myft");
        write_file(&path, &[]).unwrap();

        let file = RecordFile::open(&path).unwrap();
        assert!(file.is_empty());
        assert_eq!(file.iter().count(), 0);
    }

    #[test]
    fn test_open_rejects_zero_length_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("zero.myft");
        std::fs::write(&path, b"").unwrap();

        assert!(matches!(
            RecordFile::open(&path),
            Err(CodecError::Truncated {
                expected: 14,
                actual: 0
            })
        ));
    }

    #[test]
    fn test_open_rejects_tampered_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tampered.myft");
        write_file(&path, &[1, 2, 3]).unwrap();

        let mut bytes = std::fs::read(&path).unwrap();
        bytes[HEADER_SIZE] ^= 0x10;
        std::fs::write(&path, &bytes).unwrap();

        assert!(matches!(
            RecordFile::open(&path),
            Err(CodecError::ChecksumMismatch { .. })
        ));
    }
}
