//! File I/O operations for `.myft` files

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use myft_core::{parse_file, FileHeader, HexPreview, HEADER_SIZE};
use tracing::{debug, warn};

use super::{decode_bytes, parallel, stream};
use crate::{CodecConfig, CodecError, Result};

/// Write records to `path`, creating or truncating the file
pub fn write_file<P: AsRef<Path>>(path: P, records: &[i32]) -> Result<()> {
    write_file_with(path, records, &CodecConfig::default())
}

/// Write records to `path` with explicit buffering, parallelism and sync settings
///
/// The header is built before the file is touched, so an over-long record
/// sequence fails with [`CodecError::TooManyRecords`] without creating it.
/// On an I/O error the file may be left partially written.
pub fn write_file_with<P: AsRef<Path>>(
    path: P,
    records: &[i32],
    config: &CodecConfig,
) -> Result<()> {
    let path = path.as_ref();
    let header = FileHeader::for_records(records)?;
    let payload = parallel::encode_payload(records, config)?;

    let file = File::create(path)?;
    let mut writer = BufWriter::with_capacity(config.buffer_capacity, file);
    writer.write_all(&header.to_bytes_array())?;
    writer.write_all(&payload)?;

    let file = writer.into_inner().map_err(|err| err.into_error())?;
    if config.sync {
        file.sync_all()?;
    }

    debug!(
        path = %path.display(),
        records = header.record_count,
        checksum = %format_args!("0x{:08X}", header.checksum),
        "wrote record file"
    );
    Ok(())
}

/// Read and fully validate the records stored at `path`
pub fn read_file<P: AsRef<Path>>(path: P) -> Result<Vec<i32>> {
    read_file_with(path, &CodecConfig::default())
}

/// Read and fully validate the records stored at `path`, decoding large
/// payloads in parallel according to `config`
pub fn read_file_with<P: AsRef<Path>>(path: P, config: &CodecConfig) -> Result<Vec<i32>> {
    let path = path.as_ref();
    let bytes = fs::read(path)?;

    let records =
        decode_bytes(&bytes, config).inspect_err(|err| log_rejected(path, &bytes, err))?;

    debug!(
        path = %path.display(),
        records = records.len(),
        "read record file"
    );
    Ok(records)
}

/// Read and validate only the header of the file at `path`
///
/// Checks the header length and magic bytes; the payload is not read.
pub fn read_header<P: AsRef<Path>>(path: P) -> Result<FileHeader> {
    let path = path.as_ref();
    let mut file = File::open(path)?;
    let mut bytes = [0u8; HEADER_SIZE];
    let n = stream::read_full(&mut file, &mut bytes)?;

    FileHeader::from_bytes(&bytes[..n])
        .map_err(CodecError::from)
        .inspect_err(|err| log_rejected(path, &bytes[..n], err))
}

/// Structural summary of a record file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FileSummary {
    /// Decoded header
    pub header: FileHeader,
    /// Checksum recomputed over the payload
    pub computed_checksum: u32,
    /// File length in bytes
    pub file_len: u64,
}

impl FileSummary {
    /// Whether the stored checksum matches the payload
    pub fn is_intact(&self) -> bool {
        self.header.checksum == self.computed_checksum
    }
}

impl std::fmt::Display for FileSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} computed=0x{:08X} ({}) bytes={}",
            self.header,
            self.computed_checksum,
            if self.is_intact() { "ok" } else { "MISMATCH" },
            self.file_len
        )
    }
}

/// Inspect the file at `path` without keeping its records
///
/// Magic and length errors are returned as usual. A checksum mismatch is not
/// an error here; it is reported through [`FileSummary::is_intact`].
pub fn inspect_file<P: AsRef<Path>>(path: P) -> Result<FileSummary> {
    let path = path.as_ref();
    let bytes = fs::read(path)?;

    let (header, payload) = parse_file(&bytes)
        .map_err(CodecError::from)
        .inspect_err(|err| log_rejected(path, &bytes, err))?;

    Ok(FileSummary {
        header,
        computed_checksum: payload.checksum(),
        file_len: bytes.len() as u64,
    })
}

pub(crate) fn log_rejected(path: &Path, bytes: &[u8], err: &CodecError) {
    if err.is_format_error() {
        warn!(
            path = %path.display(),
            len = bytes.len(),
            head = %HexPreview(bytes),
            "rejected record file: {err}"
        );
    }
}
