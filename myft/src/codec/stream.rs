//! Streaming codec over arbitrary readers and writers

use std::io::{self, Read, Write};

use myft_core::{
    checksum, encode_payload_into, verify_checksum, FileHeader, HEADER_SIZE, RECORD_SIZE,
};

use crate::{CodecError, Result};

/// Records encoded per write call
const WRITE_CHUNK_RECORDS: usize = 4096;

/// Upper bound on the up-front allocation for an untrusted record count
const MAX_PREALLOC_RECORDS: usize = 1 << 20;

/// Bytes read per payload read call
const READ_CHUNK_BYTES: usize = 64 * 1024;

/// Write a complete file image to `writer`
///
/// The payload is encoded in fixed-size chunks, so memory use does not grow
/// with the record count. The writer is not flushed.
pub fn write_to<W: Write>(mut writer: W, records: &[i32]) -> Result<()> {
    let header = FileHeader::for_records(records)?;
    writer.write_all(&header.to_bytes_array())?;

    let mut buffer = vec![0u8; WRITE_CHUNK_RECORDS.min(records.len()) * RECORD_SIZE];
    for chunk in records.chunks(WRITE_CHUNK_RECORDS) {
        let out = &mut buffer[..chunk.len() * RECORD_SIZE];
        encode_payload_into(chunk, out)?;
        writer.write_all(out)?;
    }
    Ok(())
}

/// Read and fully validate a complete file image from `reader`
///
/// Applies the same checks as [`crate::read_file`]: the stream must end
/// exactly after `record_count` records, and the checksum must match.
pub fn read_from<R: Read>(mut reader: R) -> Result<Vec<i32>> {
    let mut head = [0u8; HEADER_SIZE];
    let n = read_full(&mut reader, &mut head)?;
    let header = FileHeader::from_bytes(&head[..n])?;

    let expected = header.payload_len();
    let mut records =
        Vec::with_capacity((header.record_count as usize).min(MAX_PREALLOC_RECORDS));
    let mut buffer = vec![0u8; READ_CHUNK_BYTES];
    let mut consumed = 0u64;

    while consumed < expected {
        let want = (expected - consumed).min(READ_CHUNK_BYTES as u64) as usize;
        let got = read_full(&mut reader, &mut buffer[..want])?;
        consumed += got as u64;
        records.extend(
            buffer[..got - got % RECORD_SIZE]
                .chunks_exact(RECORD_SIZE)
                .map(|group| i32::from_be_bytes([group[0], group[1], group[2], group[3]])),
        );
        if got < want {
            return Err(CodecError::Truncated {
                expected: header.file_len(),
                actual: HEADER_SIZE as u64 + consumed,
            });
        }
    }

    let trailing = io::copy(&mut reader, &mut io::sink())?;
    if trailing > 0 {
        return Err(CodecError::Truncated {
            expected: header.file_len(),
            actual: header.file_len() + trailing,
        });
    }

    verify_checksum(&header, checksum(&records))?;
    Ok(records)
}

/// Fill `buf` from `reader`, stopping early only at end of stream
///
/// Returns the number of bytes read.
pub(crate) fn read_full<R: Read>(reader: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
            Err(err) => return Err(err),
        }
    }
    Ok(filled)
}
