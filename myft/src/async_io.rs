//! Async file operations for `.myft` files using tokio
//!
//! Same format and error semantics as the blocking functions; encoding and
//! validation run on the calling task, only the file access is async.

use std::path::Path;

use tokio::fs::File as AsyncFile;
use tokio::io::AsyncWriteExt;
use tracing::debug;

use crate::codec::{decode_bytes, encode_bytes, log_rejected};
use crate::{CodecConfig, Result};

/// Write records to `path`, creating or truncating the file
pub async fn write_file_async<P: AsRef<Path>>(path: P, records: &[i32]) -> Result<()> {
    write_file_async_with(path, records, &CodecConfig::default()).await
}

/// Write records to `path` with explicit parallelism and sync settings
pub async fn write_file_async_with<P: AsRef<Path>>(
    path: P,
    records: &[i32],
    config: &CodecConfig,
) -> Result<()> {
    let path = path.as_ref();
    let bytes = encode_bytes(records, config)?;

    let mut file = AsyncFile::create(path).await?;
    file.write_all(&bytes).await?;
    file.flush().await?;
    if config.sync {
        file.sync_all().await?;
    }

    debug!(
        path = %path.display(),
        records = records.len(),
        "wrote record file (async)"
    );
    Ok(())
}

/// Read and fully validate the records stored at `path`
pub async fn read_file_async<P: AsRef<Path>>(path: P) -> Result<Vec<i32>> {
    let path = path.as_ref();
    let bytes = tokio::fs::read(path).await?;

    let records = decode_bytes(&bytes, &CodecConfig::default())
        .inspect_err(|err| log_rejected(path, &bytes, err))?;

    debug!(
        path = %path.display(),
        records = records.len(),
        "read record file (async)"
    );
    Ok(records)
}
