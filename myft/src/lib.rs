//! MYFT - Binary Record Files
//!
//! This library reads and writes `.myft` files: a 14-byte big-endian header
//! (magic `MYFT`, version, record count, checksum) followed by the records as
//! big-endian `i32` values.
//!
//! ## Architecture
//!
//! - **myft-core**: Pure format specification, checksum and validation (no I/O)
//! - **myft**: File, stream, memory-mapped and async I/O on top of it
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use myft::{read_file, write_file, CodecError};
//!
//! fn example() -> Result<(), CodecError> {
//!     write_file("data.myft", &[100, 200, 300, 400, 500])?;
//!     let records = read_file("data.myft")?;
//!     assert_eq!(records, [100, 200, 300, 400, 500]);
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **mmap**: Validated, zero-copy record access through [`RecordFile`]
//! - **async**: `tokio` versions of the file operations
//! - **serde**: Serializable [`FileHeader`] and [`FileSummary`]

// Re-export format definitions
pub use myft_core::{
    checksum, checksum_bytes, Checksum, FileHeader, FormatError, HexPreview, Payload, Records,
    StorageBackend, HEADER_SIZE, MAGIC, RECORD_SIZE, VERSION,
};

pub mod codec;
pub mod config;
pub mod error;
#[cfg(feature = "mmap")]
pub mod mmap_backend;
#[cfg(feature = "async")]
pub mod async_io;

pub use codec::{
    decode_bytes, encode_bytes, inspect_file, read_file, read_file_with, read_from, read_header,
    write_file, write_file_with, write_to, FileSummary,
};
pub use config::CodecConfig;
pub use error::{CodecError, Result};

#[cfg(feature = "mmap")]
pub use mmap_backend::RecordFile;

#[cfg(feature = "async")]
pub use async_io::{read_file_async, write_file_async, write_file_async_with};
