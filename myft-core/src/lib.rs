#![no_std]

//! MYFT Core - Binary Record File Format Definitions
//!
//! This crate provides the wire format for `.myft` record files: the 14-byte
//! big-endian header, the record payload layout and the shift-xor checksum.
//! It performs no I/O; the `myft` crate builds file access on top of it.

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod checksum;
pub mod error;
pub mod format;
pub mod records;
pub mod traits;
pub mod validation;

pub use checksum::{checksum, checksum_bytes, Checksum};
pub use error::*;
pub use format::*;
pub use records::{encode_payload_into, parse_file, Payload, Records};
pub use traits::StorageBackend;
pub use validation::{validate_magic, validate_payload_len, verify_checksum};

#[cfg(feature = "alloc")]
pub use records::{decode, encode};
