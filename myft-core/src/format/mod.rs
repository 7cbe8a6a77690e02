//! Binary format definitions for the MYFT file layout
//!
//! This module contains pure data structure definitions for the MYFT wire format.
//! No I/O operations - only format specifications.

pub mod constants;
pub mod dump;
pub mod header;

pub use constants::{HEADER_SIZE, MAGIC, MAX_RECORDS, RECORD_SIZE, VERSION};
pub use dump::HexPreview;
pub use header::{FileHeader, RawHeader};
