//! Format validation utilities for the MYFT layout
//!
//! This module contains pure validation functions with no I/O dependencies.

pub mod bounds;
pub mod format;

pub use bounds::{payload_len_for, validate_payload_len};
pub use format::{validate_magic, verify_checksum};
