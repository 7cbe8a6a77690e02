//! Abstract interfaces for MYFT storage
//!
//! Traits are pure interfaces over raw file bytes - no I/O.

pub mod backend;

pub use backend::StorageBackend;
