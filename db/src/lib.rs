//! Data access for the Roster user collection.
//!
//! [`storage::Storage`] is the seam the API depends on; [`storage::mongodb`]
//! provides the MongoDB implementation. Every driver outcome is translated
//! into a [`storage::StoreError`] here so callers never inspect driver
//! errors themselves.

pub mod models;
pub mod storage;
