//! Record store engine for strand
//!
//! `RecordStore` owns the record lifecycle: create with atomic dedup,
//! lookup by content hash or raw value, delete, and full enumeration,
//! over any `RecordBackend`.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod clock;
pub mod store;

pub use clock::MonotonicClock;
pub use store::RecordStore;
