//! strand - content-addressed string analysis store
//!
//! Strings are analyzed into a derived property set, stored under their
//! SHA-256 content hash with duplicate rejection, and queried through a
//! shared predicate model fed by either structured parameters or a small
//! set of natural-language phrasings.
//!
//! # Quick Start
//!
//! ```
//! use strand::{Strand, QueryParams};
//!
//! let db = Strand::ephemeral();
//!
//! let record = db.create_string("racecar")?;
//! assert!(record.properties.is_palindrome);
//!
//! let resp = db.list_strings(QueryParams {
//!     is_palindrome: Some(true),
//!     ..Default::default()
//! })?;
//! assert_eq!(resp.count, 1);
//! # Ok::<(), strand::Error>(())
//! ```
//!
//! # Architecture
//!
//! The facade in `strand-api` fronts the record store engine and the
//! query engine; internal layering (core types, storage backends) is
//! re-exported here only where callers need it.

pub use strand_api::{InterpretedQuery, ListResponse, PhraseResponse, Strand};
pub use strand_core::{
    analyze, ContentHash, Error, Predicate, PropertySet, Result, StringRecord,
};
pub use strand_engine::RecordStore;
pub use strand_query::{filter, translate, QueryParams};
pub use strand_storage::{FileBackend, InsertOutcome, MemoryBackend, RecordBackend};
