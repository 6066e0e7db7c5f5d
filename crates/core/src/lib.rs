//! Core types for strand
//!
//! This crate defines the foundational pieces used throughout the system:
//! - ContentHash: content-derived record identity (SHA-256, lowercase hex)
//! - StringRecord: a stored string with its derived properties
//! - PropertySet + analyze(): the pure string analyzer
//! - Predicate: the shared filter model consumed by both query front-ends
//! - Error: the error hierarchy

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod analysis;
pub mod error;
pub mod predicate;
pub mod types;

pub use analysis::{analyze, PropertySet};
pub use error::{Error, Result};
pub use predicate::Predicate;
pub use types::{ContentHash, StringRecord, CONTENT_HASH_LEN};
