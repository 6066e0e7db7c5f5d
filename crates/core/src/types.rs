//! Core types for the strand record store
//!
//! This module defines the foundational types:
//! - ContentHash: content-derived record identifier (SHA-256, lowercase hex)
//! - StringRecord: a stored string with its derived properties

use crate::analysis::PropertySet;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;

/// Number of hex digits in a SHA-256 content hash.
pub const CONTENT_HASH_LEN: usize = 64;

/// Content-derived identifier for a stored string
///
/// A ContentHash is the lowercase hex SHA-256 digest of a value's UTF-8
/// bytes. It serves as both primary key and content fingerprint: two
/// records with identical values are the same entity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentHash(String);

impl ContentHash {
    /// Derive the content hash of a string value
    pub fn of(value: &str) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(value.as_bytes());
        Self(hex::encode(hasher.finalize()))
    }

    /// Parse a ContentHash from an identifier string
    ///
    /// Accepts exactly 64 hex digits in either case; the stored form is
    /// normalized to lowercase. Returns `None` for anything else, which
    /// lets callers fall back to treating the identifier as a raw value.
    pub fn parse(s: &str) -> Option<Self> {
        if s.len() == CONTENT_HASH_LEN && s.bytes().all(|b| b.is_ascii_hexdigit()) {
            Some(Self(s.to_ascii_lowercase()))
        } else {
            None
        }
    }

    /// The hex digest as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A stored string and its derived analysis
///
/// Records are immutable after insert: `value` never changes, `properties`
/// is derived once at creation, and `id == ContentHash::of(value)` holds
/// for the record's whole lifetime. `created_at` is stamped by the store
/// at the moment of successful insert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StringRecord {
    /// Primary key: content hash of `value`
    pub id: ContentHash,
    /// The analyzed string
    pub value: String,
    /// Derived properties, computed once from `value`
    pub properties: PropertySet,
    /// UTC insert timestamp (RFC 3339 in serialized form)
    pub created_at: DateTime<Utc>,
}
