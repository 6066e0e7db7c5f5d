//! Record backend trait
//!
//! The persistence mechanism is a pluggable key-value boundary: records
//! keyed by content hash, with one compare-and-insert primitive that makes
//! the duplicate-check-then-insert sequence atomic.

use strand_core::{ContentHash, Result, StringRecord};

/// Outcome of a compare-and-insert attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    /// The record was inserted; no record with that hash existed
    Inserted,
    /// A record with that hash already exists; nothing was written
    Duplicate,
}

/// Pluggable storage backend for string records
///
/// Implementations must uphold:
/// - `insert_if_absent` is atomic per key: of two racing inserts for the
///   same hash, exactly one observes `Inserted`.
/// - `scan` returns records in insertion order and never yields a
///   partially written record.
pub trait RecordBackend: Send + Sync {
    /// Fetch a record by content hash
    fn get(&self, id: &ContentHash) -> Result<Option<StringRecord>>;

    /// Insert a record unless its hash is already present
    ///
    /// On `Duplicate` the existing record is left untouched.
    fn insert_if_absent(&self, record: StringRecord) -> Result<InsertOutcome>;

    /// Remove a record by content hash
    ///
    /// Returns `true` if the record existed.
    fn remove(&self, id: &ContentHash) -> Result<bool>;

    /// Enumerate all records in insertion order
    fn scan(&self) -> Result<Vec<StringRecord>>;

    /// Number of stored records
    fn len(&self) -> Result<usize>;

    /// Whether the backend holds no records
    fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }
}
