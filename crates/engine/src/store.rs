//! RecordStore: lifecycle and operations over a pluggable backend
//!
//! ## Design
//!
//! The RecordStore is a thin layer over a `RecordBackend`. It owns no
//! record state itself; it computes identity and properties, stamps
//! timestamps, and delegates persistence. It is an explicit injected
//! handle: opened once, passed to callers, never ambient global state.
//!
//! ## Thread Safety
//!
//! `Send + Sync`; share via `Arc`. Dedup relies on the backend's atomic
//! `insert_if_absent`, so racing creates for identical content resolve to
//! exactly one winner.

use crate::clock::MonotonicClock;
use std::path::Path;
use std::sync::Arc;
use strand_core::{analyze, ContentHash, Error, Result, StringRecord};
use strand_storage::{FileBackend, InsertOutcome, MemoryBackend, RecordBackend};
use tracing::{debug, info};

/// Content-addressed store of analyzed strings
pub struct RecordStore {
    backend: Arc<dyn RecordBackend>,
    clock: MonotonicClock,
}

impl RecordStore {
    /// Create an ephemeral in-memory store
    pub fn ephemeral() -> Self {
        info!("opening ephemeral record store");
        Self::with_backend(Arc::new(MemoryBackend::new()))
    }

    /// Open a file-backed store at the given snapshot path
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::with_backend(Arc::new(FileBackend::open(path)?)))
    }

    /// Build a store over a caller-supplied backend
    pub fn with_backend(backend: Arc<dyn RecordBackend>) -> Self {
        Self {
            backend,
            clock: MonotonicClock::new(),
        }
    }

    /// Analyze and persist a value as a new record
    ///
    /// Fails with `DuplicateRecord` when a record with the same content
    /// hash is already stored; the existing record (including its
    /// timestamp) is left untouched. The duplicate check and the insert
    /// are one atomic backend operation, so no partial write can occur.
    pub fn create(&self, value: &str) -> Result<StringRecord> {
        let id = ContentHash::of(value);
        let record = StringRecord {
            id: id.clone(),
            value: value.to_string(),
            properties: analyze(value),
            created_at: self.clock.now(),
        };

        match self.backend.insert_if_absent(record.clone())? {
            InsertOutcome::Inserted => {
                debug!(id = %id, length = record.properties.length, "created record");
                Ok(record)
            }
            InsertOutcome::Duplicate => {
                debug!(id = %id, "rejected duplicate create");
                Err(Error::DuplicateRecord(id))
            }
        }
    }

    /// Fetch a record by content hash
    pub fn get_by_id(&self, id: &ContentHash) -> Result<StringRecord> {
        self.backend
            .get(id)?
            .ok_or_else(|| Error::NotFound(id.to_string()))
    }

    /// Fetch a record by its raw value
    ///
    /// Equivalent to hashing the value and calling `get_by_id`; the
    /// `NotFound` error names the raw value the caller asked for.
    pub fn get_by_value(&self, value: &str) -> Result<StringRecord> {
        self.backend
            .get(&ContentHash::of(value))?
            .ok_or_else(|| Error::NotFound(value.to_string()))
    }

    /// Delete a record by content hash
    ///
    /// Deleting a nonexistent id is `NotFound`, not a no-op success.
    pub fn delete(&self, id: &ContentHash) -> Result<()> {
        if self.backend.remove(id)? {
            debug!(id = %id, "deleted record");
            Ok(())
        } else {
            Err(Error::NotFound(id.to_string()))
        }
    }

    /// Enumerate all records in insertion order
    pub fn list_all(&self) -> Result<Vec<StringRecord>> {
        self.backend.scan()
    }

    /// Number of stored records
    pub fn len(&self) -> Result<usize> {
        self.backend.len()
    }

    /// Whether the store holds no records
    pub fn is_empty(&self) -> Result<bool> {
        self.backend.is_empty()
    }
}
