//! Boundary facade
//!
//! The five operations a front-end consumes, over an injected
//! `RecordStore`. Transports stay out of scope: an HTTP layer or CLI
//! maps these results onto its own status codes and rendering.
//!
//! ## Identifier resolution
//!
//! `get_string` and `delete_string` accept either form of identity:
//! a 64-hex-digit content hash is tried as an id; anything else is
//! treated as a raw value and resolved through its hash.

use crate::types::{InterpretedQuery, ListResponse, PhraseResponse};
use std::path::Path;
use strand_core::{ContentHash, Error, Result, StringRecord};
use strand_engine::RecordStore;
use strand_query::{filter, translate, QueryParams};
use tracing::debug;

/// High-level handle over the record store and query engine
///
/// `Send + Sync`; share one instance via `Arc` across request handlers.
pub struct Strand {
    store: RecordStore,
}

impl Strand {
    /// In-memory instance, nothing persisted
    pub fn ephemeral() -> Self {
        Self {
            store: RecordStore::ephemeral(),
        }
    }

    /// File-backed instance persisting to the given snapshot path
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self {
            store: RecordStore::open(path)?,
        })
    }

    /// Wrap an already-constructed store
    pub fn with_store(store: RecordStore) -> Self {
        Self { store }
    }

    /// Direct access to the underlying store
    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    /// Analyze and store a string
    ///
    /// Input shape is enforced by the type system at this boundary; a
    /// request that deserialized to a `&str` is a valid value, so the
    /// only failure here is `DuplicateRecord` (or a backend fault).
    pub fn create_string(&self, value: &str) -> Result<StringRecord> {
        self.store.create(value)
    }

    /// Fetch a record by content hash or raw value
    pub fn get_string(&self, identifier: &str) -> Result<StringRecord> {
        match ContentHash::parse(identifier) {
            Some(id) => self.store.get_by_id(&id),
            None => self.store.get_by_value(identifier),
        }
    }

    /// Delete a record by content hash or raw value
    pub fn delete_string(&self, identifier: &str) -> Result<()> {
        match ContentHash::parse(identifier) {
            Some(id) => self.store.delete(&id),
            None => match self.store.delete(&ContentHash::of(identifier)) {
                // Name the value the caller gave, not the derived hash
                Err(Error::NotFound(_)) => Err(Error::NotFound(identifier.to_string())),
                other => other,
            },
        }
    }

    /// List records matching structured filter parameters
    pub fn list_strings(&self, params: QueryParams) -> Result<ListResponse> {
        let predicate = params.into_predicate()?;
        let records = filter(&predicate, self.store.list_all()?);
        debug!(count = records.len(), "structured list query");
        Ok(ListResponse {
            count: records.len(),
            records,
            filters_applied: predicate,
        })
    }

    /// List records matching a natural-language phrase
    ///
    /// `Unparseable` when no translation rule fires; an understood phrase
    /// with zero matches is a success with `count = 0`.
    pub fn list_strings_by_phrase(&self, phrase: &str) -> Result<PhraseResponse> {
        let predicate = translate(phrase)?;
        let records = filter(&predicate, self.store.list_all()?);
        debug!(count = records.len(), phrase, "phrase list query");
        Ok(PhraseResponse {
            count: records.len(),
            records,
            interpreted: InterpretedQuery {
                original: phrase.to_string(),
                predicate,
            },
        })
    }
}
