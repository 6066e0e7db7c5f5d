//! Error types for the strand record store
//!
//! This module defines all error types used throughout the system.
//! We use `thiserror` for automatic `Display` and `Error` trait
//! implementations.

use crate::types::ContentHash;
use std::io;
use thiserror::Error;

/// Result type alias for strand operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the strand record store
#[derive(Debug, Error)]
pub enum Error {
    /// Malformed request input (negative bounds, multi-character filters)
    ///
    /// Raised before the store is touched; the store is never consulted
    /// for an invalid request.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A record with the same content hash already exists
    ///
    /// The existing record is left untouched; this is idempotent
    /// rejection, not an upsert.
    #[error("record already exists: {0}")]
    DuplicateRecord(ContentHash),

    /// No record resolves to the given identifier (hash or raw value)
    #[error("record not found: {0}")]
    NotFound(String),

    /// The natural-language phrase matched none of the translator's rules
    #[error("unable to parse query phrase: {0:?}")]
    Unparseable(String),

    /// The persistence backend could not complete an operation
    ///
    /// Fatal to the request; the core never retries automatically.
    #[error("storage error: {0}")]
    Storage(String),

    /// I/O error from a file-backed backend
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    /// Whether this error describes a caller mistake rather than a fault
    ///
    /// Boundary layers map client errors to 4xx-style responses and the
    /// rest to server faults.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Error::InvalidInput(_)
                | Error::DuplicateRecord(_)
                | Error::NotFound(_)
                | Error::Unparseable(_)
        )
    }
}
