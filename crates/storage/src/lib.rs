//! Storage backends for strand
//!
//! The persistence mechanism is a pluggable boundary: a `RecordBackend`
//! keyed by content hash with an atomic compare-and-insert primitive.
//! Two implementations are provided:
//! - `MemoryBackend`: RwLock-protected in-memory image (ephemeral stores)
//! - `FileBackend`: the same image with a write-through atomic JSON
//!   snapshot on disk

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod backend;
pub mod file;
pub mod memory;

pub use backend::{InsertOutcome, RecordBackend};
pub use file::FileBackend;
pub use memory::MemoryBackend;
