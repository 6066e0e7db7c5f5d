//! File-backed record backend
//!
//! # Design
//!
//! - The working image is the in-memory backend; the file is a
//!   write-through JSON snapshot of the full record list in insertion
//!   order, rewritten after every mutation.
//! - Snapshot writes are atomic: serialize to a sibling `.tmp` file, then
//!   rename over the snapshot. A crash mid-write leaves the previous
//!   snapshot intact.
//! - A persist mutex serializes snapshot writes; the scan that feeds a
//!   snapshot runs under that mutex, so the last writer always captures
//!   the latest image.

use crate::backend::{InsertOutcome, RecordBackend};
use crate::memory::MemoryBackend;
use parking_lot::Mutex;
use std::fs;
use std::path::{Path, PathBuf};
use strand_core::{ContentHash, Error, Result, StringRecord};
use tracing::{debug, info, warn};

/// Record backend persisted as a JSON snapshot file
#[derive(Debug)]
pub struct FileBackend {
    path: PathBuf,
    image: MemoryBackend,
    persist_lock: Mutex<()>,
}

impl FileBackend {
    /// Open a file-backed store, loading the snapshot if one exists
    ///
    /// A missing snapshot file means an empty store. An unreadable or
    /// unparseable snapshot is a `Storage` error, never silently treated
    /// as empty.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let image = MemoryBackend::new();

        if path.exists() {
            let bytes = fs::read(&path)?;
            let records: Vec<StringRecord> = serde_json::from_slice(&bytes)
                .map_err(|e| Error::Storage(format!("snapshot {} unreadable: {e}", path.display())))?;
            let count = records.len();
            for record in records {
                // Insertion order in the snapshot is the enumeration order
                image.insert_if_absent(record)?;
            }
            info!(path = %path.display(), records = count, "loaded record snapshot");
        } else {
            info!(path = %path.display(), "starting with empty record snapshot");
        }

        Ok(Self {
            path,
            image,
            persist_lock: Mutex::new(()),
        })
    }

    /// Snapshot file location
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self) -> Result<()> {
        let _guard = self.persist_lock.lock();
        let records = self.image.scan()?;
        let bytes = serde_json::to_vec_pretty(&records)
            .map_err(|e| Error::Storage(format!("snapshot encode failed: {e}")))?;

        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, bytes)?;
        fs::rename(&tmp, &self.path)?;
        debug!(path = %self.path.display(), records = records.len(), "persisted record snapshot");
        Ok(())
    }
}

impl RecordBackend for FileBackend {
    fn get(&self, id: &ContentHash) -> Result<Option<StringRecord>> {
        self.image.get(id)
    }

    fn insert_if_absent(&self, record: StringRecord) -> Result<InsertOutcome> {
        let id = record.id.clone();
        let outcome = self.image.insert_if_absent(record)?;
        if outcome == InsertOutcome::Inserted {
            if let Err(e) = self.persist() {
                // A failed snapshot must not leave the record visible:
                // the operation either fully happened or it didn't.
                self.image.remove(&id)?;
                warn!(id = %id, "rolled back insert after failed persist");
                return Err(e);
            }
        }
        Ok(outcome)
    }

    fn remove(&self, id: &ContentHash) -> Result<bool> {
        let record = match self.image.get(id)? {
            Some(record) => record,
            None => return Ok(false),
        };
        // Racing removes: only the one that actually evicts the record
        // reports success
        if !self.image.remove(id)? {
            return Ok(false);
        }
        if let Err(e) = self.persist() {
            // Restore the record so the image and the snapshot agree.
            // The rollback re-appends, so its enumeration position moves
            // to the end; order stays stable for subsequent scans.
            self.image.insert_if_absent(record)?;
            warn!(id = %id, "rolled back delete after failed persist");
            return Err(e);
        }
        Ok(true)
    }

    fn scan(&self) -> Result<Vec<StringRecord>> {
        self.image.scan()
    }

    fn len(&self) -> Result<usize> {
        self.image.len()
    }
}
