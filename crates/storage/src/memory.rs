//! In-memory record backend
//!
//! # Design
//!
//! - One `parking_lot::RwLock` over the whole image: reads share the lock,
//!   `insert_if_absent` holds the write lock across check and insert, which
//!   is the atomicity the backend contract requires.
//! - Records live in a sequence-keyed `BTreeMap` so `scan` walks them in
//!   insertion order; a hash index gives O(1) lookup by content hash.

use crate::backend::{InsertOutcome, RecordBackend};
use parking_lot::RwLock;
use std::collections::{BTreeMap, HashMap};
use strand_core::{ContentHash, Result, StringRecord};

#[derive(Debug, Default)]
struct Image {
    /// Insertion-ordered records, keyed by insert sequence
    by_seq: BTreeMap<u64, StringRecord>,
    /// Content hash -> insert sequence
    index: HashMap<ContentHash, u64>,
    next_seq: u64,
}

impl Image {
    fn insert_if_absent(&mut self, record: StringRecord) -> InsertOutcome {
        if self.index.contains_key(&record.id) {
            return InsertOutcome::Duplicate;
        }
        let seq = self.next_seq;
        self.next_seq += 1;
        self.index.insert(record.id.clone(), seq);
        self.by_seq.insert(seq, record);
        InsertOutcome::Inserted
    }

    fn remove(&mut self, id: &ContentHash) -> bool {
        match self.index.remove(id) {
            Some(seq) => {
                self.by_seq.remove(&seq);
                true
            }
            None => false,
        }
    }

    fn get(&self, id: &ContentHash) -> Option<StringRecord> {
        self.index.get(id).and_then(|seq| self.by_seq.get(seq)).cloned()
    }

    fn scan(&self) -> Vec<StringRecord> {
        self.by_seq.values().cloned().collect()
    }
}

/// RwLock-protected in-memory backend
///
/// Default backend for ephemeral stores. `Send + Sync`; share via `Arc`.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    image: RwLock<Image>,
}

impl MemoryBackend {
    /// Create an empty in-memory backend
    pub fn new() -> Self {
        Self::default()
    }
}

impl RecordBackend for MemoryBackend {
    fn get(&self, id: &ContentHash) -> Result<Option<StringRecord>> {
        Ok(self.image.read().get(id))
    }

    fn insert_if_absent(&self, record: StringRecord) -> Result<InsertOutcome> {
        Ok(self.image.write().insert_if_absent(record))
    }

    fn remove(&self, id: &ContentHash) -> Result<bool> {
        Ok(self.image.write().remove(id))
    }

    fn scan(&self) -> Result<Vec<StringRecord>> {
        Ok(self.image.read().scan())
    }

    fn len(&self) -> Result<usize> {
        Ok(self.image.read().index.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::record;

    #[test]
    fn test_insert_and_get() {
        let backend = MemoryBackend::new();
        let rec = record("level");
        assert_eq!(
            backend.insert_if_absent(rec.clone()).unwrap(),
            InsertOutcome::Inserted
        );
        assert_eq!(backend.get(&rec.id).unwrap(), Some(rec));
    }

    #[test]
    fn test_insert_duplicate_leaves_original() {
        let backend = MemoryBackend::new();
        let first = record("level");
        backend.insert_if_absent(first.clone()).unwrap();

        let mut second = record("level");
        second.created_at = first.created_at + chrono::Duration::seconds(5);
        assert_eq!(
            backend.insert_if_absent(second).unwrap(),
            InsertOutcome::Duplicate
        );

        // The original record, including its timestamp, is untouched
        assert_eq!(backend.get(&first.id).unwrap(), Some(first));
        assert_eq!(backend.len().unwrap(), 1);
    }

    #[test]
    fn test_remove() {
        let backend = MemoryBackend::new();
        let rec = record("noon");
        backend.insert_if_absent(rec.clone()).unwrap();

        assert!(backend.remove(&rec.id).unwrap());
        assert_eq!(backend.get(&rec.id).unwrap(), None);
        assert!(!backend.remove(&rec.id).unwrap());
    }

    #[test]
    fn test_scan_preserves_insertion_order() {
        let backend = MemoryBackend::new();
        for value in ["racecar", "hello world", "a", "noon"] {
            backend.insert_if_absent(record(value)).unwrap();
        }
        let values: Vec<_> = backend
            .scan()
            .unwrap()
            .into_iter()
            .map(|r| r.value)
            .collect();
        assert_eq!(values, vec!["racecar", "hello world", "a", "noon"]);
    }

    #[test]
    fn test_scan_order_survives_deletes() {
        let backend = MemoryBackend::new();
        for value in ["one", "two", "three"] {
            backend.insert_if_absent(record(value)).unwrap();
        }
        backend.remove(&ContentHash::of("two")).unwrap();

        let values: Vec<_> = backend
            .scan()
            .unwrap()
            .into_iter()
            .map(|r| r.value)
            .collect();
        assert_eq!(values, vec!["one", "three"]);
    }

    #[test]
    fn test_racing_inserts_single_winner() {
        use std::sync::Arc;

        let backend = Arc::new(MemoryBackend::new());
        let mut handles = Vec::new();
        for _ in 0..8 {
            let backend = Arc::clone(&backend);
            handles.push(std::thread::spawn(move || {
                backend.insert_if_absent(record("contended")).unwrap()
            }));
        }
        let inserted = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|o| *o == InsertOutcome::Inserted)
            .count();
        assert_eq!(inserted, 1);
        assert_eq!(backend.len().unwrap(), 1);
    }

    #[test]
    fn test_backend_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MemoryBackend>();
    }
}
