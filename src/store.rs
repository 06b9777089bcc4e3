//! Ordered, duplicate-permitting record store with positional identity.

use thiserror::Error;

/// Errors from positional store operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The index was outside `[0, len)`.
    #[error("index {index} out of range for store of length {len}")]
    IndexOutOfRange {
        /// Index the caller supplied.
        index: usize,
        /// Store length at the time of the call.
        len: usize,
    },
}

/// In-memory collection of records of one kind, in insertion order.
///
/// Records have no identity beyond their position; duplicates are allowed
/// and every mutation is addressed by index. The store holds no internal
/// synchronization: it is owned by one caller and used from one thread.
#[derive(Debug, Clone)]
pub struct RecordStore<R> {
    records: Vec<R>,
}

impl<R> Default for RecordStore<R> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
        }
    }
}

impl<R: Clone> RecordStore<R> {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a record. Validation is the caller's responsibility and
    /// happens before this call; `add` itself never fails.
    pub fn add(&mut self, record: R) {
        self.records.push(record);
    }

    /// Replaces the record at `index`.
    pub fn update(&mut self, index: usize, record: R) -> Result<(), StoreError> {
        let len = self.records.len();
        let slot = self
            .records
            .get_mut(index)
            .ok_or(StoreError::IndexOutOfRange { index, len })?;
        *slot = record;
        Ok(())
    }

    /// Removes and returns the record at `index`, shifting later records
    /// left and preserving their relative order.
    pub fn remove(&mut self, index: usize) -> Result<R, StoreError> {
        if index >= self.records.len() {
            return Err(StoreError::IndexOutOfRange {
                index,
                len: self.records.len(),
            });
        }
        Ok(self.records.remove(index))
    }

    /// Returns an owned snapshot of the full collection in insertion
    /// order. Mutating the store afterwards does not affect the snapshot.
    pub fn list(&self) -> Vec<R> {
        self.records.clone()
    }

    /// Substitutes the whole collection, discarding prior contents.
    pub fn replace_all(&mut self, records: Vec<R>) {
        self.records = records;
    }

    /// Returns the record at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&R> {
        self.records.get(index)
    }

    /// Number of records held.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
