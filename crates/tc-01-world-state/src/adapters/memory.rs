use crate::adapters::cursor::SnapshotCursor;
use crate::domain::{KeyRange, StateEntry, StoreError};
use crate::ports::{StateIterator, WorldState};
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};
use tracing::debug;

/// In-memory world state.
///
/// Keys live in a `BTreeMap`, so range scans come out in byte-wise order
/// without sorting. `set_available(false)` makes every call fail with
/// `StoreError::Unavailable`, which lets callers exercise their error paths.
#[derive(Debug)]
pub struct InMemoryWorldState {
    entries: RwLock<BTreeMap<String, Vec<u8>>>,
    open_cursors: Arc<AtomicUsize>,
    available: AtomicBool,
}

impl InMemoryWorldState {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(BTreeMap::new()),
            open_cursors: Arc::new(AtomicUsize::new(0)),
            available: AtomicBool::new(true),
        }
    }

    /// Toggle simulated platform availability.
    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    /// Scan cursors opened and not yet released.
    #[must_use]
    pub fn open_cursors(&self) -> usize {
        self.open_cursors.load(Ordering::SeqCst)
    }

    /// Number of keys currently stored.
    pub fn len(&self) -> Result<usize, StoreError> {
        let entries = self.entries.read().map_err(|_| StoreError::lock_poisoned())?;
        Ok(entries.len())
    }

    /// True when nothing has been written.
    pub fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.len()? == 0)
    }

    fn ensure_available(&self) -> Result<(), StoreError> {
        if self.available.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(StoreError::Unavailable("in-memory world state offline".to_string()))
        }
    }
}

impl Default for InMemoryWorldState {
    fn default() -> Self {
        Self::new()
    }
}

impl WorldState for InMemoryWorldState {
    fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        self.ensure_available()?;
        let entries = self.entries.read().map_err(|_| StoreError::lock_poisoned())?;
        Ok(entries.get(key).cloned())
    }

    fn put_state(&self, key: &str, value: &[u8]) -> Result<(), StoreError> {
        self.ensure_available()?;
        let mut entries = self
            .entries
            .write()
            .map_err(|_| StoreError::lock_poisoned())?;
        entries.insert(key.to_string(), value.to_vec());
        Ok(())
    }

    fn get_state_by_range(
        &self,
        start: &str,
        end: &str,
    ) -> Result<Box<dyn StateIterator>, StoreError> {
        self.ensure_available()?;
        let range = KeyRange::new(start, end);

        let snapshot = if range.is_empty() {
            Vec::new()
        } else {
            let entries = self.entries.read().map_err(|_| StoreError::lock_poisoned())?;
            entries
                .range::<str, _>(range.bounds())
                .map(|(k, v)| StateEntry::new(k.clone(), v.clone()))
                .collect()
        };

        debug!(start, end, matched = snapshot.len(), "Opened range scan");
        Ok(Box::new(SnapshotCursor::new(
            snapshot,
            Arc::clone(&self.open_cursors),
        )))
    }
}
