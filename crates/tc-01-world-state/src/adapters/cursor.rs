//! # Snapshot Cursor
//!
//! `StateIterator` over entries copied out of the backend when the scan was
//! opened. Later writes are not visible to an open cursor.

use crate::domain::{StateEntry, StoreError};
use crate::ports::StateIterator;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Cursor over a point-in-time copy of a key range.
#[derive(Debug)]
pub struct SnapshotCursor {
    entries: Vec<StateEntry>,
    position: usize,
    closed: bool,
    /// Backend-wide open cursor count; taken on release so it is decremented
    /// exactly once.
    open_cursors: Option<Arc<AtomicUsize>>,
}

impl SnapshotCursor {
    /// Cursor that counts itself in `open_cursors` until released.
    pub fn new(entries: Vec<StateEntry>, open_cursors: Arc<AtomicUsize>) -> Self {
        open_cursors.fetch_add(1, Ordering::SeqCst);
        Self {
            entries,
            position: 0,
            closed: false,
            open_cursors: Some(open_cursors),
        }
    }

    fn release(&mut self) {
        self.closed = true;
        if let Some(counter) = self.open_cursors.take() {
            counter.fetch_sub(1, Ordering::SeqCst);
        }
    }
}

impl Iterator for SnapshotCursor {
    type Item = Result<StateEntry, StoreError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.closed || self.position >= self.entries.len() {
            return None;
        }
        let entry = self.entries[self.position].clone();
        self.position += 1;
        Some(Ok(entry))
    }
}

impl StateIterator for SnapshotCursor {
    fn has_next(&self) -> bool {
        !self.closed && self.position < self.entries.len()
    }

    fn next_entry(&mut self) -> Result<StateEntry, StoreError> {
        if self.closed {
            return Err(StoreError::CursorClosed);
        }
        match self.next() {
            Some(entry) => entry,
            None => Err(StoreError::CursorExhausted),
        }
    }

    fn rewind(&mut self) -> Result<(), StoreError> {
        if self.closed {
            return Err(StoreError::CursorClosed);
        }
        self.position = 0;
        Ok(())
    }

    fn close(&mut self) {
        self.release();
    }

    fn is_closed(&self) -> bool {
        self.closed
    }
}

impl Drop for SnapshotCursor {
    fn drop(&mut self) {
        self.release();
    }
}
