//! # Ports Layer
//!
//! Driven ports for world state access. The chaincode depends only on these
//! traits; the host decides which adapter backs them.

use crate::domain::{StateEntry, StoreError};

// =============================================================================
// SCAN CURSOR
// =============================================================================

/// Cursor over the result of a range scan.
///
/// ## Release Guarantee
///
/// Implementations release their backend resources in `close` and again
/// (idempotently) on drop, so an early return from the caller can never leak
/// an open cursor.
pub trait StateIterator: Iterator<Item = Result<StateEntry, StoreError>> + Send {
    /// True while at least one entry remains.
    fn has_next(&self) -> bool;

    /// Advance and return the next entry.
    ///
    /// Errors with `CursorExhausted` past the end and `CursorClosed` after
    /// `close`.
    fn next_entry(&mut self) -> Result<StateEntry, StoreError>;

    /// Restart iteration from the first entry of the scan.
    fn rewind(&mut self) -> Result<(), StoreError>;

    /// Release the cursor. Further reads fail with `CursorClosed`.
    fn close(&mut self);

    /// True once `close` has been called.
    fn is_closed(&self) -> bool;
}

// =============================================================================
// WORLD STATE
// =============================================================================

/// Ordered key-value world state.
///
/// `put_state` takes `&self`; adapters use interior locking so a shared handle
/// can be passed explicitly to every handler.
pub trait WorldState: Send + Sync {
    /// Read a value. `Ok(None)` means the key was never written, which is
    /// distinct from `Ok(Some(vec![]))`.
    fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError>;

    /// Overwrite the full value stored under `key`.
    fn put_state(&self, key: &str, value: &[u8]) -> Result<(), StoreError>;

    /// Scan `[start, end)` in ascending byte-wise key order.
    ///
    /// `start >= end` yields an empty cursor; an empty `end` is unbounded.
    fn get_state_by_range(
        &self,
        start: &str,
        end: &str,
    ) -> Result<Box<dyn StateIterator>, StoreError>;
}
