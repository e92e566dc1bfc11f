//! # Deadline-Bound World State
//!
//! Wraps the hosted world state for one invocation. Once the deadline has
//! passed, no further write is started and reads completing late are
//! discarded, so an invocation that overran its call timeout fails instead of
//! mutating the ledger behind a rejected response.
//!
//! A write already in flight when the deadline passes is not interrupted; the
//! host reports its outcome as it is.

use std::sync::Arc;
use std::time::{Duration, Instant};
use tc_01_world_state::{StateIterator, StoreError, WorldState};
use tracing::warn;

/// World state that refuses work past a fixed instant.
pub struct DeadlineWorldState {
    inner: Arc<dyn WorldState>,
    deadline: Instant,
    budget: Duration,
}

impl DeadlineWorldState {
    /// Bound `inner` to `budget` from now.
    pub fn new(inner: Arc<dyn WorldState>, budget: Duration) -> Self {
        Self {
            inner,
            deadline: Instant::now() + budget,
            budget,
        }
    }

    /// True once the deadline has passed.
    #[must_use]
    pub fn expired(&self) -> bool {
        Instant::now() >= self.deadline
    }

    fn check(&self, call: &str, key: &str) -> Result<(), StoreError> {
        if self.expired() {
            warn!(
                call,
                key,
                budget_ms = self.budget.as_millis() as u64,
                "Invocation deadline exceeded"
            );
            return Err(StoreError::Unavailable(format!(
                "invocation deadline of {}ms exceeded",
                self.budget.as_millis()
            )));
        }
        Ok(())
    }
}

impl WorldState for DeadlineWorldState {
    fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        self.check("get_state", key)?;
        let value = self.inner.get_state(key)?;
        self.check("get_state", key)?;
        Ok(value)
    }

    fn put_state(&self, key: &str, value: &[u8]) -> Result<(), StoreError> {
        self.check("put_state", key)?;
        self.inner.put_state(key, value)
    }

    fn get_state_by_range(
        &self,
        start: &str,
        end: &str,
    ) -> Result<Box<dyn StateIterator>, StoreError> {
        self.check("get_state_by_range", start)?;
        let cursor = self.inner.get_state_by_range(start, end)?;
        // Dropping the cursor on a late return releases it
        self.check("get_state_by_range", start)?;
        Ok(cursor)
    }
}
