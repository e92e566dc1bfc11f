use thiserror::Error;

/// Errors raised by a world state backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The backend cannot service the call right now.
    #[error("world state unavailable: {0}")]
    Unavailable(String),

    /// Reading or writing the backing file failed.
    #[error("world state I/O error: {message}")]
    Io { message: String },

    /// `next_entry` was called after the last entry.
    #[error("scan cursor exhausted")]
    CursorExhausted,

    /// The cursor was used after `close`.
    #[error("scan cursor closed")]
    CursorClosed,
}

impl StoreError {
    /// Lock poisoning means a writer panicked mid-update; treat the store as gone.
    pub(crate) fn lock_poisoned() -> Self {
        StoreError::Unavailable("lock poisoned".to_string())
    }
}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        StoreError::Io {
            message: err.to_string(),
        }
    }
}
