//! # Error Types
//!
//! Every error is terminal for the invocation that raised it. Nothing is
//! retried and no handler leaves a partial write behind.

use crate::domain::Operation;
use tc_01_world_state::StoreError;
use thiserror::Error;

/// Errors returned by chaincode operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChaincodeError {
    /// Wrong number of arguments for the operation.
    #[error("Incorrect number of arguments for {operation}. Expecting {expected}, got {actual}")]
    Arity {
        operation: Operation,
        expected: usize,
        actual: usize,
    },

    /// No record stored under the key.
    #[error("Could not locate record: {key}")]
    NotFound { key: String },

    /// Stored bytes are not a record.
    #[error("malformed record: {0}")]
    MalformedRecord(String),

    /// The world state rejected a write.
    #[error("Failed to write record {key}: {source}")]
    StoreWriteFailed {
        key: String,
        #[source]
        source: StoreError,
    },

    /// The world state could not service a read or scan.
    #[error("world state read failed: {0}")]
    StoreUnavailable(#[source] StoreError),

    /// Operation name not recognised by the router.
    #[error("Invalid function name: {0}")]
    UnknownOperation(String),

    /// Status outside the configured allow-list.
    #[error("status {status:?} is not an allowed custody status")]
    InvalidStatus { status: String },
}

impl ChaincodeError {
    /// Wrap a failed `put_state` for `key`.
    pub(crate) fn write_failed(key: &str, source: StoreError) -> Self {
        ChaincodeError::StoreWriteFailed {
            key: key.to_string(),
            source,
        }
    }

    /// True for failures caused by the caller's input rather than the platform.
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::Arity { .. }
                | Self::NotFound { .. }
                | Self::UnknownOperation(_)
                | Self::InvalidStatus { .. }
        )
    }
}

impl From<StoreError> for ChaincodeError {
    fn from(err: StoreError) -> Self {
        ChaincodeError::StoreUnavailable(err)
    }
}

impl From<serde_json::Error> for ChaincodeError {
    fn from(err: serde_json::Error) -> Self {
        ChaincodeError::MalformedRecord(err.to_string())
    }
}
