//! # Driving Port (API - Inbound)
//!
//! What the host platform calls. Errors do not cross this boundary as types:
//! the platform sees a status code and a message, nothing more.

use crate::errors::ChaincodeError;
use tc_01_world_state::WorldState;

/// Status code of a successful invocation.
pub const OK: i32 = 200;
/// Status code of a rejected invocation.
pub const ERROR: i32 = 500;

/// Result of an invocation as seen by the platform.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Response {
    /// `OK` or `ERROR`.
    pub status: i32,
    /// Human-readable error message; empty on success.
    pub message: String,
    /// Success payload; empty on error.
    pub payload: Vec<u8>,
}

impl Response {
    /// Successful invocation carrying `payload`.
    #[must_use]
    pub fn success(payload: Vec<u8>) -> Self {
        Self {
            status: OK,
            message: String::new(),
            payload,
        }
    }

    /// Rejected invocation.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: ERROR,
            message: message.into(),
            payload: Vec::new(),
        }
    }

    /// True for `OK`.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.status == OK
    }
}

impl From<Result<Vec<u8>, ChaincodeError>> for Response {
    fn from(result: Result<Vec<u8>, ChaincodeError>) -> Self {
        match result {
            Ok(payload) => Response::success(payload),
            Err(err) => Response::error(err.to_string()),
        }
    }
}

/// Contract entry points.
///
/// The world state handle is passed into every call; implementations hold no
/// ledger state of their own.
pub trait Chaincode: Send + Sync {
    /// Called once when the contract is activated. Must not write.
    fn init(&self, store: &dyn WorldState) -> Response;

    /// Called for every transaction.
    fn invoke(&self, store: &dyn WorldState, function: &str, args: &[String]) -> Response;
}
