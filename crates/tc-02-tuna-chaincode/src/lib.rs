//! # TC-02 Tuna Chaincode
//!
//! Ledger contract recording tuna catches: identity, sensor readings,
//! location and custody status.
//!
//! ## Purpose
//!
//! Maps five named operations onto the get / put / range-scan primitives of
//! the world state. Consensus, ordering, endorsement and replication belong to
//! the host platform.
//!
//! ## Operations
//!
//! | Operation | Args | Writes | Errors |
//! |-----------|------|--------|--------|
//! | `queryRecord` | key | - | `Arity`, `NotFound` |
//! | `queryAllRecords` | - | - | - |
//! | `recordNew` | key, id, temperature, humidity, location, timestamp, agreement, status | 1 | `Arity`, `StoreWriteFailed` |
//! | `changeStatus` | key, status | 1 | `Arity`, `NotFound`, `InvalidStatus`, `StoreWriteFailed` |
//! | `seedLedger` | - | 10 | `StoreWriteFailed` |
//!
//! Store read failures surface as `StoreUnavailable` from any operation.
//! `queryAllRecords` and `seedLedger` read no arguments and ignore any they
//! are given.
//!
//! ## Invocation Flow
//!
//! ```text
//! (function, args) ──parse──→ ChaincodeRequest ──route──→ handler
//!                                                            │
//!                                             WorldState ←───┤ get / put / scan
//!                                                            │
//! Response { 200, payload } | Response { 500, message } ←────┘
//! ```
//!
//! ## Usage Example
//!
//! ```
//! use tc_02_tuna_chaincode::prelude::*;
//!
//! let store = InMemoryWorldState::new();
//! let chaincode = TunaChaincode::default();
//!
//! chaincode.execute(&store, &ChaincodeRequest::SeedLedger).unwrap();
//! let record = chaincode
//!     .execute(&store, &ChaincodeRequest::QueryRecord { key: "1".into() })
//!     .unwrap();
//! assert_eq!(decode(&record).unwrap().id, "923F");
//! ```

#![warn(clippy::all)]

pub mod codec;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod ports;
pub mod router;
pub mod service;

/// Convenient re-exports for common usage.
pub mod prelude {
    pub use crate::codec::{decode, encode};
    pub use crate::domain::{
        seed_records, ChaincodeConfig, ChaincodeRequest, Operation, QueryResult, StatusPolicy,
        TunaRecord,
    };
    pub use crate::errors::ChaincodeError;
    pub use crate::ports::{Chaincode, Response, StateIterator, WorldState};
    pub use crate::service::TunaChaincode;
    pub use tc_01_world_state::{FileBackedWorldState, InMemoryWorldState, StoreError};
}

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Name the contract is deployed under.
pub const CHAINCODE_NAME: &str = "tuna-chaincode";
