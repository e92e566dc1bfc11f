//! # tc-01-world-state
//!
//! World State subsystem for Tuna-Chain.
//!
//! ## Role in System
//!
//! - **Driven Port**: `WorldState` is the only surface the chaincode touches
//! - **Opaque Values**: bytes in, bytes out; no schema is enforced here
//! - **Ordered Keys**: range scans walk keys in ascending byte order
//!
//! ## Scan Semantics
//!
//! ```text
//! get_state_by_range("0", "999")
//!
//!   "0" <= key < "999"      (half-open, byte-wise lexicographic)
//!
//!   "1" → "10" → "2" → ... → "923F" → "998"
//! ```
//!
//! Cursors are snapshots taken when the scan is opened. A cursor is released
//! when it is closed or dropped, whichever happens first.
//!
//! ## Adapters
//!
//! | Adapter | Backing | Use |
//! |---------|---------|-----|
//! | `InMemoryWorldState` | `BTreeMap` | tests, ephemeral runs |
//! | `FileBackedWorldState` | single file, atomic rewrite | local persistence |

pub mod adapters;
pub mod domain;
pub mod ports;

pub use adapters::*;
pub use domain::*;
pub use ports::*;
