//! # Ports Layer
//!
//! - **Driving Port (Inbound)**: `Chaincode`, called by the host platform
//! - **Driven Port (Outbound)**: `WorldState`, re-exported from `tc-01-world-state`

pub mod inbound;

pub use inbound::*;
pub use tc_01_world_state::{StateIterator, WorldState};
