//! # Adapters Layer
//!
//! Implementations of the `WorldState` port.

mod cursor;
mod file;
mod memory;

pub use cursor::SnapshotCursor;
pub use file::FileBackedWorldState;
pub use memory::InMemoryWorldState;
