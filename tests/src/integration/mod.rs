//! Cross-crate tests: contract + world state adapters.

pub mod properties;
pub mod scenarios;
