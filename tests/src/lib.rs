//! # Tuna-Chain Test Suite
//!
//! ## Structure
//!
//! ```text
//! tests/
//! ├── benches/
//! │   └── chaincode_benchmarks.rs  # Criterion, per operation
//! └── src/integration/
//!     ├── properties.rs            # Randomised ledger properties
//!     └── scenarios.rs             # End-to-end catch flows
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p tc-tests
//! cargo test -p tc-tests integration::scenarios::
//!
//! # Benchmarks
//! cargo bench -p tc-tests
//! ```

pub mod integration;
