//! # Chaincode Runtime
//!
//! Local host for the tuna chaincode.
//!
//! ## Modules
//!
//! - `config/` - Defaults, environment overrides and validation
//! - `deadline/` - Call timeout enforced at the world state
//! - `host/` - World state selection and timed invocation
//! - `logging/` - Tracing subscriber setup
//!
//! ## Startup Sequence
//!
//! 1. Load configuration (defaults, `TC_*` environment, CLI flags)
//! 2. Initialise logging
//! 3. Validate configuration
//! 4. Open world state (file-backed or in-memory)
//! 5. Call the contract's `Init` entry point
//! 6. Dispatch the requested invocation

pub mod config;
pub mod deadline;
pub mod host;
pub mod logging;

pub use config::{ConfigError, RuntimeConfig};
pub use deadline::DeadlineWorldState;
pub use host::{open_world_state, ChaincodeHost};
pub use logging::init_logging;
