//! # Runtime Configuration
//!
//! Defaults, then `TC_*` environment variables, then command-line flags.
//!
//! | Variable | Field | Default |
//! |----------|-------|---------|
//! | `TC_STATE_FILE` | `state_file` | none (in-memory) |
//! | `TC_INVOKE_TIMEOUT_MS` | `invoke_timeout_ms` | 30000 |
//! | `TC_LOG_LEVEL` | `log_level` | `info` |
//! | `TC_ALLOWED_STATUSES` | `chaincode.status_policy` | free-form |
//! | `TC_QUERY_RANGE_START` | `chaincode.range_start` | `0` |
//! | `TC_QUERY_RANGE_END` | `chaincode.range_end` | `999` |

use std::path::PathBuf;
use tc_02_tuna_chaincode::domain::{ChaincodeConfig, StatusPolicy};
use thiserror::Error;
use tracing::{info, warn};

/// Default platform call timeout.
pub const DEFAULT_INVOKE_TIMEOUT_MS: u64 = 30_000;
/// Default log filter when `RUST_LOG` is unset.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Complete runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// File-backed world state location; `None` runs against memory.
    pub state_file: Option<PathBuf>,
    /// Upper bound on a single invocation.
    pub invoke_timeout_ms: u64,
    /// Log filter directive.
    pub log_level: String,
    /// Contract configuration.
    pub chaincode: ChaincodeConfig,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            state_file: None,
            invoke_timeout_ms: DEFAULT_INVOKE_TIMEOUT_MS,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            chaincode: ChaincodeConfig::default(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The `queryAllRecords` range can never match a key.
    #[error("query range [{start:?}, {end:?}) is empty")]
    EmptyQueryRange { start: String, end: String },

    /// A zero timeout would reject every invocation.
    #[error("invoke timeout must be greater than zero")]
    ZeroTimeout,
}

impl RuntimeConfig {
    /// Load defaults overridden by the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load defaults overridden by whatever `lookup` returns.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(path) = lookup("TC_STATE_FILE").filter(|p| !p.is_empty()) {
            config.state_file = Some(PathBuf::from(path));
        }

        if let Some(raw) = lookup("TC_INVOKE_TIMEOUT_MS") {
            match raw.parse() {
                Ok(ms) => config.invoke_timeout_ms = ms,
                Err(_) => warn!(value = %raw, "TC_INVOKE_TIMEOUT_MS is not a number, keeping default"),
            }
        }

        if let Some(level) = lookup("TC_LOG_LEVEL").filter(|l| !l.is_empty()) {
            config.log_level = level;
        }

        if let Some(csv) = lookup("TC_ALLOWED_STATUSES") {
            config.chaincode.status_policy = StatusPolicy::from_csv(&csv);
            if let StatusPolicy::AllowList(allowed) = &config.chaincode.status_policy {
                info!(?allowed, "Loaded status allow-list from environment");
            }
        }

        if let Some(start) = lookup("TC_QUERY_RANGE_START") {
            config.chaincode.range_start = start;
        }
        if let Some(end) = lookup("TC_QUERY_RANGE_END") {
            config.chaincode.range_end = end;
        }

        config
    }

    /// Reject configurations that cannot serve any invocation.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.invoke_timeout_ms == 0 {
            return Err(ConfigError::ZeroTimeout);
        }
        if self.chaincode.query_range().is_empty() {
            return Err(ConfigError::EmptyQueryRange {
                start: self.chaincode.range_start.clone(),
                end: self.chaincode.range_end.clone(),
            });
        }
        Ok(())
    }
}
