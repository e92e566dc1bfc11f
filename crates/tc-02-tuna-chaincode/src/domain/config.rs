//! # Chaincode Configuration
//!
//! Immutable for the lifetime of a `TunaChaincode`. Nothing here is ledger
//! state; two peers with different configs still agree on the world state.

use tc_01_world_state::KeyRange;

/// Default lower bound of the `queryAllRecords` scan (inclusive).
pub const DEFAULT_RANGE_START: &str = "0";
/// Default upper bound of the `queryAllRecords` scan (exclusive).
pub const DEFAULT_RANGE_END: &str = "999";

/// How `changeStatus` treats the new status value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum StatusPolicy {
    /// Any string is accepted, including the empty string.
    #[default]
    FreeForm,
    /// Only the listed values are accepted (exact, case-sensitive match).
    AllowList(Vec<String>),
}

impl StatusPolicy {
    /// Build a policy from a comma-separated list. Blank input means free-form.
    #[must_use]
    pub fn from_csv(csv: &str) -> Self {
        let allowed: Vec<String> = csv
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();
        if allowed.is_empty() {
            StatusPolicy::FreeForm
        } else {
            StatusPolicy::AllowList(allowed)
        }
    }

    /// True if `status` may be written.
    #[must_use]
    pub fn permits(&self, status: &str) -> bool {
        match self {
            StatusPolicy::FreeForm => true,
            StatusPolicy::AllowList(allowed) => allowed.iter().any(|s| s == status),
        }
    }
}

/// Chaincode configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChaincodeConfig {
    /// Inclusive start of the `queryAllRecords` scan.
    pub range_start: String,
    /// Exclusive end of the `queryAllRecords` scan; empty means unbounded.
    pub range_end: String,
    /// Validation applied by `changeStatus`.
    pub status_policy: StatusPolicy,
}

impl Default for ChaincodeConfig {
    fn default() -> Self {
        Self {
            range_start: DEFAULT_RANGE_START.to_string(),
            range_end: DEFAULT_RANGE_END.to_string(),
            status_policy: StatusPolicy::FreeForm,
        }
    }
}

impl ChaincodeConfig {
    /// The `queryAllRecords` scan interval.
    #[must_use]
    pub fn query_range(&self) -> KeyRange {
        KeyRange::new(self.range_start.clone(), self.range_end.clone())
    }
}
