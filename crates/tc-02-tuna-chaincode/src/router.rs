//! # Operation Router
//!
//! Flat dispatch from a decoded request to its handler. No state machine,
//! no argument checks: arity is settled when the request is decoded.

use crate::domain::{ChaincodeConfig, ChaincodeRequest};
use crate::errors::ChaincodeError;
use crate::handlers;
use tc_01_world_state::WorldState;

/// Run `request` against `store` and return the success payload.
pub fn route(
    store: &dyn WorldState,
    config: &ChaincodeConfig,
    request: &ChaincodeRequest,
) -> Result<Vec<u8>, ChaincodeError> {
    match request {
        ChaincodeRequest::QueryRecord { key } => handlers::query_record(store, key),
        ChaincodeRequest::QueryAllRecords => {
            handlers::query_all_records(store, &config.query_range())
        }
        ChaincodeRequest::RecordNew { key, record } => handlers::record_new(store, key, record),
        ChaincodeRequest::ChangeStatus { key, status } => {
            handlers::change_status(store, &config.status_policy, key, status)
        }
        ChaincodeRequest::SeedLedger => handlers::seed_ledger(store),
    }
}
