//! # Operation Handlers
//!
//! One function per operation. Each takes the world state handle explicitly
//! and performs at most one write, except `seed_ledger`, which stops at the
//! first failed write.

use crate::codec;
use crate::domain::{seed_records, QueryResult, StatusPolicy, TunaRecord};
use crate::errors::ChaincodeError;
use tc_01_world_state::{KeyRange, WorldState};
use tracing::{debug, info, warn};

/// Return the raw bytes stored under `key`.
pub fn query_record(store: &dyn WorldState, key: &str) -> Result<Vec<u8>, ChaincodeError> {
    match store.get_state(key)? {
        Some(bytes) => {
            debug!(key, bytes = bytes.len(), "Record found");
            Ok(bytes)
        }
        None => Err(ChaincodeError::NotFound {
            key: key.to_string(),
        }),
    }
}

/// Scan `range` and return a JSON array of `{"Key", "Record"}` objects.
///
/// Values that are not JSON objects are skipped with a warning; only a store
/// failure fails the scan. The cursor is closed on the success path and
/// released by drop on every early return.
pub fn query_all_records(
    store: &dyn WorldState,
    range: &KeyRange,
) -> Result<Vec<u8>, ChaincodeError> {
    let mut cursor = store.get_state_by_range(&range.start, &range.end)?;

    let mut results = Vec::new();
    while cursor.has_next() {
        let entry = cursor.next_entry()?;
        let record = match codec::decode(&entry.value) {
            Ok(record) => record,
            Err(err) => {
                warn!(key = %entry.key, error = %err, "Skipping undecodable value in scan range");
                continue;
            }
        };
        results.push(QueryResult {
            key: entry.key,
            record,
        });
    }
    cursor.close();

    debug!(
        start = %range.start,
        end = %range.end,
        count = results.len(),
        "Range query completed"
    );
    Ok(serde_json::to_vec(&results)?)
}

/// Store `record` under `key`, overwriting any previous value.
pub fn record_new(
    store: &dyn WorldState,
    key: &str,
    record: &TunaRecord,
) -> Result<Vec<u8>, ChaincodeError> {
    let bytes = codec::encode(record)?;
    store
        .put_state(key, &bytes)
        .map_err(|err| ChaincodeError::write_failed(key, err))?;

    info!(key, id = %record.id, "Recorded catch");
    Ok(Vec::new())
}

/// Replace the status of the record under `key`. Other fields are written
/// back exactly as decoded.
pub fn change_status(
    store: &dyn WorldState,
    policy: &StatusPolicy,
    key: &str,
    status: &str,
) -> Result<Vec<u8>, ChaincodeError> {
    if !policy.permits(status) {
        return Err(ChaincodeError::InvalidStatus {
            status: status.to_string(),
        });
    }

    let bytes = store
        .get_state(key)?
        .ok_or_else(|| ChaincodeError::NotFound {
            key: key.to_string(),
        })?;

    let mut record = codec::decode(&bytes)?;
    let previous = std::mem::take(&mut record.status);
    record.set_status(status);

    let bytes = codec::encode(&record)?;
    store
        .put_state(key, &bytes)
        .map_err(|err| ChaincodeError::write_failed(key, err))?;

    info!(key, from = %previous, to = status, "Changed catch status");
    Ok(Vec::new())
}

/// Write the ten demonstration catches under keys `"1"` to `"10"`.
///
/// There is no rollback: a failure part-way leaves the earlier keys written
/// and reports the key that failed.
pub fn seed_ledger(store: &dyn WorldState) -> Result<Vec<u8>, ChaincodeError> {
    let records = seed_records();
    let total = records.len();

    for (key, record) in records {
        let bytes = codec::encode(&record)?;
        store
            .put_state(&key, &bytes)
            .map_err(|err| ChaincodeError::write_failed(&key, err))?;
        debug!(key = %key, id = %record.id, "Seeded catch");
    }

    info!(count = total, "Seeded ledger");
    Ok(Vec::new())
}
