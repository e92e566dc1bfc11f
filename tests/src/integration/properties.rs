//! # Ledger Properties
//!
//! Randomised checks over generated keys and catches:
//!
//! - A written record reads back field-for-field
//! - `changeStatus` touches only the status field
//! - A full scan yields exactly the distinct keys written, in byte order
//! - Every wrong argument count is rejected without a write, for the
//!   operations that read arguments

#[cfg(test)]
mod tests {
    use rand::distributions::Alphanumeric;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use std::collections::BTreeSet;
    use tc_01_world_state::InMemoryWorldState;
    use tc_02_tuna_chaincode::domain::Operation;
    use tc_02_tuna_chaincode::prelude::*;

    const ROUNDS: usize = 200;

    // =============================================================================
    // GENERATORS
    // =============================================================================

    fn rng() -> StdRng {
        StdRng::seed_from_u64(0x7A1F)
    }

    fn text(rng: &mut StdRng, max_len: usize) -> String {
        let len = rng.gen_range(0..=max_len);
        (&mut *rng)
            .sample_iter(&Alphanumeric)
            .take(len)
            .map(char::from)
            .collect()
    }

    /// Keys inside the default `["0", "999")` scan range.
    fn scan_key(rng: &mut StdRng) -> String {
        rng.gen_range(0..999u32).to_string()
    }

    fn catch(rng: &mut StdRng) -> TunaRecord {
        TunaRecord {
            id: text(rng, 8),
            temperature: rng.gen_range(-5..40i32).to_string(),
            humidity: rng.gen_range(0..100u32).to_string(),
            location: format!(
                "{:.4}, {:.4}",
                rng.gen_range(-90.0..90.0f64),
                rng.gen_range(-180.0..180.0f64)
            ),
            timestamp: rng.gen_range(1_500_000_000..1_600_000_000u64).to_string(),
            agreement: text(rng, 4),
            status: text(rng, 10),
        }
    }

    fn record_new_args(key: &str, record: &TunaRecord) -> Vec<String> {
        vec![
            key.to_string(),
            record.id.clone(),
            record.temperature.clone(),
            record.humidity.clone(),
            record.location.clone(),
            record.timestamp.clone(),
            record.agreement.clone(),
            record.status.clone(),
        ]
    }

    // =============================================================================
    // PROPERTIES
    // =============================================================================

    #[test]
    fn test_record_new_then_query_reads_back() {
        let mut rng = rng();
        let store = InMemoryWorldState::new();
        let chaincode = TunaChaincode::default();

        for _ in 0..ROUNDS {
            let key = text(&mut rng, 12);
            let record = catch(&mut rng);

            chaincode
                .call(&store, "recordNew", &record_new_args(&key, &record))
                .unwrap();
            let bytes = chaincode.call(&store, "queryRecord", &[key.as_str()]).unwrap();

            assert_eq!(decode(&bytes).unwrap(), record);
        }
    }

    #[test]
    fn test_change_status_preserves_other_fields() {
        let mut rng = rng();
        let store = InMemoryWorldState::new();
        let chaincode = TunaChaincode::default();

        for _ in 0..ROUNDS {
            let key = scan_key(&mut rng);
            let record = catch(&mut rng);
            let status = text(&mut rng, 10);

            chaincode
                .call(&store, "recordNew", &record_new_args(&key, &record))
                .unwrap();
            chaincode
                .call(&store, "changeStatus", &[key.as_str(), status.as_str()])
                .unwrap();

            let bytes = chaincode.call(&store, "queryRecord", &[key.as_str()]).unwrap();
            let expected = TunaRecord {
                status,
                ..record
            };
            assert_eq!(decode(&bytes).unwrap(), expected);
        }
    }

    #[test]
    fn test_scan_count_matches_distinct_keys() {
        let mut rng = rng();
        let store = InMemoryWorldState::new();
        let chaincode = TunaChaincode::default();
        let mut written = BTreeSet::new();

        for _ in 0..ROUNDS {
            let key = scan_key(&mut rng);
            chaincode
                .call(&store, "recordNew", &record_new_args(&key, &catch(&mut rng)))
                .unwrap();
            written.insert(key);
        }

        let payload = chaincode.call(&store, "queryAllRecords", &[] as &[&str]).unwrap();
        let results: Vec<QueryResult> = serde_json::from_slice(&payload).unwrap();
        let scanned: Vec<String> = results.into_iter().map(|r| r.key).collect();

        // BTreeSet<String> iterates in byte order, same as the scan
        assert_eq!(scanned, written.into_iter().collect::<Vec<_>>());
        assert_eq!(store.open_cursors(), 0);
    }

    #[test]
    fn test_keys_outside_range_are_not_scanned() {
        let store = InMemoryWorldState::new();
        let chaincode = TunaChaincode::default();

        // "999" is the exclusive end, "A" sorts after every digit
        for key in ["0", "998", "999", "9990", "A"] {
            chaincode
                .call(&store, "recordNew", &record_new_args(key, &TunaRecord::default()))
                .unwrap();
        }

        let payload = chaincode.call(&store, "queryAllRecords", &[] as &[&str]).unwrap();
        let results: Vec<QueryResult> = serde_json::from_slice(&payload).unwrap();
        let keys: Vec<&str> = results.iter().map(|r| r.key.as_str()).collect();
        assert_eq!(keys, vec!["0", "998"]);
    }

    #[test]
    fn test_wrong_arity_never_writes() {
        let store = InMemoryWorldState::new();
        let chaincode = TunaChaincode::default();

        let argument_taking = Operation::ALL.into_iter().filter(|op| op.arity() > 0);
        for op in argument_taking {
            for count in 0..=10 {
                if count == op.arity() {
                    continue;
                }
                let args: Vec<String> = (0..count).map(|i| i.to_string()).collect();
                let result = chaincode.call(&store, op.name(), &args);

                assert_eq!(
                    result,
                    Err(ChaincodeError::Arity {
                        operation: op,
                        expected: op.arity(),
                        actual: count,
                    }),
                    "{op} with {count} args"
                );
            }
        }

        assert!(store.is_empty().unwrap());
    }

    #[test]
    fn test_argument_less_operations_accept_any_count() {
        let store = InMemoryWorldState::new();
        let chaincode = TunaChaincode::default();

        for count in 0..=10 {
            let args: Vec<String> = vec![String::new(); count];
            assert!(chaincode.call(&store, "initLedger", &args).is_ok(), "{count} args");

            let payload = chaincode.call(&store, "queryAllTuna", &args).unwrap();
            let results: Vec<QueryResult> = serde_json::from_slice(&payload).unwrap();
            assert_eq!(results.len(), 10, "{count} args");
        }
    }
}
