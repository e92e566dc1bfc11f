//! # End-to-End Ledger Scenarios
//!
//! Drives the contract through its string boundary (`Chaincode::invoke`), the
//! same path the host platform uses, against each world state adapter.

#[cfg(test)]
mod tests {
    use tc_01_world_state::{FileBackedWorldState, InMemoryWorldState, WorldState};
    use tc_02_tuna_chaincode::prelude::*;

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| (*s).to_string()).collect()
    }

    fn record_at(chaincode: &TunaChaincode, store: &dyn WorldState, key: &str) -> TunaRecord {
        let response = chaincode.invoke(store, "queryRecord", &args(&[key]));
        assert!(response.is_ok(), "queryRecord {key}: {}", response.message);
        decode(&response.payload).expect("stored record decodes")
    }

    fn query_all(chaincode: &TunaChaincode, store: &dyn WorldState) -> Vec<QueryResult> {
        let response = chaincode.invoke(store, "queryAllRecords", &[]);
        assert!(response.is_ok(), "queryAllRecords: {}", response.message);
        serde_json::from_slice(&response.payload).expect("payload is a JSON array")
    }

    // =============================================================================
    // CATCH LIFECYCLE
    // =============================================================================

    fn run_catch_lifecycle(store: &dyn WorldState) {
        let chaincode = TunaChaincode::default();
        assert!(chaincode.init(store).is_ok());

        let response = chaincode.invoke(
            store,
            "recordNew",
            &args(&[
                "923F",
                "923F",
                "10",
                "24",
                "67.0006, -70.5476",
                "1504054225",
                "In",
                "",
            ]),
        );
        assert!(response.is_ok(), "{}", response.message);

        let before = record_at(&chaincode, store, "923F");
        assert_eq!(before.location, "67.0006, -70.5476");
        assert_eq!(before.status, "");

        let response = chaincode.invoke(store, "changeStatus", &args(&["923F", "ACCEPTED"]));
        assert!(response.is_ok(), "{}", response.message);

        let after = record_at(&chaincode, store, "923F");
        assert_eq!(after.status, "ACCEPTED");
        assert_eq!(after.location, before.location);
        assert_eq!(
            TunaRecord {
                status: before.status.clone(),
                ..after
            },
            before
        );
    }

    #[test]
    fn test_catch_lifecycle_in_memory() {
        run_catch_lifecycle(&InMemoryWorldState::new());
    }

    #[test]
    fn test_catch_lifecycle_file_backed() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileBackedWorldState::open(dir.path().join("ledger.state")).unwrap();
        run_catch_lifecycle(&store);
    }

    #[test]
    fn test_recorded_location_is_stored_verbatim() {
        let store = InMemoryWorldState::new();
        let chaincode = TunaChaincode::default();
        let new_catch = args(&[
            "923F",
            "923F",
            "10",
            "24",
            "67.0006,-70.5476",
            "1504054225",
            "In",
            "",
        ]);

        let response = chaincode.invoke(&store, "recordNew", &new_catch);
        assert!(response.is_ok(), "{}", response.message);

        let before = record_at(&chaincode, &store, "923F");
        assert_eq!(before.location, "67.0006,-70.5476");
        assert_eq!(before.status, "");

        let response = chaincode.invoke(&store, "changeStatus", &args(&["923F", "ACCEPTED"]));
        assert!(response.is_ok(), "{}", response.message);

        let after = record_at(&chaincode, &store, "923F");
        assert_eq!(after.status, "ACCEPTED");
        assert_eq!(after.location, before.location);
        assert_eq!(after.location, "67.0006,-70.5476");
    }

    // =============================================================================
    // SEEDING
    // =============================================================================

    #[test]
    fn test_seed_then_query_all_returns_ten_in_key_order() {
        let store = InMemoryWorldState::new();
        let chaincode = TunaChaincode::default();

        assert!(chaincode.invoke(&store, "seedLedger", &[]).is_ok());
        let results = query_all(&chaincode, &store);

        let mut keys: Vec<String> = results.iter().map(|r| r.key.clone()).collect();
        assert_eq!(keys.len(), 10);

        // Scan order is byte-wise, so "10" sorts right after "1"
        assert_eq!(keys[0], "1");
        assert_eq!(keys[1], "10");
        let scanned = keys.clone();
        keys.sort();
        assert_eq!(keys, scanned);

        let mut expected: Vec<String> = (1..=10).map(|i| i.to_string()).collect();
        expected.sort();
        assert_eq!(scanned, expected);

        assert!(results.iter().all(|r| r.record.status.is_empty()));
        assert_eq!(store.open_cursors(), 0);
    }

    #[test]
    fn test_seeded_record_can_change_status() {
        let store = InMemoryWorldState::new();
        let chaincode = TunaChaincode::default();
        chaincode.invoke(&store, "initLedger", &[]);

        let response = chaincode.invoke(&store, "changeStatus", &args(&["4", "DELIVERED"]));
        assert!(response.is_ok());

        let record = record_at(&chaincode, &store, "4");
        assert_eq!(record.id, "P490");
        assert_eq!(record.agreement, "Out");
        assert_eq!(record.status, "DELIVERED");
    }

    #[test]
    fn test_seed_aborts_on_first_failed_write() {
        let store = InMemoryWorldState::new();
        store.set_available(false);

        let response = TunaChaincode::default().invoke(&store, "seedLedger", &[]);
        assert!(!response.is_ok());
        assert!(response.message.contains("Failed to write record 1"));

        store.set_available(true);
        assert!(store.is_empty().unwrap());
    }

    // =============================================================================
    // REJECTIONS
    // =============================================================================

    #[test]
    fn test_query_nonexistent_is_not_found() {
        let store = InMemoryWorldState::new();
        let chaincode = TunaChaincode::default();

        let result = chaincode.call(&store, "queryRecord", &["nonexistent"]);
        assert_eq!(
            result,
            Err(ChaincodeError::NotFound {
                key: "nonexistent".to_string()
            })
        );
    }

    #[test]
    fn test_unknown_operation_is_generic_rejection() {
        let store = InMemoryWorldState::new();
        let response = TunaChaincode::default().invoke(&store, "transferTuna", &args(&["1"]));

        assert!(!response.is_ok());
        assert!(response.payload.is_empty());
        assert!(store.is_empty().unwrap());
    }

    #[test]
    fn test_empty_ledger_query_all_is_empty_array() {
        let store = InMemoryWorldState::new();
        let response = TunaChaincode::default().invoke(&store, "queryAllRecords", &[]);

        assert!(response.is_ok());
        assert_eq!(response.payload, b"[]".to_vec());
    }

    #[test]
    fn test_key_and_id_are_independent() {
        let store = InMemoryWorldState::new();
        let chaincode = TunaChaincode::default();

        chaincode
            .call(
                &store,
                "recordNew",
                &["42", "M83T", "10", "24", "91.2395, -49.4594", "1504057825", "In", ""],
            )
            .unwrap();

        assert_eq!(record_at(&chaincode, &store, "42").id, "M83T");
        assert!(matches!(
            chaincode.call(&store, "queryRecord", &["M83T"]),
            Err(ChaincodeError::NotFound { .. })
        ));
    }
}
