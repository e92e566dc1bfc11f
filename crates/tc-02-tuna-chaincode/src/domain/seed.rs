//! # Demonstration Catches
//!
//! Written by `seedLedger` under keys `"1"` to `"10"`. None carries a status.

use super::entities::TunaRecord;

/// Sensor readings shared by every seeded catch.
const SEED_TEMPERATURE: &str = "10";
const SEED_HUMIDITY: &str = "24";

/// (id, location, timestamp, agreement), in key order.
const SEED_CATCHES: [(&str, &str, &str, &str); 10] = [
    ("923F", "67.0006, -70.5476", "1504054225", "In"),
    ("M83T", "91.2395, -49.4594", "1504057825", "In"),
    ("T012", "58.0148, 59.01391", "1493517025", "In"),
    ("P490", "-45.0945, 0.7949", "1496105425", "Out"),
    ("S439", "-107.6043, 19.5003", "1493512301", "Out"),
    ("J205", "-155.2304, -15.8723", "1494117101", "In"),
    ("S22L", "103.8842, 22.1277", "1496104301", "In"),
    ("EI89", "-132.3207, -34.0983", "1485066691", "In"),
    ("129R", "153.0054, 12.6429", "1485153091", "Out"),
    ("49W4", "51.9435, 8.2735", "1487745091", "In"),
];

/// The seed set as `(key, record)` pairs, keys `"1"..="10"`.
#[must_use]
pub fn seed_records() -> Vec<(String, TunaRecord)> {
    SEED_CATCHES
        .iter()
        .enumerate()
        .map(|(i, (id, location, timestamp, agreement))| {
            let record = TunaRecord {
                id: (*id).to_string(),
                temperature: SEED_TEMPERATURE.to_string(),
                humidity: SEED_HUMIDITY.to_string(),
                location: (*location).to_string(),
                timestamp: (*timestamp).to_string(),
                agreement: (*agreement).to_string(),
                status: String::new(),
            };
            ((i + 1).to_string(), record)
        })
        .collect()
}
