//! # Domain Entities
//!
//! ## Key vs. `id`
//!
//! A record is stored under a key chosen by the caller. The record's own `id`
//! is a separate catch identifier. The two are independent: nothing derives
//! one from the other and nothing checks that they match. The seed data, for
//! example, stores catch `923F` under key `1`.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A tuna catch as stored in the world state.
///
/// Every field is a free-form string stored verbatim. Absent fields decode as
/// empty strings, so partially populated records round-trip. A member holding
/// `null`, a number or any other non-string value also decodes as `""`.
///
/// Field order here is the member order of the JSON encoding.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TunaRecord {
    /// Catch identifier.
    #[serde(deserialize_with = "lenient_string")]
    pub id: String,
    /// Sensor reading, not validated.
    #[serde(deserialize_with = "lenient_string")]
    pub temperature: String,
    /// Sensor reading, not validated.
    #[serde(deserialize_with = "lenient_string")]
    pub humidity: String,
    /// Coordinate string, e.g. `"67.0006, -70.5476"`.
    #[serde(deserialize_with = "lenient_string")]
    pub location: String,
    /// Catch time, not validated.
    #[serde(deserialize_with = "lenient_string")]
    pub timestamp: String,
    /// Custody marker, `"In"` or `"Out"` by convention.
    #[serde(deserialize_with = "lenient_string")]
    pub agreement: String,
    /// Custody status, the only field `changeStatus` touches.
    #[serde(deserialize_with = "lenient_string")]
    pub status: String,
}

impl TunaRecord {
    /// Replace the custody status, leaving every other field as is.
    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = status.into();
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        _ => Ok(String::new()),
    }
}

/// One element of the `queryAllRecords` payload.
///
/// Serialises as `{"Key": "...", "Record": {...}}` with the record nested as
/// an object, not a string.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryResult {
    #[serde(rename = "Key")]
    pub key: String,
    #[serde(rename = "Record")]
    pub record: TunaRecord,
}
