//! # Record Codec
//!
//! JSON encoding of `TunaRecord` values in the world state.
//!
//! - `encode` is deterministic: members appear as
//!   `id, temperature, humidity, location, timestamp, agreement, status`
//! - `decode` is permissive about shape (missing and non-string members
//!   become `""`, unknown members are ignored) but strict about syntax:
//!   anything that is not a JSON object is `MalformedRecord`

use crate::domain::TunaRecord;
use crate::errors::ChaincodeError;
use serde_json::Value;

/// Serialise a record for `put_state`.
pub fn encode(record: &TunaRecord) -> Result<Vec<u8>, ChaincodeError> {
    Ok(serde_json::to_vec(record)?)
}

/// Deserialise bytes read from the world state.
pub fn decode(bytes: &[u8]) -> Result<TunaRecord, ChaincodeError> {
    let value: Value = serde_json::from_slice(bytes)?;
    if !value.is_object() {
        return Err(ChaincodeError::MalformedRecord(format!(
            "expected a JSON object, found {}",
            json_kind(&value)
        )));
    }
    Ok(serde_json::from_value(value)?)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
