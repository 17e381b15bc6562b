use std::collections::BTreeMap;
use std::iter::FromIterator;

use ::serde::Serialize;
use photoprod_core::errors::{ErrorInfo, PhotoprodError};
use serde_json::{Map, Value};

use crate::run::RunSummary;

fn serde_error(code: &str, err: impl ToString) -> PhotoprodError {
    PhotoprodError::Serde(ErrorInfo::new(code, err.to_string()))
}

fn canonicalize(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let ordered: BTreeMap<_, _> = map
                .into_iter()
                .map(|(key, val)| (key, canonicalize(val)))
                .collect();
            Value::Object(Map::from_iter(ordered))
        }
        Value::Array(values) => Value::Array(values.into_iter().map(canonicalize).collect()),
        other => other,
    }
}

/// Serializes a value into canonical JSON bytes with sorted object keys.
///
/// Non-finite floats become `null`.
pub fn to_canonical_json_bytes<T: Serialize>(value: &T) -> Result<Vec<u8>, PhotoprodError> {
    let value = serde_json::to_value(value).map_err(|err| serde_error("json-encode", err))?;
    let canonical = canonicalize(value);
    let mut bytes = Vec::new();
    serde_json::to_writer(&mut bytes, &canonical).map_err(|err| serde_error("json-write", err))?;
    Ok(bytes)
}

/// Serialises a run summary to pretty JSON.
pub fn summary_to_json(summary: &RunSummary) -> Result<String, PhotoprodError> {
    serde_json::to_string_pretty(summary).map_err(|err| serde_error("summary-serialize", err))
}

/// Restores a run summary from JSON.
pub fn summary_from_json(json: &str) -> Result<RunSummary, PhotoprodError> {
    serde_json::from_str(json).map_err(|err| serde_error("summary-deserialize", err))
}
