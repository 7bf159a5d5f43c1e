//! Defensive decoding of JSON list columns
//!
//! List-valued columns (product features, specifications, ...) have been written
//! over time as native JSON arrays, as JSON-encoded strings, and sometimes not at
//! all. Every read goes through [`parse_json_array`] so callers always get a list.

use serde::de::DeserializeOwned;
use serde_json::Value;

/// Maximum number of string layers unwrapped before giving up.
const MAX_ENCODING_DEPTH: usize = 3;

/// Decode a raw column value into a list, falling back to an empty list.
///
/// Accepted shapes:
/// - a native array: `["a", "b"]`
/// - a JSON-encoded string holding an array: `"[\"a\",\"b\"]"` (also double encoded)
/// - `null`, an empty string, or anything unparsable, which yields `[]`
pub fn parse_json_array<T: DeserializeOwned>(value: &Value) -> Vec<T> {
    parse_json_array_or(value, Vec::new())
}

/// Same as [`parse_json_array`] with an explicit default.
pub fn parse_json_array_or<T: DeserializeOwned>(value: &Value, default: Vec<T>) -> Vec<T> {
    match unwrap_encoded(value, 0) {
        Some(Value::Array(items)) => {
            match serde_json::from_value::<Vec<T>>(Value::Array(items)) {
                Ok(list) => list,
                Err(e) => {
                    tracing::debug!("JSON list has unexpected element shape: {}", e);
                    default
                }
            }
        }
        _ => default,
    }
}

/// Decode a nullable text column into a `Value` without failing.
///
/// Text that is not valid JSON is kept as a plain string value so that
/// [`parse_json_array`] can still make a decision about it.
pub fn raw_json_from_text(text: Option<&str>) -> Value {
    match text {
        None => Value::Null,
        Some(s) if s.trim().is_empty() => Value::Null,
        Some(s) => serde_json::from_str(s).unwrap_or_else(|_| Value::String(s.to_string())),
    }
}

fn unwrap_encoded(value: &Value, depth: usize) -> Option<Value> {
    match value {
        Value::Array(_) => Some(value.clone()),
        Value::String(s) if depth < MAX_ENCODING_DEPTH => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return None;
            }
            serde_json::from_str::<Value>(trimmed)
                .ok()
                .and_then(|inner| unwrap_encoded(&inner, depth + 1))
        }
        _ => None,
    }
}
