/// Tolerant loading of the JSON data payload.
use std::path::Path;

use serde_json::{Map, Value};
use tracing::debug;

/// Load the data object for a compile request.
///
/// Never fails: a missing path, an unreadable file, malformed JSON, or a
/// top-level value that is not an object all yield an empty map.
#[must_use]
pub fn load_data(path: Option<&Path>) -> Map<String, Value> {
    let Some(path) = path else {
        return Map::new();
    };

    let raw = match std::fs::read(path) {
        Ok(raw) => raw,
        Err(e) => {
            debug!(path = %path.display(), error = %e, "data file unreadable, sending empty data");
            return Map::new();
        }
    };

    match serde_json::from_slice::<Value>(&raw) {
        Ok(Value::Object(map)) => map,
        Ok(other) => {
            debug!(path = %path.display(), kind = json_kind(&other), "data is not a JSON object, sending empty data");
            Map::new()
        }
        Err(e) => {
            debug!(path = %path.display(), error = %e, "data file is not valid JSON, sending empty data");
            Map::new()
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
