/*
[INPUT]:  Raw JSON bodies returned by list endpoints
[OUTPUT]: Ordered item sequences extracted from the `data` field
[POS]:    Data layer - response shape helpers
[UPDATE]: When list response envelopes change
*/

use serde_json::Value;

/// Items under `data`; a missing or non-array field yields an empty list
pub fn list_items(response: Value) -> Vec<Value> {
    match response {
        Value::Object(mut map) => match map.remove("data") {
            Some(Value::Array(items)) => items,
            _ => Vec::new(),
        },
        _ => Vec::new(),
    }
}
