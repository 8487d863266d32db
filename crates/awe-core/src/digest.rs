use serde_json::{Map, Value};
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;

/// Canonical JSON encoding: object keys sorted recursively, arrays kept
/// in order. Two values that differ only in object key order encode to
/// the same bytes.
pub fn canonical_json_bytes(value: &Value) -> serde_json::Result<Vec<u8>> {
    serde_json::to_vec(&sort_keys(value))
}

pub fn digest_hex(value: &Value) -> serde_json::Result<String> {
    let bytes = canonical_json_bytes(value)?;
    let digest = Sha256::digest(bytes);
    Ok(format!("{digest:x}"))
}

fn sort_keys(value: &Value) -> Value {
    match value {
        Value::Object(object) => {
            let ordered = object
                .iter()
                .map(|(key, value)| (key.clone(), sort_keys(value)))
                .collect::<BTreeMap<_, _>>();
            let mut out = Map::new();
            for (key, value) in ordered {
                out.insert(key, value);
            }
            Value::Object(out)
        }
        Value::Array(items) => Value::Array(items.iter().map(sort_keys).collect()),
        _ => value.clone(),
    }
}

#[cfg(test)]
#[path = "digest_test.rs"]
mod tests;
