use super::{canonical_json_bytes, digest_hex};
use serde_json::json;

#[test]
fn object_keys_are_canonicalized() {
    let value = json!({"b": 2, "a": 1, "nested": {"z": 2, "x": 1}});
    let bytes = canonical_json_bytes(&value).expect("must encode");
    let text = String::from_utf8(bytes).expect("must be utf8 json");
    assert_eq!(text, r#"{"a":1,"b":2,"nested":{"x":1,"z":2}}"#);
}

#[test]
fn digest_ignores_key_ordering() {
    let left = json!({"b": 2, "a": 1});
    let right = json!({"a": 1, "b": 2});
    assert_eq!(
        digest_hex(&left).expect("hash"),
        digest_hex(&right).expect("hash")
    );
}

#[test]
fn digest_distinguishes_values() {
    let left = json!({"a": 1});
    let right = json!({"a": 2});
    assert_ne!(
        digest_hex(&left).expect("hash"),
        digest_hex(&right).expect("hash")
    );
}
