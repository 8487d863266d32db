use super::*;
use serde_json::json;

#[test]
fn set_field_wire_form_flattens_the_field() {
    let envelope = EditCommandEnvelope::new(EditRequest::SetField(JobField::TimeoutMinutes(
        Some(30),
    )));
    let encoded = serde_json::to_value(&envelope).unwrap();

    assert_eq!(
        encoded,
        json!({
            "schema": "awe-edit-command/0.0.1",
            "command": { "op": "set-field", "key": "timeout-minutes", "value": 30 }
        })
    );

    let decoded: EditCommandEnvelope = serde_json::from_value(encoded).unwrap();
    assert_eq!(decoded, envelope);
}

#[test]
fn permission_ops_round_trip() {
    let set = EditRequest::SetPermission {
        scope: PermissionScope::PullRequests,
        level: AccessLevel::Write,
    };
    assert_eq!(
        serde_json::to_value(&set).unwrap(),
        json!({ "op": "set-permission", "scope": "pull-requests", "level": "write" })
    );

    let clear: EditRequest =
        serde_json::from_value(json!({ "op": "clear-permission", "scope": "id-token" })).unwrap();
    assert_eq!(
        clear,
        EditRequest::ClearPermission {
            scope: PermissionScope::IdToken
        }
    );
}

#[test]
fn bare_ops_parse_from_tag_only_records() {
    let save: EditRequest = serde_json::from_value(json!({ "op": "save" })).unwrap();
    assert_eq!(save, EditRequest::Save);

    let delete: EditRequest = serde_json::from_value(json!({ "op": "delete" })).unwrap();
    assert_eq!(delete, EditRequest::Delete);
}

#[test]
fn jsonl_line_round_trips() {
    let envelope = EditCommandEnvelope::new(EditRequest::ApplyText {
        text: "name: Build\n".to_string(),
    });
    let line = encode_edit_command_jsonl_line(&envelope).unwrap();

    assert!(line.ends_with('\n'));
    assert_eq!(parse_edit_command_jsonl_line(&line).unwrap(), envelope);
}

#[test]
fn unknown_envelope_fields_are_rejected() {
    let result = parse_edit_command_jsonl_line(
        r#"{"schema":"awe-edit-command/0.0.1","command":{"op":"save"},"extra":1}"#,
    );

    assert!(result.is_err());
}

#[test]
fn set_field_without_a_key_is_rejected() {
    let result: serde_json::Result<EditRequest> =
        serde_json::from_value(json!({ "op": "set-field" }));

    assert!(result.is_err());
}
