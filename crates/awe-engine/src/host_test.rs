use super::{encode_host_jsonl_line, HostChannel, HostMessage, RecordingHostChannel};
use serde_json::json;

#[test]
fn delete_message_wire_form() {
    let message = HostMessage::DeleteJob {
        id: "build".to_string(),
    };

    assert_eq!(
        serde_json::to_value(&message).unwrap(),
        json!({ "action": "deleteJob", "id": "build" })
    );
}

#[test]
fn recording_channel_keeps_post_order() {
    let channel = RecordingHostChannel::new();
    channel.post(&HostMessage::DeleteJob {
        id: "build".to_string(),
    });
    channel.post(&HostMessage::DeleteJob {
        id: "test".to_string(),
    });

    let messages = channel.take_messages();
    assert_eq!(messages.len(), 2);
    assert_eq!(
        messages[0],
        HostMessage::DeleteJob {
            id: "build".to_string()
        }
    );
    assert!(channel.messages().is_empty());
}

#[test]
fn jsonl_line_is_newline_terminated() {
    let line = encode_host_jsonl_line(&HostMessage::DeleteJob {
        id: "deploy".to_string(),
    })
    .unwrap();

    assert_eq!(line, "{\"action\":\"deleteJob\",\"id\":\"deploy\"}\n");
}
