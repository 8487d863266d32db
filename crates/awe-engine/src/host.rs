use serde::{Deserialize, Serialize};
use std::cell::RefCell;

/// Outbound message to an embedding host application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum HostMessage {
    DeleteJob { id: String },
}

/// Fire-and-forget channel to the host. No reply is consumed.
pub trait HostChannel {
    fn post(&self, message: &HostMessage);
}

/// Buffers posted messages for later inspection or draining into a
/// sink.
#[derive(Debug, Default)]
pub struct RecordingHostChannel {
    messages: RefCell<Vec<HostMessage>>,
}

impl RecordingHostChannel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<HostMessage> {
        self.messages.borrow().clone()
    }

    pub fn take_messages(&self) -> Vec<HostMessage> {
        self.messages.borrow_mut().drain(..).collect()
    }
}

impl HostChannel for RecordingHostChannel {
    fn post(&self, message: &HostMessage) {
        self.messages.borrow_mut().push(message.clone());
    }
}

pub fn encode_host_jsonl_line(message: &HostMessage) -> serde_json::Result<String> {
    let mut line = serde_json::to_string(message)?;
    line.push('\n');
    Ok(line)
}

#[cfg(test)]
#[path = "host_test.rs"]
mod tests;
