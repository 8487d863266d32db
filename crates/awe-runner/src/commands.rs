use awe_core::{AccessLevel, JobField, PermissionScope};
use serde::{Deserialize, Serialize};

pub const EDIT_COMMAND_SCHEMA_0_0_1: &str = "awe-edit-command/0.0.1";

/// One scripted editing action against an open job session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "kebab-case")]
pub enum EditRequest {
    /// Replaces one draft field, e.g.
    /// `{"op":"set-field","key":"timeout-minutes","value":30}`.
    SetField(JobField),
    SetPermission {
        scope: PermissionScope,
        level: AccessLevel,
    },
    ClearPermission {
        scope: PermissionScope,
    },
    ApplyText {
        text: String,
    },
    Save,
    Delete,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EditCommandEnvelope {
    pub schema: String,
    pub command: EditRequest,
}

impl EditCommandEnvelope {
    pub fn new(command: EditRequest) -> Self {
        Self {
            schema: EDIT_COMMAND_SCHEMA_0_0_1.to_string(),
            command,
        }
    }
}

pub fn encode_edit_command_jsonl_line(
    envelope: &EditCommandEnvelope,
) -> serde_json::Result<String> {
    let mut line = serde_json::to_string(envelope)?;
    line.push('\n');
    Ok(line)
}

pub fn parse_edit_command_jsonl_line(line: &str) -> serde_json::Result<EditCommandEnvelope> {
    serde_json::from_str::<EditCommandEnvelope>(line.trim_end())
}

#[cfg(test)]
#[path = "commands_test.rs"]
mod tests;
