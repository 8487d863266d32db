use awe_core::{digest_hex, Workflow};
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const CHANGELOG_SCHEMA_0_0_1: &str = "awe-changelog/0.0.1";

const REDACTED: &str = "[REDACTED]";

/// One committed edit: the status message shown for it plus the full
/// workflow as it stood after the commit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChangeLogEntry {
    pub schema: String,
    pub seq: u64,
    pub message: String,
    pub digest: String,
    pub change: Workflow,
}

impl ChangeLogEntry {
    pub fn new(seq: u64, message: impl Into<String>, change: Workflow) -> Self {
        let snapshot = serde_json::to_value(&change).unwrap_or(Value::Null);
        let digest = digest_hex(&snapshot).unwrap_or_default();
        Self {
            schema: CHANGELOG_SCHEMA_0_0_1.to_string(),
            seq,
            message: message.into(),
            digest,
            change,
        }
    }
}

pub fn encode_changelog_jsonl_line(entry: &ChangeLogEntry) -> serde_json::Result<String> {
    let mut line = serde_json::to_string(entry)?;
    line.push('\n');
    Ok(line)
}

pub fn parse_changelog_jsonl_line(line: &str) -> serde_json::Result<ChangeLogEntry> {
    serde_json::from_str::<ChangeLogEntry>(line.trim_end())
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChangeLogSequenceError {
    #[error("change log is empty")]
    Empty,
    #[error("change log must start at 1, got {actual}")]
    InvalidStart { actual: u64 },
    #[error("change log is not contiguous at index {index}: expected {expected}, got {actual}")]
    NonContiguous {
        index: usize,
        expected: u64,
        actual: u64,
    },
}

/// Entries are numbered from 1 with no gaps.
pub fn ensure_contiguous_sequence(
    entries: &[ChangeLogEntry],
) -> Result<(), ChangeLogSequenceError> {
    let Some(first) = entries.first() else {
        return Err(ChangeLogSequenceError::Empty);
    };
    if first.seq != 1 {
        return Err(ChangeLogSequenceError::InvalidStart { actual: first.seq });
    }
    for index in 1..entries.len() {
        let expected = entries[index - 1].seq + 1;
        let actual = entries[index].seq;
        if actual != expected {
            return Err(ChangeLogSequenceError::NonContiguous {
                index,
                expected,
                actual,
            });
        }
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum RedactMode {
    #[default]
    Off,
    Values,
}

/// Replaces `env` and `with` values across every job of the snapshot.
/// The digest keeps describing the unredacted workflow.
pub fn redact_changelog_entry(entry: &ChangeLogEntry, mode: RedactMode) -> ChangeLogEntry {
    if mode == RedactMode::Off {
        return entry.clone();
    }
    let mut redacted = entry.clone();
    for job in redacted.change.jobs.values_mut() {
        if let Some(env) = &mut job.env {
            for value in env.values_mut() {
                *value = Value::String(REDACTED.to_string());
            }
        }
        if let Some(with) = &mut job.with {
            for value in with.values_mut() {
                *value = Value::String(REDACTED.to_string());
            }
        }
    }
    redacted
}

#[cfg(test)]
#[path = "changelog_test.rs"]
mod tests;
