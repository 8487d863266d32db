pub mod changelog;
pub mod confirm;
pub mod host;
pub mod session;
pub mod store;

pub use changelog::{
    encode_changelog_jsonl_line, ensure_contiguous_sequence, parse_changelog_jsonl_line,
    redact_changelog_entry, ChangeLogEntry, ChangeLogSequenceError, RedactMode,
    CHANGELOG_SCHEMA_0_0_1,
};
pub use confirm::{AlwaysConfirm, ConfirmPrompt, NeverConfirm};
pub use host::{encode_host_jsonl_line, HostChannel, HostMessage, RecordingHostChannel};
pub use session::{DeleteOutcome, EditSurface, JobEditSession};
pub use store::WorkflowStore;
