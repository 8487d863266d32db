pub mod digest;
pub mod documents;
pub mod fields;
pub mod issues;
pub mod text;

pub use digest::{canonical_json_bytes, digest_hex};
pub use documents::{
    AccessLevel, Concurrency, Defaults, Environment, Job, PermissionScope, PermissionSet,
    RunDefaults, StringOrList, Workflow,
};
pub use fields::{
    apply_job_field, JobField, JobFieldKind, SettingsSection, UnknownSectionError,
};
pub use issues::{Issue, IssueSeverity};
pub use text::{
    detect_yaml_duplicate_keys, parse_job_text, render_job_text, section_anchor, RenderTextError,
};
