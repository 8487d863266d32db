use crate::documents::{
    Concurrency, Defaults, Environment, Job, PermissionSet, StringOrList,
};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One editable job setting together with its new value. This is the
/// update unit of the draft protocol: exactly one field changes per
/// application, and matching is exhaustive over the editable set.
/// `None` removes the field. There is deliberately no variant for
/// `steps`.
///
/// The wire layout is `{ "key": "<field>", "value": <new value> }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "key", content = "value", rename_all = "kebab-case")]
pub enum JobField {
    Name(Option<String>),
    If(Option<String>),
    TimeoutMinutes(Option<u64>),
    Needs(Option<StringOrList>),
    RunsOn(Option<StringOrList>),
    Uses(Option<String>),
    ContinueOnError(Option<bool>),
    Permissions(Option<PermissionSet>),
    With(Option<IndexMap<String, Value>>),
    Env(Option<IndexMap<String, Value>>),
    Environment(Option<Environment>),
    Concurrency(Option<Concurrency>),
    Outputs(Option<IndexMap<String, String>>),
    Defaults(Option<Defaults>),
}

impl JobField {
    pub fn kind(&self) -> JobFieldKind {
        match self {
            JobField::Name(_) => JobFieldKind::Name,
            JobField::If(_) => JobFieldKind::If,
            JobField::TimeoutMinutes(_) => JobFieldKind::TimeoutMinutes,
            JobField::Needs(_) => JobFieldKind::Needs,
            JobField::RunsOn(_) => JobFieldKind::RunsOn,
            JobField::Uses(_) => JobFieldKind::Uses,
            JobField::ContinueOnError(_) => JobFieldKind::ContinueOnError,
            JobField::Permissions(_) => JobFieldKind::Permissions,
            JobField::With(_) => JobFieldKind::With,
            JobField::Env(_) => JobFieldKind::Env,
            JobField::Environment(_) => JobFieldKind::Environment,
            JobField::Concurrency(_) => JobFieldKind::Concurrency,
            JobField::Outputs(_) => JobFieldKind::Outputs,
            JobField::Defaults(_) => JobFieldKind::Defaults,
        }
    }
}

/// Returns a copy of `job` with exactly the field carried by `field`
/// replaced. Everything else, `steps` included, is untouched.
pub fn apply_job_field(job: &Job, field: JobField) -> Job {
    let mut next = job.clone();
    match field {
        JobField::Name(value) => next.name = value,
        JobField::If(value) => next.r#if = value,
        JobField::TimeoutMinutes(value) => next.timeout_minutes = value,
        JobField::Needs(value) => next.needs = value,
        JobField::RunsOn(value) => next.runs_on = value,
        JobField::Uses(value) => next.uses = value,
        JobField::ContinueOnError(value) => next.continue_on_error = value,
        JobField::Permissions(value) => next.permissions = value,
        JobField::With(value) => next.with = value,
        JobField::Env(value) => next.env = value,
        JobField::Environment(value) => next.environment = value,
        JobField::Concurrency(value) => next.concurrency = value,
        JobField::Outputs(value) => next.outputs = value,
        JobField::Defaults(value) => next.defaults = value,
    }
    next
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JobFieldKind {
    Name,
    If,
    TimeoutMinutes,
    Needs,
    RunsOn,
    Uses,
    ContinueOnError,
    Permissions,
    With,
    Env,
    Environment,
    Concurrency,
    Outputs,
    Defaults,
}

impl JobFieldKind {
    pub const ALL: [JobFieldKind; 14] = [
        JobFieldKind::Name,
        JobFieldKind::If,
        JobFieldKind::TimeoutMinutes,
        JobFieldKind::Needs,
        JobFieldKind::RunsOn,
        JobFieldKind::Uses,
        JobFieldKind::ContinueOnError,
        JobFieldKind::Permissions,
        JobFieldKind::With,
        JobFieldKind::Env,
        JobFieldKind::Environment,
        JobFieldKind::Concurrency,
        JobFieldKind::Outputs,
        JobFieldKind::Defaults,
    ];

    /// The key the field serializes under in job YAML.
    pub fn as_str(self) -> &'static str {
        match self {
            JobFieldKind::Name => "name",
            JobFieldKind::If => "if",
            JobFieldKind::TimeoutMinutes => "timeout-minutes",
            JobFieldKind::Needs => "needs",
            JobFieldKind::RunsOn => "runs-on",
            JobFieldKind::Uses => "uses",
            JobFieldKind::ContinueOnError => "continue-on-error",
            JobFieldKind::Permissions => "permissions",
            JobFieldKind::With => "with",
            JobFieldKind::Env => "env",
            JobFieldKind::Environment => "environment",
            JobFieldKind::Concurrency => "concurrency",
            JobFieldKind::Outputs => "outputs",
            JobFieldKind::Defaults => "defaults",
        }
    }

    pub fn section(self) -> SettingsSection {
        match self {
            JobFieldKind::Name
            | JobFieldKind::If
            | JobFieldKind::TimeoutMinutes
            | JobFieldKind::Needs
            | JobFieldKind::RunsOn
            | JobFieldKind::Uses
            | JobFieldKind::ContinueOnError => SettingsSection::Basic,
            JobFieldKind::Permissions => SettingsSection::Permissions,
            JobFieldKind::With => SettingsSection::With,
            JobFieldKind::Env => SettingsSection::Env,
            JobFieldKind::Environment => SettingsSection::Environment,
            JobFieldKind::Concurrency => SettingsSection::Concurrency,
            JobFieldKind::Outputs => SettingsSection::Outputs,
            JobFieldKind::Defaults => SettingsSection::Defaults,
        }
    }
}

/// The settings groups a job panel is organized into. Doubles as the
/// scroll/highlight hint handed to the text surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SettingsSection {
    Basic,
    Permissions,
    With,
    Env,
    Environment,
    Concurrency,
    Outputs,
    Defaults,
}

impl SettingsSection {
    pub const ALL: [SettingsSection; 8] = [
        SettingsSection::Basic,
        SettingsSection::Permissions,
        SettingsSection::With,
        SettingsSection::Env,
        SettingsSection::Environment,
        SettingsSection::Concurrency,
        SettingsSection::Outputs,
        SettingsSection::Defaults,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SettingsSection::Basic => "basic",
            SettingsSection::Permissions => "permissions",
            SettingsSection::With => "with",
            SettingsSection::Env => "env",
            SettingsSection::Environment => "environment",
            SettingsSection::Concurrency => "concurrency",
            SettingsSection::Outputs => "outputs",
            SettingsSection::Defaults => "defaults",
        }
    }

    /// The field kinds grouped under this section, in display order.
    pub fn field_kinds(self) -> impl Iterator<Item = JobFieldKind> {
        JobFieldKind::ALL
            .into_iter()
            .filter(move |kind| kind.section() == self)
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("unknown settings section `{0}`")]
pub struct UnknownSectionError(pub String);

impl std::str::FromStr for SettingsSection {
    type Err = UnknownSectionError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        SettingsSection::ALL
            .into_iter()
            .find(|section| section.as_str() == input)
            .ok_or_else(|| UnknownSectionError(input.to_string()))
    }
}

#[cfg(test)]
#[path = "fields_test.rs"]
mod tests;
