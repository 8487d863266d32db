mod duplicate_keys;

use crate::documents::Job;
use crate::fields::{JobFieldKind, SettingsSection};
use crate::issues::{Issue, IssueSeverity};
use regex::Regex;
use serde_json::Value;

pub use duplicate_keys::detect_yaml_duplicate_keys;

#[derive(Debug, thiserror::Error)]
pub enum RenderTextError {
    #[error("failed to render job as yaml: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Renders a job as editable YAML. `steps` is not part of the text
/// surface and is left out of the rendering.
pub fn render_job_text(job: &Job) -> Result<String, RenderTextError> {
    let mut view = job.clone();
    view.steps = None;
    Ok(serde_yaml::to_string(&view)?)
}

/// Parses edited job YAML back into a typed job. Empty text reads
/// back as an empty job, and a pasted `steps` key is discarded; the
/// caller decides which steps the resulting job carries.
pub fn parse_job_text(input: &str) -> Result<Job, Vec<Issue>> {
    let issues = detect_yaml_duplicate_keys(input);
    if !issues.is_empty() {
        return Err(issues);
    }

    let yaml_value: serde_yaml::Value = serde_yaml::from_str(input).map_err(|err| {
        let location = err.location();
        vec![parse_issue(
            format!("yaml parse failed: {err}"),
            "yaml.parse_error",
            location.as_ref().map(|at| at.line()),
            location.as_ref().map(|at| at.column()),
        )]
    })?;

    let mut value = serde_json::to_value(yaml_value).map_err(|err| {
        vec![parse_issue(
            format!("yaml-to-json conversion failed: {err}"),
            "yaml.to_json_error",
            None,
            None,
        )]
    })?;

    if value.is_null() {
        value = Value::Object(serde_json::Map::new());
    }
    if let Value::Object(map) = &mut value {
        map.remove("steps");
    }

    serde_json::from_value::<Job>(value).map_err(|err| {
        vec![parse_issue(
            format!("job parse failed: {err}"),
            "job.typed_deserialize_error",
            None,
            None,
        )]
    })
}

/// Returns the 1-based line on which `section` first surfaces in the
/// rendered text, i.e. the earliest top-level key belonging to it.
pub fn section_anchor(text: &str, section: SettingsSection) -> Option<usize> {
    let keys: Vec<&str> = section.field_kinds().map(JobFieldKind::as_str).collect();
    let pattern = format!(r"(?m)^(?:{})\s*:", keys.join("|"));
    let regex = Regex::new(&pattern).expect("valid regex");
    let found = regex.find(text)?;
    Some(text[..found.start()].matches('\n').count() + 1)
}

fn parse_issue(
    message: String,
    reference: &str,
    line: Option<usize>,
    column: Option<usize>,
) -> Issue {
    Issue {
        kind: "parse_error".to_string(),
        severity: IssueSeverity::Error,
        message,
        line,
        column,
        reference: Some(reference.to_string()),
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
