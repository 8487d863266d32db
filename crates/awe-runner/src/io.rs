use awe_core::{detect_yaml_duplicate_keys, Issue, IssueSeverity, Workflow};
use serde_json::Value;

pub fn looks_like_json(input: &str) -> bool {
    let trimmed = input.trim_start();
    trimmed.starts_with('{') || trimmed.starts_with('[')
}

/// Parses a workflow document from YAML or JSON, auto-detected. An
/// empty document reads as an empty workflow.
pub fn parse_workflow_text(input: &str) -> Result<Workflow, Vec<Issue>> {
    let mut value = if looks_like_json(input) {
        serde_json::from_str::<Value>(input).map_err(|err| {
            vec![workflow_issue(
                format!("json parse failed: {err}"),
                "workflow.json_parse_error",
                Some(err.line()),
                Some(err.column()),
            )]
        })?
    } else {
        let issues = detect_yaml_duplicate_keys(input);
        if !issues.is_empty() {
            return Err(issues);
        }
        let yaml: serde_yaml::Value = serde_yaml::from_str(input).map_err(|err| {
            let location = err.location();
            vec![workflow_issue(
                format!("yaml parse failed: {err}"),
                "workflow.yaml_parse_error",
                location.as_ref().map(|at| at.line()),
                location.as_ref().map(|at| at.column()),
            )]
        })?;
        serde_json::to_value(yaml).map_err(|err| {
            vec![workflow_issue(
                format!("yaml-to-json conversion failed: {err}"),
                "workflow.to_json_error",
                None,
                None,
            )]
        })?
    };

    if value.is_null() {
        value = Value::Object(serde_json::Map::new());
    }

    serde_json::from_value::<Workflow>(value).map_err(|err| {
        vec![workflow_issue(
            format!("workflow parse failed: {err}"),
            "workflow.typed_deserialize_error",
            None,
            None,
        )]
    })
}

pub fn render_workflow_yaml(workflow: &Workflow) -> Result<String, serde_yaml::Error> {
    serde_yaml::to_string(workflow)
}

fn workflow_issue(
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
#[path = "io_test.rs"]
mod tests;
